//! Convert command handler
//!
//! Reads the input document, parses it, runs the conversion engine, and
//! writes the pretty-printed result. No output is written on any failure.

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use erconv_core::SchemaDocument;
use std::fs;
use tracing::{debug, info, instrument};

/// Handle the convert operation
#[instrument(skip(cli, output), fields(
    input = %cli.input.display(),
    destination = %cli.output.display()
))]
pub fn handle_convert(cli: &Cli, output: &mut OutputWriter) -> Result<()> {
    if !cli.input.exists() {
        return Err(Error::FileNotFound {
            path: cli.input.clone(),
        });
    }

    debug!("Reading input document");
    let content = fs::read_to_string(&cli.input)?;
    debug!("Input file read, {} bytes", content.len());

    let document: SchemaDocument = serde_json::from_str(&content)?;
    info!(
        entities = document.entities.len(),
        relationships = document.relationships.len(),
        "Schema document loaded"
    );

    let converted = erconv_core::convert(&document)?;

    let serialized = serde_json::to_string_pretty(&converted)?;
    fs::write(&cli.output, serialized)?;
    info!("Converted document written");

    output.success(&format!(
        "Conversion completed successfully. Output saved to {}",
        cli.output.display()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;
    use tempfile::tempdir;

    fn cli_for(input: &Path, output: &Path) -> Cli {
        Cli {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            verbose: 0,
            quiet: true,
            no_color: true,
        }
    }

    fn quiet_writer() -> OutputWriter {
        OutputWriter::with_writer(false, true, Box::new(Vec::new()))
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("output.json");

        fs::write(
            &input,
            r#"{
                "entities": {
                    "User": {
                        "fields": {
                            "user_name": {"type": "string", "unique": true},
                            "team_id": {"type": "uuid"}
                        }
                    }
                },
                "relationships": [
                    {"from": "User", "to": "Post", "type": "one-to-many", "name": "Posts", "toField": "user_id"}
                ]
            }"#,
        )
        .unwrap();

        handle_convert(&cli_for(&input, &output), &mut quiet_writer()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!([
                {
                    "entityName": "User",
                    "moduleName": "user",
                    "fields": [
                        {"fieldName": "userName", "fieldType": "string", "unique": true}
                    ],
                    "relations": [
                        {
                            "relationType": "OneToMany",
                            "relatedEntity": "Post",
                            "fieldName": "posts",
                            "nullable": false,
                            "foreignKey": "user"
                        }
                    ]
                }
            ])
        );
    }

    #[test]
    fn test_missing_input_reports_file_not_found() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.json");
        let output = dir.path().join("output.json");

        let err = handle_convert(&cli_for(&input, &output), &mut quiet_writer()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_json_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("output.json");
        fs::write(&input, "{not valid json").unwrap();

        let err = handle_convert(&cli_for(&input, &output), &mut quiet_writer()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_top_level_key_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("output.json");
        fs::write(&input, r#"{"entities": {}}"#).unwrap();

        let err = handle_convert(&cli_for(&input, &output), &mut quiet_writer()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_conversion_error_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("output.json");

        fs::write(
            &input,
            r#"{
                "entities": {"User": {"fields": {"email": {"type": "string"}}}},
                "relationships": [
                    {"from": "User", "to": "Post", "type": "one-to-many", "name": "Posts"}
                ]
            }"#,
        )
        .unwrap();

        let err = handle_convert(&cli_for(&input, &output), &mut quiet_writer()).unwrap_err();
        assert!(matches!(err, Error::Core(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("output.json");

        fs::write(
            &input,
            r#"{"entities": {"User": {"fields": {"email": {"type": "string"}}}}, "relationships": []}"#,
        )
        .unwrap();

        handle_convert(&cli_for(&input, &output), &mut quiet_writer()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("[\n"));
        assert!(written.contains("  {\n"));
    }
}
