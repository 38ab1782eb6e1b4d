//! Erconv Core - Conversion engine for entity-relationship schemas
//!
//! This crate provides the core functionality for converting a JSON-encoded
//! entity-relationship schema (entities with typed fields, and relationships
//! between entities) into the entity-module format consumed by code
//! generators and ORMs.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror`
//! - **Core Types**: Data structures for schema documents and converted entities
//! - **Conversion Engine**: Convert a schema document to ordered entity records
//!
//! # Example
//!
//! ```
//! use erconv_core::{convert, Result, SchemaDocument};
//!
//! fn example() -> Result<()> {
//!     let document: SchemaDocument = serde_json::from_str(
//!         r#"{
//!             "entities": {
//!                 "User": {"fields": {"user_name": {"type": "string"}}}
//!             },
//!             "relationships": []
//!         }"#,
//!     )?;
//!
//!     let converted = convert(&document)?;
//!     assert_eq!(converted[0].module_name, "user");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod conversion;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use conversion::convert;
pub use error::{Error, Result};
pub use types::{
    // Input document
    SchemaDocument, EntityDef, FieldDef, RelationshipDef,

    // Converted output
    ConvertedEntity, ConvertedField, ConvertedRelation,

    // Mapping tables
    FieldType, RelationKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
