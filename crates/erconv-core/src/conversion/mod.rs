//! Conversion engine for entity-relationship schema documents
//!
//! This module implements the transformation from a parsed schema document
//! to the ordered sequence of converted entity records consumed by code
//! generators and ORMs.

mod naming;

use crate::types::{
    ConvertedEntity, ConvertedField, ConvertedRelation, EntityDef, FieldDef, FieldType,
    RelationKind, RelationshipDef, SchemaDocument,
};
use crate::{Error, Result};
use tracing::debug;

/// Convert a schema document into its target entity-module format
///
/// Entities are emitted in document order. For each entity, fields are
/// emitted in document order with foreign-key columns (any field name
/// containing `_id`) dropped, and relations are selected from the full
/// relationship list where `from` matches the entity name, preserving
/// relationship order.
///
/// # Errors
///
/// Returns an error if a `one-to-many` relationship has no `toField` to
/// derive its foreign key from. Every other input converts totally.
pub fn convert(document: &SchemaDocument) -> Result<Vec<ConvertedEntity>> {
    debug!(
        entities = document.entities.len(),
        relationships = document.relationships.len(),
        "converting schema document"
    );

    document
        .entities
        .iter()
        .map(|(entity_name, entity)| convert_entity(entity_name, entity, &document.relationships))
        .collect()
}

fn convert_entity(
    entity_name: &str,
    entity: &EntityDef,
    relationships: &[RelationshipDef],
) -> Result<ConvertedEntity> {
    let fields = entity
        .fields
        .iter()
        .filter(|(field_name, _)| !field_name.contains("_id"))
        .map(|(field_name, field)| convert_field(field_name, field))
        .collect();

    let relations = relationships
        .iter()
        .filter(|rel| rel.from == entity_name)
        .map(convert_relation)
        .collect::<Result<Vec<_>>>()?;

    Ok(ConvertedEntity {
        entity_name: entity_name.to_owned(),
        // No word splitting: a multi-word name lowercases in place.
        module_name: entity_name.to_lowercase(),
        fields,
        relations,
    })
}

fn convert_field(field_name: &str, field: &FieldDef) -> ConvertedField {
    ConvertedField {
        field_name: naming::snake_to_camel(field_name),
        field_type: FieldType::from_input(&field.ty),
        primary: field.primary_key,
        unique: field.unique,
        searchable: field.searchable,
        nullable: field.nullable,
        filter_by: field.filter_by,
        r#virtual: field.r#virtual,
    }
}

fn convert_relation(rel: &RelationshipDef) -> Result<ConvertedRelation> {
    // The default foreign key exists only for one-to-many, keyed on the raw
    // input kind rather than the mapped label.
    let mut foreign_key = if rel.kind == "one-to-many" {
        Some(derive_foreign_key(rel)?)
    } else {
        None
    };

    // An explicit foreign key wins over the computed default, for every
    // relationship kind.
    if let Some(explicit) = &rel.foreign_key {
        foreign_key = Some(explicit.clone());
    }

    Ok(ConvertedRelation {
        relation_type: RelationKind::from_input(&rel.kind),
        related_entity: rel.to.clone(),
        field_name: rel.name.as_deref().map(naming::lower_first),
        nullable: false,
        foreign_key,
        cascade: rel.cascade,
    })
}

/// Derive the default foreign key for a one-to-many relationship
///
/// Splits `toField` on `_`, drops the last segment, rejoins the remainder
/// with `_`, and lowercases only the first character of the result. The
/// joined string keeps its interior underscores.
fn derive_foreign_key(rel: &RelationshipDef) -> Result<String> {
    let to_field = rel.to_field.as_deref().ok_or_else(|| {
        Error::conversion(format!(
            "one-to-many relationship '{}' -> '{}' is missing toField",
            rel.from, rel.to
        ))
    })?;

    let segments: Vec<&str> = to_field.split('_').collect();
    let prefix = segments[..segments.len() - 1].join("_");
    Ok(naming::lower_first(&prefix))
}
