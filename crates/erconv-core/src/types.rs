//! Core types and data structures for the erconv conversion engine
//!
//! This module defines the input schema document types, the converted
//! output types, and the two mapping tables (field types and relation
//! kinds) used during conversion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed entity-relationship schema document
///
/// Both top-level keys are mandatory; a document missing either fails to
/// deserialize, which is the generic shape error for malformed input.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    /// Entity definitions, keyed by entity name, in document order
    pub entities: IndexMap<String, EntityDef>,

    /// Relationship definitions, in document order
    pub relationships: Vec<RelationshipDef>,
}

/// An entity definition in the source schema
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDef {
    /// Field definitions, keyed by field name, in document order
    pub fields: IndexMap<String, FieldDef>,
}

/// A field definition in the source schema
///
/// Every attribute except `type` is optional and defaults to false.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Declared field type, mapped through [`FieldType::from_input`]
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub primary_key: bool,

    #[serde(default)]
    pub unique: bool,

    #[serde(default)]
    pub searchable: bool,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub filter_by: bool,

    #[serde(default)]
    pub r#virtual: bool,
}

/// A directed relationship between two entities
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDef {
    /// Owning entity name; relations are attached to this entity's output
    pub from: String,

    /// Related entity name, copied verbatim into the output
    pub to: String,

    /// Cardinality kind, mapped through [`RelationKind::from_input`]
    ///
    /// Kept as a free string: unrecognized values are legal and fall back
    /// to the default kind.
    #[serde(rename = "type")]
    pub kind: String,

    /// Relationship field name, PascalCase-first-letter form
    pub name: Option<String>,

    /// Referencing column on the many side; consulted only for one-to-many
    pub to_field: Option<String>,

    #[serde(default)]
    pub cascade: bool,

    /// Explicit foreign key, overriding any computed default
    pub foreign_key: Option<String>,
}

/// A converted entity record, one per input entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedEntity {
    /// Original entity name, unchanged
    pub entity_name: String,

    /// Entity name lowercased, with no word splitting
    pub module_name: String,

    pub fields: Vec<ConvertedField>,

    pub relations: Vec<ConvertedRelation>,
}

/// A converted field
///
/// Boolean attributes are present-when-true: `false` never appears on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedField {
    /// Field name converted from snake_case to camelCase
    pub field_name: String,

    pub field_type: FieldType,

    #[serde(skip_serializing_if = "is_false")]
    pub primary: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub unique: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub searchable: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub filter_by: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub r#virtual: bool,
}

/// A converted relation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedRelation {
    pub relation_type: RelationKind,

    /// The relationship's `to` entity, verbatim
    pub related_entity: String,

    /// The relationship's `name` with only its first character lowercased;
    /// absent when the input relationship had no name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    /// Always false; not derived from input
    pub nullable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub cascade: bool,
}

/// Target field types produced by the field type map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Object,
}

impl FieldType {
    /// Map a declared source type to its target type
    ///
    /// Unrecognized types fall back to `String`.
    pub fn from_input(ty: &str) -> Self {
        match ty {
            "uuid" | "string" | "text" | "point" | "enum" | "interval" => FieldType::String,
            "number" | "integer" | "decimal" => FieldType::Number,
            "boolean" => FieldType::Boolean,
            "date" | "timestamp" => FieldType::Date,
            "jsonb" => FieldType::Object,
            _ => FieldType::String,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Number => write!(f, "number"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Date => write!(f, "date"),
            FieldType::Object => write!(f, "object"),
        }
    }
}

/// Relation kind labels produced by the relation type map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    /// Map a source cardinality kind to its target label
    ///
    /// Unrecognized kinds fall back to `OneToMany`.
    pub fn from_input(kind: &str) -> Self {
        match kind {
            "one-to-one" => RelationKind::OneToOne,
            "one-to-many" => RelationKind::OneToMany,
            "many-to-one" => RelationKind::ManyToOne,
            "many-to-many" => RelationKind::ManyToMany,
            _ => RelationKind::OneToMany,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::OneToOne => write!(f, "OneToOne"),
            RelationKind::OneToMany => write!(f, "OneToMany"),
            RelationKind::ManyToOne => write!(f, "ManyToOne"),
            RelationKind::ManyToMany => write!(f, "ManyToMany"),
        }
    }
}

/// Serialization predicate for present-when-true boolean attributes
fn is_false(value: &bool) -> bool {
    !*value
}
