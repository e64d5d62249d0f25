//! Table schema definitions for mess.
//!
//! A schema is loaded from a JSON (or YAML) document, validated once and
//! canonicalized, and is read-only afterwards:
//!
//! ```json
//! {
//!   "table": "users",
//!   "primary_keys": ["id"],
//!   "unique_keys": [["email"], ["last_name", "first_name"]],
//!   "fields": {
//!     "id": {"type": "int", "int": {"min": 1, "max": 1000000}},
//!     "email": {"type": "string", "string": {"type": "ascii", "ascii": {"min_length": 8, "max_length": 32}}}
//!   }
//! }
//! ```

use crate::field::{FieldDefinition, FieldError, RawField};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error opening or reading the schema source
    #[error("open schema definition file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error decoding JSON
    #[error("read schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Error decoding YAML
    #[error("read schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No primary key declared
    #[error("primary keys should not be empty")]
    EmptyPrimaryKeys,

    /// Primary key naming an unknown field
    #[error("primary keys {0:?} is not defined in fields")]
    UndefinedPrimaryKey(String),

    /// Unique key group member naming an unknown field
    #[error("unique keys {0:?} is not defined in fields")]
    UndefinedUniqueKey(String),

    /// Field definition failing its type-specific checks
    #[error("field {field:?}: {source}")]
    InvalidField {
        field: String,
        #[source]
        source: FieldError,
    },
}

/// Stage at which loading a schema failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source could not be opened or read
    Source,
    /// The content did not decode into the schema shape
    Parse,
    /// The decoded schema violates an invariant
    Validation,
}

impl SchemaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } => ErrorKind::Source,
            Self::Json(_) | Self::Yaml(_) => ErrorKind::Parse,
            Self::EmptyPrimaryKeys
            | Self::UndefinedPrimaryKey(_)
            | Self::UndefinedUniqueKey(_)
            | Self::InvalidField { .. } => ErrorKind::Validation,
        }
    }
}

// ============================================================================
// Raw Schema
// ============================================================================

/// Schema as decoded from its source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSchema {
    /// Table name
    #[serde(default)]
    pub table: String,

    /// Primary key field names
    #[serde(default)]
    pub primary_keys: Vec<String>,

    /// Unique key groups
    #[serde(default)]
    pub unique_keys: Vec<Vec<String>>,

    /// Field definitions keyed by field name
    #[serde(default)]
    pub fields: HashMap<String, RawField>,
}

// ============================================================================
// Key Index
// ============================================================================

/// Lookup structures derived once from a validated schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyIndex {
    keys: Vec<String>,
    primary_keys: HashSet<String>,
}

impl KeyIndex {
    fn new<'a>(
        field_names: impl IntoIterator<Item = &'a String>,
        primary_keys: &[String],
    ) -> Self {
        let mut keys: Vec<String> = field_names.into_iter().cloned().collect();
        keys.sort();

        Self {
            keys,
            primary_keys: primary_keys.iter().cloned().collect(),
        }
    }

    /// All field names in ascending order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Check if `name` is declared as a primary key.
    pub fn is_primary_key(&self, name: &str) -> bool {
        self.primary_keys.contains(name)
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Validated, canonicalized table schema.
///
/// Immutable once constructed; share it by reference or `Arc` across
/// generation tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    table: String,
    primary_keys: Vec<String>,
    unique_keys: Vec<Vec<String>>,
    fields: HashMap<String, FieldDefinition>,
    index: KeyIndex,
}

impl Schema {
    /// Load a schema from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are decoded as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );

        let schema = if is_yaml {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            table = %schema.table,
            fields = schema.fields.len(),
            "Loaded schema"
        );

        Ok(schema)
    }

    /// Parse a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: RawSchema = serde_json::from_str(json)?;
        Self::try_from_raw(raw)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let raw: RawSchema = serde_yaml::from_str(yaml)?;
        Self::try_from_raw(raw)
    }

    /// Validate and canonicalize a decoded schema.
    pub fn try_from_raw(raw: RawSchema) -> Result<Self, SchemaError> {
        let RawSchema {
            table,
            mut primary_keys,
            mut unique_keys,
            fields: raw_fields,
        } = raw;

        if primary_keys.is_empty() {
            return Err(SchemaError::EmptyPrimaryKeys);
        }

        if let Some(pk) = primary_keys.iter().find(|pk| !raw_fields.contains_key(*pk)) {
            return Err(SchemaError::UndefinedPrimaryKey(pk.clone()));
        }

        if let Some(uk) = unique_keys
            .iter()
            .flatten()
            .find(|uk| !raw_fields.contains_key(*uk))
        {
            return Err(SchemaError::UndefinedUniqueKey(uk.clone()));
        }

        // Sorted so the reported field is the same on every run
        let mut names: Vec<&String> = raw_fields.keys().collect();
        names.sort();

        let mut fields = HashMap::with_capacity(raw_fields.len());
        for name in names {
            let definition = FieldDefinition::try_from(&raw_fields[name]).map_err(|source| {
                SchemaError::InvalidField {
                    field: name.clone(),
                    source,
                }
            })?;
            fields.insert(name.clone(), definition);
        }

        primary_keys.sort();
        for group in &mut unique_keys {
            group.sort();
        }

        let index = KeyIndex::new(fields.keys(), &primary_keys);

        Ok(Self {
            table,
            primary_keys,
            unique_keys,
            fields,
            index,
        })
    }

    /// Table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Primary key field names, sorted.
    pub fn primary_keys(&self) -> &[String] {
        &self.primary_keys
    }

    /// Unique key groups, each sorted, in declaration order.
    pub fn unique_keys(&self) -> &[Vec<String>] {
        &self.unique_keys
    }

    /// Field definitions keyed by name.
    pub fn fields(&self) -> &HashMap<String, FieldDefinition> {
        &self.fields
    }

    /// Get a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Field definitions in key order.
    pub fn iter_fields(&self) -> impl Iterator<Item = (&str, &FieldDefinition)> + '_ {
        self.index
            .keys()
            .iter()
            .filter_map(|name| self.fields.get(name).map(|f| (name.as_str(), f)))
    }

    /// All field names in ascending order.
    pub fn keys(&self) -> &[String] {
        self.index.keys()
    }

    /// Check if `name` is declared as a primary key.
    pub fn is_primary_key(&self, name: &str) -> bool {
        self.index.is_primary_key(name)
    }

    /// The key lookup derived at load time.
    pub fn key_index(&self) -> &KeyIndex {
        &self.index
    }
}

impl TryFrom<RawSchema> for Schema {
    type Error = SchemaError;

    fn try_from(raw: RawSchema) -> Result<Self, Self::Error> {
        Self::try_from_raw(raw)
    }
}

// ============================================================================
// Tests
// ============================================================================
