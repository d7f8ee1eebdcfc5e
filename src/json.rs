//! JSON round-trip and file persistence for COCO entities.
//!
//! [`CocoJson`] is the serialize/deserialize capability shared by every
//! entity: canonical JSON out, validated entities in. [`CocoDataset`] layers
//! whole-file save/load on top of it for the four dataset variants.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::CocoError;
use crate::validation::Validate;

/// Options controlling JSON encoding/decoding.
///
/// `pretty` is formatting only and has no semantic effect on the data.
#[derive(Clone, Copy, Debug)]
pub struct JsonOptions {
    /// Omit absent optional fields from output (default). When false,
    /// absent fields are written as explicit `null`.
    pub exclude_absent_fields: bool,

    /// Pretty-print output with indentation.
    pub pretty: bool,

    /// Enable strict-mode validation on input (keypoint triple grouping and
    /// visibility flags).
    pub strict: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            exclude_absent_fields: true,
            pretty: false,
            strict: false,
        }
    }
}

/// Canonical JSON conversion for COCO entities.
///
/// Implemented for every entity in the crate via the blanket impl below.
/// `from_json` is the inverse of `to_json` for any entity whose JSON
/// representation is lossless; the one exception is `Info.date_created`,
/// which serializes date-only and therefore drops any time-of-day component.
pub trait CocoJson: Serialize + DeserializeOwned + Validate {
    /// Serializes to canonical JSON with default options (absent fields
    /// omitted, compact output).
    fn to_json(&self) -> Result<String, CocoError> {
        self.to_json_with(&JsonOptions::default())
    }

    /// Serializes to JSON with explicit options.
    fn to_json_with(&self, options: &JsonOptions) -> Result<String, CocoError> {
        let mut value = serde_json::to_value(self)?;
        if options.exclude_absent_fields {
            strip_nulls(&mut value);
        }
        let text = if options.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    /// Parses and validates an entity from JSON text with default options.
    ///
    /// Unknown input fields are ignored. Missing required fields and
    /// wrong-typed fields fail with [`CocoError::Json`] naming the field;
    /// constraint violations fail with [`CocoError::Validation`] carrying
    /// every issue found.
    fn from_json(json: &str) -> Result<Self, CocoError> {
        Self::from_json_with(json, &JsonOptions::default())
    }

    /// Parses and validates an entity from JSON text with explicit options.
    fn from_json_with(json: &str, options: &JsonOptions) -> Result<Self, CocoError> {
        let entity: Self = serde_json::from_str(json)?;
        let report = entity.validate(options.strict);
        if report.is_ok() {
            Ok(entity)
        } else {
            Err(CocoError::Validation { report })
        }
    }
}

impl<T: Serialize + DeserializeOwned + Validate> CocoJson for T {}

/// Whole-file persistence for the dataset variants.
///
/// Both operations materialize the entire dataset in memory; COCO
/// annotation files are consumed as fully-loaded graphs by every downstream
/// tool, so there is no streaming path.
pub trait CocoDataset: CocoJson {
    /// Saves the dataset to `path`, overwriting any existing file.
    fn save(&self, path: impl AsRef<Path>) -> Result<(), CocoError> {
        self.save_with(path, &JsonOptions::default())
    }

    /// Saves with explicit options.
    fn save_with(&self, path: impl AsRef<Path>, options: &JsonOptions) -> Result<(), CocoError> {
        let json = self.to_json_with(options)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads a dataset from `path`.
    fn load(path: impl AsRef<Path>) -> Result<Self, CocoError> {
        Self::load_with(path, &JsonOptions::default())
    }

    /// Loads with explicit options. Parse failures name both the file and
    /// the offending field.
    fn load_with(path: impl AsRef<Path>, options: &JsonOptions) -> Result<Self, CocoError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_json_with(&text, options).map_err(|err| match err {
            CocoError::Json(source) => CocoError::JsonFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

/// Recursively removes `null` members from JSON objects.
///
/// Only object members are dropped; a `null` inside an array is data, not an
/// absent field, and stays put.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            for member in map.values_mut() {
                strip_nulls(member);
            }
        }
        Value::Array(items) => {
            for item in items {
                strip_nulls(item);
            }
        }
        _ => {}
    }
}
