//! Schema descriptor discovery and parsing.
//!
//! The descriptor format is owned by an external collaborator; this
//! adapter consumes JSON descriptor files and hands the core an
//! ordered sequence of `(field_name, type_hint)` pairs per descriptor.
//! Malformed descriptors are skipped by the runner, never fatal.

use pii_synth::ValueKind;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub type_hint: Option<ValueKind>,
}

/// One parsed descriptor: an ordered field list for a single payload.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

/// Error type for descriptor parsing.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed descriptor: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("descriptor contains no fields")]
    NoFields,
}

/// Recursively collect descriptor files (`*.json`) under `root`,
/// sorted by path so runs over the same corpus are reproducible.
pub fn find_descriptors(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}

/// Parse one descriptor file.
///
/// Two JSON forms are accepted:
/// - `{"fields": [{"name": "...", "type": "..."}]}` (or a bare array)
/// - `{"field_name": "type", ...}` - a flat name-to-type map
pub fn parse_descriptor(path: &Path) -> Result<Descriptor, DescriptorError> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "descriptor".to_string());

    let fields = match &value {
        Value::Array(entries) => field_entries(entries),
        Value::Object(map) => match map.get("fields") {
            Some(Value::Array(entries)) => field_entries(entries),
            _ => map
                .iter()
                .map(|(field, hint)| FieldSpec {
                    name: field.clone(),
                    type_hint: hint.as_str().and_then(parse_type_hint),
                })
                .collect(),
        },
        _ => Vec::new(),
    };

    if fields.is_empty() {
        return Err(DescriptorError::NoFields);
    }
    Ok(Descriptor { name, fields })
}

fn field_entries(entries: &[Value]) -> Vec<FieldSpec> {
    entries
        .iter()
        .filter_map(|entry| {
            let name = entry.get("name")?.as_str()?.to_string();
            let type_hint = entry
                .get("type")
                .and_then(Value::as_str)
                .and_then(parse_type_hint);
            Some(FieldSpec { name, type_hint })
        })
        .collect()
}

fn parse_type_hint(hint: &str) -> Option<ValueKind> {
    match hint.to_ascii_lowercase().as_str() {
        "string" | "text" => Some(ValueKind::String),
        "int" | "integer" | "number" => Some(ValueKind::Int),
        "bool" | "boolean" => Some(ValueKind::Bool),
        "decimal" | "float" | "double" => Some(ValueKind::Decimal),
        "date" => Some(ValueKind::Date),
        "datetime" | "timestamp" => Some(ValueKind::DateTime),
        _ => None,
    }
}
