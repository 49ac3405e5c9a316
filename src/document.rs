use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_yaml::Value;
use tracing::debug;

pub const OUTPUT_SUFFIX: &str = "-fix-sortvals";

/// Serialization used for both reading and writing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON, everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

pub fn parse(s: &str, format: Format) -> Result<Value> {
    let value = match format {
        // An empty YAML stream is an empty document.
        Format::Yaml if s.trim().is_empty() => Value::Null,
        Format::Yaml => {
            let mut value: Value = serde_yaml::from_str(s)?;
            // `<<: *anchor` merge keys are folded into their mapping.
            value.apply_merge()?;
            value
        }
        Format::Json => serde_json::from_str(s)?,
    };
    Ok(value)
}

pub fn to_string<T: Serialize>(value: &T, format: Format) -> Result<String> {
    let s = match format {
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Json => {
            let mut s = serde_json::to_string_pretty(value)?;
            s.push('\n');
            s
        }
    };
    Ok(s)
}

pub fn load(path: &Path) -> Result<(Value, Format)> {
    let format = Format::from_path(path);
    let s = fs::read_to_string(path)
        .with_context(|| format!("{}: Failed to read file", path.display()))?;
    let value = parse(&s, format)
        .with_context(|| format!("{}: Failed to parse {:?} document", path.display(), format))?;
    debug!(path = %path.display(), ?format, "Read document");
    Ok((value, format))
}

pub fn write<T: Serialize>(path: &Path, value: &T, format: Format) -> Result<()> {
    let s = to_string(value, format)?;
    fs::write(path, s).with_context(|| format!("{}: Failed to write file", path.display()))?;
    Ok(())
}

/// `dir/openapi.yaml` -> `dir/openapi-fix-sortvals.yaml`.
/// The extension is whatever follows the last `.` of the file name, so
/// `a.b.yml` keeps `.yml` and dotfiles like `.spec` have none.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
