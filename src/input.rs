//! Reading caller-supplied records from disk
//!
//! Budgets, loan states, mileage records and expense logs can be handed to the
//! CLI as JSON or YAML documents. The format is picked from the file
//! extension: `.yaml`/`.yml` is YAML, everything else is JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::HomefinError;

/// Supported input document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a document, returning an error if the file doesn't exist
pub fn read_input<T, P>(path: P) -> Result<T, HomefinError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(HomefinError::Input(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| HomefinError::Input(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match InputFormat::from_path(path) {
        InputFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            HomefinError::Input(format!("Failed to parse {}: {}", path.display(), e))
        }),
        InputFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            HomefinError::Input(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Read a document, returning a default value if the file doesn't exist
pub fn read_input_or_default<T, P>(path: P) -> Result<T, HomefinError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    read_input(path)
}
