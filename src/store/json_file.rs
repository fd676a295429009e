//! JSON-file document store
//!
//! Persists documents as one JSON object on disk: each
//! [`DocumentStore`] key is a field of the object, each value a JSON
//! string. This is the on-disk stand-in for the original design's
//! browser local storage.
//!
//! Every operation re-reads the file and every mutation rewrites it
//! whole; with a single logical actor that is all the atomicity the
//! design asks for. Failures are logged here and surfaced as
//! [`LedgerError::StorageUnavailable`].

use crate::core::traits::DocumentStore;
use crate::types::LedgerError;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Document store backed by a JSON object file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path
    ///
    /// The file does not need to exist yet; it is created on the first
    /// write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Read the whole document object from disk
    ///
    /// A missing file reads as an empty object.
    fn load(&self) -> Result<Map<String, Value>, LedgerError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(error) => {
                log::error!("failed to read store file {}: {error}", self.path.display());
                return Err(LedgerError::storage_unavailable(format!(
                    "cannot read store file: {error}"
                )));
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                log::error!("store file {} is not a JSON object", self.path.display());
                Err(LedgerError::storage_unavailable(
                    "store file is not a JSON object",
                ))
            }
            Err(error) => {
                log::error!("store file {} is corrupted: {error}", self.path.display());
                Err(LedgerError::storage_unavailable(format!(
                    "store file is corrupted: {error}"
                )))
            }
        }
    }

    /// Rewrite the whole document object to disk
    fn save(&self, documents: &Map<String, Value>) -> Result<(), LedgerError> {
        let text = serde_json::to_string_pretty(&Value::Object(documents.clone()))
            .map_err(|error| {
                log::error!("failed to serialize store: {error}");
                LedgerError::storage_unavailable(format!("cannot serialize store: {error}"))
            })?;

        std::fs::write(&self.path, text).map_err(|error| {
            log::error!("failed to write store file {}: {error}", self.path.display());
            LedgerError::storage_unavailable(format!("cannot write store file: {error}"))
        })
    }
}

impl DocumentStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        let documents = self.load()?;
        match documents.get(key) {
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Ok(Some(other.to_string())),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        let mut documents = self.load()?;
        documents.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&documents)
    }

    fn remove(&mut self, key: &str) -> Result<(), LedgerError> {
        let mut documents = self.load()?;
        if documents.remove(key).is_some() {
            self.save(&documents)?;
        }
        Ok(())
    }
}
