//! Decoding seed documents into an initial task collection.
//!
//! A seed document is either a bare list of tasks or an object with a `tasks`
//! list, in JSON or YAML. Order in the document is the initial board order.

use crate::board::BoardStore;
use crate::error::{KanbanError, Result};
use crate::types::Task;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    List(Vec<Task>),
    Board { tasks: Vec<Task> },
}

impl SeedDocument {
    fn into_tasks(self) -> Vec<Task> {
        match self {
            Self::List(tasks) | Self::Board { tasks } => tasks,
        }
    }
}

/// Decode tasks from a JSON seed document
pub fn from_json(content: &str) -> Result<Vec<Task>> {
    let doc: SeedDocument = serde_json::from_str(content)?;
    Ok(doc.into_tasks())
}

/// Decode tasks from a YAML seed document
pub fn from_yaml(content: &str) -> Result<Vec<Task>> {
    let doc: SeedDocument = serde_yaml_ng::from_str(content)?;
    Ok(doc.into_tasks())
}

/// Read a seed file, choosing the decoder from its extension
/// (`.json`, `.yaml`, `.yml`).
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading seed");

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let content = std::fs::read_to_string(path)?;

    let tasks = match extension.as_deref() {
        Some("json") => from_json(&content)?,
        Some("yaml") | Some("yml") => from_yaml(&content)?,
        _ => {
            return Err(KanbanError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    info!(path = %path.display(), tasks = tasks.len(), "seed loaded");
    Ok(tasks)
}

/// Read a seed file and build a validated store from it
pub fn load_board(path: impl AsRef<Path>) -> Result<BoardStore> {
    BoardStore::from_seed(load(path)?)
}
