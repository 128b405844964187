use crate::models::Store;
use crate::undo::UndoStack;
use std::{collections::BTreeMap, path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared application state: the persisted store plus the per-user undo
/// stacks. Undo stacks live only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<Store>>,
    pub undo: Arc<Mutex<BTreeMap<String, UndoStack>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: Store) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            undo: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}
