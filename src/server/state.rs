use tokio::sync::Mutex;

use crate::data::JsonStore;

/// Shared application state handed to every request handler.
///
/// The store sits behind one async mutex so each handler's
/// read-modify-write cycle runs to completion before the next begins.
/// The original flat-file design loses updates when two writers race;
/// serializing here closes that window without pretending to be a
/// transactional store.
pub struct AppState {
    pub store: Mutex<JsonStore>,
}

impl AppState {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}
