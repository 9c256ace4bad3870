use crate::server::store::TaskStore;

/// Represents the state of the server.
pub struct ServerState {
    pub store: TaskStore,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            store: TaskStore::with_seed_tasks(),
        }
    }
}
