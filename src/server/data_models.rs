use serde::{Deserialize, Serialize};

/// A single task record. The id is client-supplied and unique within the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub note: String,
    pub applications: Vec<String>,
}
