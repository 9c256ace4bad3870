use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

use crate::server::data_models::Task;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("task not found")]
    NotFound,

    #[error("task with id={0} already exists")]
    Conflict(String),
}

/// In-memory task collection. All access goes through the mutex, so every
/// operation observes a consistent snapshot. Lifetime is the process lifetime.
pub struct TaskStore {
    tasks: Mutex<HashMap<String, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// The two tasks the server ships with at startup.
    pub fn with_seed_tasks() -> Self {
        let store = Self::new();
        let seed = [
            Task {
                id: "1".to_string(),
                description: "Сделать финальное задание темы REST API".to_string(),
                note: "Если сегодня сделаю, то завтра будет свободный день. Ура!".to_string(),
                applications: vec![
                    "VS Code".to_string(),
                    "Terminal".to_string(),
                    "git".to_string(),
                ],
            },
            Task {
                id: "2".to_string(),
                description: "Протестировать финальное задание с помощью Postmen".to_string(),
                note: "Лучше это делать в процессе разработки, каждый раз, когда запускаешь сервер и проверяешь хендлер".to_string(),
                applications: vec![
                    "VS Code".to_string(),
                    "Terminal".to_string(),
                    "git".to_string(),
                    "Postman".to_string(),
                ],
            },
        ];
        {
            let mut tasks = store.lock();
            for task in seed {
                tasks.insert(task.id.clone(), task);
            }
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Task>> {
        self.tasks.lock().expect("task store lock poisoned")
    }

    /// Snapshot of all current tasks, keyed by id. Order is unspecified.
    pub fn list(&self) -> HashMap<String, Task> {
        self.lock().clone()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.lock().get(id).cloned()
    }

    pub fn insert(&self, task: Task) -> Result<(), StoreError> {
        let mut tasks = self.lock();
        if tasks.contains_key(&task.id) {
            return Err(StoreError::Conflict(task.id));
        }
        tasks.insert(task.id.clone(), task);
        Ok(())
    }

    pub fn remove(&self, id: &str) -> Result<Task, StoreError> {
        self.lock().remove(id).ok_or(StoreError::NotFound)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
