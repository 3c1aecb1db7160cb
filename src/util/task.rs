use std::{collections::HashMap, sync::Mutex};

use tokio::task::JoinHandle;

/// Keyed registry of background tasks. Spawning under an existing key
/// aborts the previous task first.
#[derive(Default)]
pub struct TaskManager {
    tasks: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }

    pub fn spawn(&self, key: &str, task: JoinHandle<()>) {
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(handle) = tasks.insert(key.to_string(), task) {
            handle.abort();
        }
    }

    pub fn abort(&self, key: &str) {
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(handle) = tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&self) {
        let mut tasks = self.tasks.lock().unwrap();
        for handle in tasks.values() {
            handle.abort();
        }
        tasks.clear();
    }

    pub fn is_running(&self, key: &str) -> bool {
        let tasks = self.tasks.lock().unwrap();
        tasks.get(key).is_some_and(|handle| !handle.is_finished())
    }
}
