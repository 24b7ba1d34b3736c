//! Worker model.

use serde::{Deserialize, Serialize};

/// A worker on the roster, identified by a unique name.
///
/// # Example
///
/// ```
/// use shift_engine::models::Worker;
///
/// let worker = Worker::new("Noa");
/// assert_eq!(worker.name(), "Noa");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Worker {
    name: String,
}

impl Worker {
    /// Creates a worker with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the worker's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_serializes_as_plain_string() {
        let worker = Worker::new("Yael");
        assert_eq!(serde_json::to_string(&worker).unwrap(), r#""Yael""#);
        let back: Worker = serde_json::from_str(r#""Yael""#).unwrap();
        assert_eq!(back, worker);
    }

    #[test]
    fn test_workers_order_by_name() {
        let mut workers = vec![Worker::new("Omer"), Worker::new("Adi")];
        workers.sort();
        assert_eq!(workers[0].name(), "Adi");
    }
}
