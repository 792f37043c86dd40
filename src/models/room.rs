//! Room model.

use serde::{Deserialize, Serialize};

/// A teaching room.
///
/// The category tag drives module compatibility filtering. Capacity is
/// carried as inventory data; room selection itself is first-match in
/// input order, with no capacity or locality optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Category tag (e.g. "classroom", "lab", "workshop").
    pub category: String,
}

impl Room {
    /// Creates a new room of the given category.
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            category: category.into(),
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }
}
