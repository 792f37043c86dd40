//! Curriculum module model.
//!
//! A curriculum module is one teaching module assigned to a class, with a
//! priority rank and a required hour total. Room compatibility is carried
//! as a flat list of room categories resolved by the caller; the
//! generator never follows entity references at scheduling time.

use serde::{Deserialize, Serialize};

/// A teaching module within a class curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumModule {
    /// Unique module identifier.
    pub module_id: String,
    /// Human-readable name.
    pub name: String,
    /// Priority rank. Lower = scheduled first.
    pub priority: i32,
    /// Total teaching hours this module requires. Must be positive.
    pub required_hours: i64,
    /// Room categories this module may be taught in.
    /// Empty = any room is eligible.
    pub compatible_room_categories: Vec<String>,
}

impl CurriculumModule {
    /// Creates a new curriculum module.
    pub fn new(module_id: impl Into<String>, priority: i32, required_hours: i64) -> Self {
        Self {
            module_id: module_id.into(),
            name: String::new(),
            priority,
            required_hours,
            compatible_room_categories: Vec::new(),
        }
    }

    /// Sets the module name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restricts the module to the given room categories.
    pub fn with_room_categories(mut self, categories: Vec<String>) -> Self {
        self.compatible_room_categories = categories;
        self
    }

    /// Whether a room of the given category may host this module.
    pub fn allows_room_category(&self, category: &str) -> bool {
        self.compatible_room_categories.is_empty()
            || self.compatible_room_categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_builder() {
        let module = CurriculumModule::new("M1", 1, 40)
            .with_name("Rust Fundamentals")
            .with_room_categories(vec!["lab".into(), "classroom".into()]);

        assert_eq!(module.module_id, "M1");
        assert_eq!(module.name, "Rust Fundamentals");
        assert_eq!(module.priority, 1);
        assert_eq!(module.required_hours, 40);
        assert_eq!(module.compatible_room_categories.len(), 2);
    }

    #[test]
    fn test_room_category_filter() {
        let module = CurriculumModule::new("M1", 1, 40)
            .with_room_categories(vec!["lab".into()]);

        assert!(module.allows_room_category("lab"));
        assert!(!module.allows_room_category("auditorium"));
    }

    #[test]
    fn test_no_categories_allows_any_room() {
        let module = CurriculumModule::new("M1", 1, 40);
        assert!(module.allows_room_category("lab"));
        assert!(module.allows_room_category("auditorium"));
    }
}
