//! Board Models
//!
//! Containers and the item ids they hold.

use serde::{Deserialize, Serialize};

/// Implicit container every board starts with
pub const ROOT_CONTAINER: &str = "root";

/// A named, ordered drop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub items: Vec<String>,
}

impl Container {
    pub fn new(id: &str, items: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i == item_id)
    }
}

/// Container id -> ordered item ids
///
/// Containers keep their declaration order; lookups search them in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub containers: Vec<Container>,
}

impl Board {
    /// Startup assignment: three items in each of the first three containers
    pub fn seed() -> Self {
        Self {
            containers: vec![
                Container::new(ROOT_CONTAINER, &["1", "2", "3"]),
                Container::new("container1", &["4", "5", "6"]),
                Container::new("container2", &["7", "8", "9"]),
                Container::new("container3", &[]),
            ],
        }
    }

    pub fn is_container(&self, id: &str) -> bool {
        self.containers.iter().any(|c| c.id == id)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub(crate) fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    pub fn items(&self, container_id: &str) -> Option<&[String]> {
        self.container(container_id).map(|c| c.items.as_slice())
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.containers.iter().any(|c| c.position(item_id).is_some())
    }

    pub fn item_count(&self) -> usize {
        self.containers.iter().map(|c| c.items.len()).sum()
    }

    /// Container that owns `id`
    ///
    /// A container id resolves to itself (pointer over an empty drop area);
    /// an item id resolves to the container holding it.
    pub fn find_container(&self, id: &str) -> Option<&str> {
        if let Some(c) = self.container(id) {
            return Some(c.id.as_str());
        }
        self.containers
            .iter()
            .find(|c| c.position(id).is_some())
            .map(|c| c.id.as_str())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_layout() {
        let board = Board::seed();
        let ids: Vec<_> = board.containers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "container1", "container2", "container3"]);
        assert_eq!(board.item_count(), 9);
        assert_eq!(board.items("container3"), Some(&[][..]));
    }

    #[test]
    fn test_find_container() {
        let board = Board::seed();
        assert_eq!(board.find_container("container3"), Some("container3"));
        assert_eq!(board.find_container("2"), Some("root"));
        assert_eq!(board.find_container("9"), Some("container2"));
        assert_eq!(board.find_container("42"), None);
    }
}
