//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type used to name diagram nodes and clusters.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning.
///
/// Two identifiers created from the same string compare equal and share one
/// interned copy of that string.
///
/// # Examples
///
/// ```
/// use gantry_core::identifier::Id;
///
/// let frontend = Id::new("frontend");
/// let same = Id::new("frontend");
/// assert_eq!(frontend, same);
/// assert_eq!(frontend, "frontend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use gantry_core::identifier::Id;
    ///
    /// let node_id = Id::new("session_db");
    /// let cluster_id = Id::new("data_layer");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice.
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("frontend");
        let id2 = Id::new("frontend");
        let id3 = Id::new("catalogue");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "frontend");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("queue_master");
        assert_eq!(format!("{}", id), "queue_master");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "orders_db".into();
        let id2 = Id::new("orders_db");

        assert_eq!(id1, id2);
        assert_eq!(id1, "orders_db");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("alb");
        let id2 = Id::new("alb");
        let id3 = Id::new("route53");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_copy_trait() {
        let id1 = Id::new("ingress");
        let id2 = id1;
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1, "ingress");
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("prometheus");

        assert!(id == "prometheus");
        assert!(id != "grafana");

        let empty = Id::new("");
        assert!(empty == "");
        assert!(empty != "non-empty");
    }
}
