use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A named counter.
///
/// This is also the on-disk shape: a collection is persisted as a JSON array
/// of `{ "name": ..., "count": ... }` objects in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countable {
    pub name: String,
    #[serde(deserialize_with = "count_floor_zero")]
    pub count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCount {
    Unsigned(u64),
    Signed(i64),
}

/// Stored negative counts read as zero, so one bad entry does not cost the
/// rest of the snapshot.
fn count_floor_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match StoredCount::deserialize(deserializer)? {
        StoredCount::Unsigned(count) => Ok(count),
        StoredCount::Signed(count) => {
            warn!(count, "negative stored count, reading as 0");
            Ok(0)
        }
    }
}

impl Countable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
        }
    }

    pub fn with_count(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Case-insensitive identity used for uniqueness checks.
    pub fn same_name_as(&self, other: &str) -> bool {
        names_collide(&self.name, other)
    }
}

/// Two names collide when they are equal after trimming and lowercasing.
pub fn names_collide(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_countable_starts_at_zero() {
        let c = Countable::new("Crow");
        assert_eq!(c.count, 0);
        assert_eq!(c.name, "Crow");
    }

    #[test]
    fn names_collide_ignores_case() {
        assert!(names_collide("Crow", "cROW"));
        assert!(names_collide("Crow", " crow "));
        assert!(!names_collide("Crow", "Raven"));
    }

    #[test]
    fn negative_stored_count_reads_as_zero() {
        let c: Countable = serde_json::from_str(r#"{"name":"Crow","count":-3}"#).unwrap();
        assert_eq!(c, Countable::new("Crow"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let c = Countable::with_count("Crow", 3);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"name":"Crow","count":3}"#);
    }
}
