//! Newtype IDs for type-safe identifiers.
//!
//! Ids come from `data-id` attributes. Products and news items get their
//! own types so one can't be looked up in the other's list.
//!
//! Stored collections may hold numeric ids (pages fall back to a timestamp
//! when a card has no `data-id`), so ids deserialize from a string or an
//! integer. They always serialize as strings.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(IdVisitor).map(Self)
            }
        }

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Accepts a string or an integer id; integers keep their decimal form.
struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

define_id!(ProductId);
define_id!(NewsId);

/// Generate a fallback ID for markup without a `data-id`.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    // Combine timestamp with atomic counter for uniqueness
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("gen-{:x}-{:x}", timestamp as u64, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("mask-aligner-01");
        assert_eq!(id.as_str(), "mask-aligner-01");
    }

    #[test]
    fn test_id_generation() {
        let id1 = ProductId::generate();
        let id2 = ProductId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("gen-"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = NewsId::new("news-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""news-7""#);
        let back: NewsId = serde_json::from_str(r#""news-7""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_numeric_id_keeps_decimal_form() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"["pvd-200", 1697000000000, -3]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                ProductId::new("pvd-200"),
                ProductId::new("1697000000000"),
                ProductId::new("-3")
            ]
        );
        assert_eq!(serde_json::to_string(&ids[1]).unwrap(), r#""1697000000000""#);
        assert!(serde_json::from_str::<ProductId>("1.5").is_err());
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "etcher-2".into();
        assert_eq!(id.as_str(), "etcher-2");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("cvd-9");
        assert_eq!(format!("{}", id), "cvd-9");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ProductId::new("same");
        let id2 = ProductId::new("same");
        let id3 = ProductId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }
}
