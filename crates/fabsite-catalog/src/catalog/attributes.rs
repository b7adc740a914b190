//! Markup attribute maps, the input boundary for products and news items.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `data-*` attributes of one card element.
///
/// Accessors never fail: missing or malformed values degrade to an empty
/// string, `false`, or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Trimmed text value, empty when missing.
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(str::trim).unwrap_or_default().to_string()
    }

    /// Trimmed text value, `None` when missing or blank.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Integer value with `parseInt` semantics: leading whitespace and sign,
    /// then the longest run of digits. Anything else is `None`.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(parse_leading_int)
    }

    /// Boolean flag: present and not `"false"` or `"0"`.
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            Some(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0"),
            None => false,
        }
    }

    /// Comma or whitespace separated list, empty items dropped.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|v| {
                v.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_parsing() {
        let attrs = Attributes::new()
            .with("a", "1500")
            .with("b", "  42px")
            .with("c", "-7")
            .with("d", "abc")
            .with("e", "");
        assert_eq!(attrs.int("a"), Some(1500));
        assert_eq!(attrs.int("b"), Some(42));
        assert_eq!(attrs.int("c"), Some(-7));
        assert_eq!(attrs.int("d"), None);
        assert_eq!(attrs.int("e"), None);
        assert_eq!(attrs.int("missing"), None);
    }

    #[test]
    fn test_int_overflow_is_none() {
        let attrs = Attributes::new().with("p", "99999999999999999999999");
        assert_eq!(attrs.int("p"), None);
    }

    #[test]
    fn test_text_and_flag() {
        let attrs = Attributes::new()
            .with("name", "  Etcher ")
            .with("featured", "")
            .with("hidden", "false");
        assert_eq!(attrs.text("name"), "Etcher");
        assert_eq!(attrs.text("missing"), "");
        assert!(attrs.flag("featured"));
        assert!(!attrs.flag("hidden"));
        assert!(!attrs.flag("missing"));
        assert_eq!(attrs.non_empty("featured"), None);
    }

    #[test]
    fn test_list() {
        let attrs = Attributes::new().with("tags", "new, hit  sale,,");
        assert_eq!(attrs.list("tags"), vec!["new", "hit", "sale"]);
        assert!(attrs.list("missing").is_empty());
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"data-id": "p-1", "data-price": "100"}"#).unwrap();
        assert_eq!(attrs.get("data-id"), Some("p-1"));
        assert_eq!(attrs.int("data-price"), Some(100));
    }
}
