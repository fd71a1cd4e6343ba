//! Route value storage with case-insensitive lookup.

/// Compare two route-value keys case-insensitively.
///
/// Folds both sides through the Unicode lowercase mapping, which does not
/// depend on the host locale.
pub fn keys_match(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Look up `key` in `values`, ignoring case.
///
/// Returns `None` both when no key matches and when the stored value is null.
pub fn get_value<'a>(values: &'a RouteValues, key: &str) -> Option<&'a str> {
    values.get(key)
}

/// The route values produced by a routing engine.
///
/// Keys are stored exactly as the engine reported them. Lookups through
/// [`get`](Self::get) scan linearly and compare case-insensitively; the first
/// matching key wins. Engines are expected not to report two keys that only
/// differ by case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteValues {
    entries: Vec<(String, Option<String>)>,
}

impl RouteValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value, replacing any entry with the exact same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert_optional(key, Some(value.into()));
    }

    /// Insert an explicitly null value.
    pub fn insert_null(&mut self, key: impl Into<String>) {
        self.insert_optional(key, None);
    }

    /// Insert a value that may be null.
    pub fn insert_optional(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style [`insert_null`](Self::insert_null).
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.insert_null(key);
        self
    }

    /// Case-insensitive lookup of a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).and_then(|(_, v)| v)
    }

    /// Case-insensitive lookup of the whole entry, including the stored key.
    ///
    /// Distinguishes "key present with a null value" from "key absent".
    pub fn entry(&self, key: &str) -> Option<(&str, Option<&str>)> {
        self.entries
            .iter()
            .find(|(k, _)| keys_match(k, key))
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Whether any key matches `key`, ignoring case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = RouteValues::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

impl<K, V> Extend<(K, V)> for RouteValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteValues, get_value, keys_match};

    #[test]
    fn test_lookup_ignores_case() {
        let values = RouteValues::new().with("Controller", "Products");

        assert_eq!(get_value(&values, "controller"), Some("Products"));
        assert_eq!(get_value(&values, "CONTROLLER"), Some("Products"));
        assert_eq!(get_value(&values, "action"), None);
    }

    #[test]
    fn test_null_value_and_missing_key_both_yield_none() {
        let values = RouteValues::new().with_null("id");

        assert_eq!(values.get("id"), None);
        assert_eq!(values.entry("ID"), Some(("id", None)));
        assert_eq!(values.entry("missing"), None);
    }

    #[test]
    fn test_insert_replaces_exact_key_only() {
        let mut values = RouteValues::new();
        values.insert("id", "1");
        values.insert("id", "2");

        assert_eq!(values.len(), 1);
        assert_eq!(values.get("id"), Some("2"));
    }

    #[test]
    fn test_first_match_wins() {
        let values: RouteValues = [("Id", "first"), ("id", "second")].into_iter().collect();

        assert_eq!(values.get("ID"), Some("first"));
    }

    #[test]
    fn test_keys_match_unicode() {
        assert!(keys_match("ÄRGER", "ärger"));
        assert!(!keys_match("id", "ids"));
    }
}
