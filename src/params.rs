use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered mapping of string parameters.
///
/// Keys are unique and iteration follows insertion order, so encoded output
/// is deterministic. Inserting an existing key replaces its value in place
/// without moving the key, which keeps encoded query strings stable when a
/// caller updates a parameter.
///
/// ```rust
/// use http_params::Params;
///
/// let mut params = Params::new();
/// params.insert("artist", "The Beatles");
/// params.insert("track", "Come Together");
/// assert_eq!(params.get("track"), Some("Come Together"));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Insert a key-value pair.
    ///
    /// If the key is already present its value is replaced and the key keeps
    /// its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    /// Number of pairs in the mapping.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

// Serialized as a flat JSON object, preserving insertion order.
impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut params = Params::new();
        params.insert("a", "1");
        params.insert("b", "2");

        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("2"));
        assert_eq!(params.get("c"), None);
        assert!(params.contains_key("a"));
        assert!(!params.contains_key("c"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::from([("a", "1"), ("b", "2")]);
        params.insert("a", "3");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_iteration_order() {
        let params = Params::from([("z", "last"), ("a", "first"), ("m", "middle")]);

        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_remove() {
        let mut params = Params::from([("a", "1"), ("b", "2")]);

        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let params = Params::from([("b", "2"), ("a", "1")]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
