//! Submitted form data.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::value::scalar_to_string;

/// Multi-valued form data, as submitted by a browser.
///
/// Every key maps to the list of values sent under it, in submission
/// order. A key that was never sent is distinct from a key sent with an
/// empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Creates empty form data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all values under `key` with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Appends a value under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Builder method to append a value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// Returns the first value under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value under `key`, or `None` if the key was not sent.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    /// Returns whether `key` was sent.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no key was sent.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over keys and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Parses an `application/x-www-form-urlencoded` body or query string.
    pub fn parse_urlencoded(input: &str) -> Self {
        input
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("");
                (urlencoding_decode(key), urlencoding_decode(value))
            })
            .collect()
    }

    /// Builds form data from a JSON-style map.
    ///
    /// Scalars become a single value and arrays are expanded element by
    /// element. `null` and objects have no form representation and are
    /// skipped.
    pub fn from_json_map(map: &HashMap<String, Value>) -> Self {
        let mut data = Self::new();
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    let values = data.values.entry(key.clone()).or_default();
                    for item in items {
                        match scalar_to_string(item) {
                            Some(s) => values.push(s),
                            None => warn!(field = %key, value = %item, "Skipping unsupported value"),
                        }
                    }
                }
                other => match scalar_to_string(other) {
                    Some(s) => data.set(key.clone(), s),
                    None => warn!(field = %key, value = %other, "Skipping unsupported value"),
                },
            }
        }
        data
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.add(key, value);
        }
        data
    }
}

/// Percent-decoding with `+` as space. Malformed escapes are kept as-is.
fn urlencoding_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let decoded = bytes
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match decoded {
                    Some(byte) => result.push(byte),
                    // keep the malformed escape, `+` included, untouched
                    None => {
                        let end = (i + 3).min(bytes.len());
                        result.extend_from_slice(&bytes[i..end]);
                    }
                }
                i += 3;
                continue;
            }
            b'+' => result.push(b' '),
            other => result.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&result).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_replaces_add_appends() {
        let mut data = FormData::new();
        data.add("tags", "a");
        data.add("tags", "b");
        assert_eq!(data.get_list("tags").map(<[String]>::len), Some(2));

        data.set("tags", "c");
        assert_eq!(data.get_list("tags"), Some(&["c".to_string()][..]));
        assert_eq!(data.get("tags"), Some("c"));
    }

    #[test]
    fn test_missing_key() {
        let data = FormData::new().with("a", "");
        assert!(data.contains_key("a"));
        assert_eq!(data.get("a"), Some(""));
        assert!(data.get_list("b").is_none());
    }

    #[test]
    fn test_parse_urlencoded() {
        let data = FormData::parse_urlencoded("name=John+Doe&city=New%20York&tag=a&tag=b&flag");
        assert_eq!(data.get("name"), Some("John Doe"));
        assert_eq!(data.get("city"), Some("New York"));
        assert_eq!(
            data.get_list("tag"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(data.get("flag"), Some(""));
    }

    #[test]
    fn test_parse_urlencoded_utf8_and_bad_escapes() {
        let data = FormData::parse_urlencoded(
            "city=Krak%C3%B3w&pct=100%&odd=%zz&sign=%+5x&short=%4",
        );
        assert_eq!(data.get("city"), Some("Kraków"));
        assert_eq!(data.get("pct"), Some("100%"));
        assert_eq!(data.get("odd"), Some("%zz"));
        assert_eq!(data.get("sign"), Some("%+5x"));
        assert_eq!(data.get("short"), Some("%4"));
    }

    #[test]
    fn test_from_json_map() {
        let map: HashMap<String, Value> = [
            ("single".to_string(), json!("Spam")),
            ("list".to_string(), json!(["Ham", 2])),
            ("number".to_string(), json!(3)),
            ("nothing".to_string(), json!(null)),
        ]
        .into_iter()
        .collect();

        let data = FormData::from_json_map(&map);
        assert_eq!(data.get("single"), Some("Spam"));
        assert_eq!(
            data.get_list("list"),
            Some(&["Ham".to_string(), "2".to_string()][..])
        );
        assert_eq!(data.get("number"), Some("3"));
        assert!(!data.contains_key("nothing"));
    }

    #[test]
    fn test_from_iterator() {
        let data: FormData = [("a", "1"), ("a", "2"), ("b", "3")].into_iter().collect();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("a"), Some("1"));
    }
}
