//! Ordered request parameters.
//!
//! [`Parameters`] accumulates key/value pairs in insertion order and renders
//! them as an `application/x-www-form-urlencoded` string, usable both as a
//! query string and as a form body.
//!
//! # Example
//!
//! ```
//! use tusk_core::Parameters;
//!
//! let params = Parameters::new()
//!     .append("status", "hello world")
//!     .append("sensitive", false)
//!     .append_all("media_ids", ["1", "2"]);
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "status=hello+world&sensitive=false&media_ids%5B%5D=1&media_ids%5B%5D=2"
//! );
//! ```

/// A value that can be sent as a request parameter.
///
/// Booleans render as `"true"`/`"false"`, numbers in decimal.
pub trait ParameterValue {
    /// Render the value as a parameter string.
    fn to_parameter_value(&self) -> String;
}

impl ParameterValue for str {
    fn to_parameter_value(&self) -> String {
        self.to_string()
    }
}

impl ParameterValue for String {
    fn to_parameter_value(&self) -> String {
        self.clone()
    }
}

impl ParameterValue for bool {
    fn to_parameter_value(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

impl<T: ParameterValue + ?Sized> ParameterValue for &T {
    fn to_parameter_value(&self) -> String {
        (**self).to_parameter_value()
    }
}

macro_rules! display_parameter_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParameterValue for $ty {
                fn to_parameter_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_parameter_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Trait for types that can be converted to request parameters.
///
/// Implemented by pagination bounds ([`crate::Range`]) and by the query
/// structs of the method groups.
pub trait ToParameters {
    /// Convert this value to parameters.
    fn to_parameters(&self) -> Parameters;
}

/// Ordered mapping from key to one-or-many values.
///
/// Appending an existing key adds another entry, it never overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    #[must_use]
    pub fn append(mut self, key: impl Into<String>, value: impl ParameterValue) -> Self {
        self.entries.push((key.into(), value.to_parameter_value()));
        self
    }

    /// Appends one entry when `value` is `Some`.
    #[must_use]
    pub fn append_opt<V: ParameterValue>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.append(key, value),
            None => self,
        }
    }

    /// Appends an array parameter, one `key[]` entry per value.
    #[must_use]
    pub fn append_all<I>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ParameterValue,
    {
        let key = format!("{key}[]");
        self.entries.extend(
            values
                .into_iter()
                .map(|value| (key.clone(), value.to_parameter_value())),
        );
        self
    }

    /// Appends every entry of `other`, keeping its order.
    #[must_use]
    pub fn extend(mut self, other: Parameters) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// All values for `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Renders the entries as a URL-encoded string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: ParameterValue> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (key, value)| params.append(key, value))
    }
}

impl IntoIterator for Parameters {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl ToParameters for Parameters {
    fn to_parameters(&self) -> Parameters {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn append_keeps_insertion_order() {
        let params = Parameters::new()
            .append("b", "2")
            .append("a", "1")
            .append("c", "3");

        check!(params.to_query_string() == "b=2&a=1&c=3");
    }

    #[test]
    fn append_same_key_adds_entries() {
        let params = Parameters::new()
            .append("exclude_types", "follow")
            .append("limit", 20_u32)
            .append("exclude_types", "mention");

        check!(params.len() == 3);
        check!(params.get_all("exclude_types") == vec!["follow", "mention"]);
        check!(
            params.to_query_string() == "exclude_types=follow&limit=20&exclude_types=mention"
        );
    }

    #[test]
    fn scalar_rendering() {
        let params = Parameters::new()
            .append("local", true)
            .append("only_media", false)
            .append("limit", 40_u32)
            .append("offset", -1_i64)
            .append("x", 0.5_f64);

        check!(params.get("local") == Some("true"));
        check!(params.get("only_media") == Some("false"));
        check!(params.get("limit") == Some("40"));
        check!(params.get("offset") == Some("-1"));
        check!(params.get("x") == Some("0.5"));
    }

    #[test]
    fn append_opt_skips_none() {
        let params = Parameters::new()
            .append_opt("max_id", Some("100"))
            .append_opt::<&str>("since_id", None);

        check!(params.to_query_string() == "max_id=100");
    }

    #[test]
    fn append_all_uses_array_keys() {
        let params = Parameters::new().append_all("id", ["1", "2", "3"]);

        check!(params.get_all("id[]") == vec!["1", "2", "3"]);
        check!(params.to_query_string() == "id%5B%5D=1&id%5B%5D=2&id%5B%5D=3");
    }

    #[test]
    fn append_all_empty_adds_nothing() {
        let params = Parameters::new().append_all("id", Vec::<String>::new());
        check!(params.is_empty());
    }

    #[test]
    fn url_encoding() {
        let params = Parameters::new()
            .append("status", "héllo & bye #rust")
            .append("redirect_uri", "urn:ietf:wg:oauth:2.0:oob");

        check!(
            params.to_query_string()
                == "status=h%C3%A9llo+%26+bye+%23rust&redirect_uri=urn%3Aietf%3Awg%3Aoauth%3A2.0%3Aoob"
        );
    }

    #[test]
    fn extend_and_collect() {
        let first = Parameters::new().append("q", "rust");
        let second: Parameters = vec![("limit", 5_u32)].into_iter().collect();

        let params = first.extend(second);
        let entries: Vec<(String, String)> = params.into_iter().collect();

        check!(
            entries
                == vec![
                    ("q".to_string(), "rust".to_string()),
                    ("limit".to_string(), "5".to_string()),
                ]
        );
    }
}
