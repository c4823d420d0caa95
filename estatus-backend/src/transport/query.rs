//! Query-string parameters for page requests.

use std::collections::BTreeMap;

use reqwest::Url;

/// Multi-valued query parameters, encoded in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters already present on `url`.
    pub fn from_url(url: &Url) -> Self {
        let mut query = Self::new();
        for (key, value) in url.query_pairs() {
            query.add(key, value);
        }
        query
    }

    /// Replace every value of `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), vec![value.into()]);
    }

    /// Append a value to `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_default().push(value.into());
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
    }

    /// Replace the query of `url` with these parameters.
    ///
    /// Spaces come out as `%20`, never `+`: some proxies in front of the
    /// backend take `+` literally inside filter expressions. A literal `+`
    /// is already `%2B` by then, so the rewrite cannot touch it.
    pub fn apply_to(&self, url: &mut Url) {
        url.set_query(None);
        if self.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(self.pairs());
        let encoded = url.query().unwrap_or_default().replace('+', "%20");
        url.set_query(Some(&encoded));
    }
}
