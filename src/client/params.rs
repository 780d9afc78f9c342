//! Request parameters for API calls.
//!
//! A [`Params`] holds the key/value pairs for one request. The same set is
//! used for route-template substitution (keys consumed by the template are
//! removed) and then serialized as query parameters (GET/DELETE) or as an
//! urlencoded form body (POST/PUT). List values serialize as repeated keys,
//! one pair per value, which is how the upstream API expects multi-instrument
//! queries.

/// A single parameter value: scalar or list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A single value
    Single(String),
    /// A list value, serialized as one query pair per element
    List(Vec<String>),
}

/// Ordered key/value parameters for one API request.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar parameter.
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs
            .push((key.to_string(), ParamValue::Single(value.to_string())));
        self
    }

    /// Add a scalar parameter only when the value is present.
    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Add a list parameter, serialized as repeated keys.
    pub fn push_list<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values = values.into_iter().map(|v| v.to_string()).collect();
        self.pairs.push((key.to_string(), ParamValue::List(values)));
        self
    }

    /// Remove and return a scalar value by key.
    ///
    /// Used by route resolution so that keys substituted into the URL path
    /// are not also sent as query/body parameters.
    pub(crate) fn take(&mut self, key: &str) -> Option<String> {
        let idx = self
            .pairs
            .iter()
            .position(|(k, v)| k == key && matches!(v, ParamValue::Single(_)))?;
        match self.pairs.remove(idx).1 {
            ParamValue::Single(v) => Some(v),
            ParamValue::List(_) => None,
        }
    }

    /// Flatten into wire pairs, expanding lists into repeated keys.
    pub(crate) fn to_pairs(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::with_capacity(self.pairs.len());
        for (key, value) in &self.pairs {
            match value {
                ParamValue::Single(v) => out.push((key.as_str(), v.as_str())),
                ParamValue::List(vs) => {
                    for v in vs {
                        out.push((key.as_str(), v.as_str()));
                    }
                }
            }
        }
        out
    }

    /// Returns `true` if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
