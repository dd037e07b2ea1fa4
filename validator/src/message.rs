//! Message parameters and placeholder interpolation.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Ordered placeholder values for a message, keyed by placeholder name
/// (`field` fills `{{ field }}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a parameter. Replaced parameters keep their position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            out.serialize_entry(k, v)?;
        }
        out.end()
    }
}

/// Turns a message template and its parameters into the final message.
pub trait MessageInterpolator: Send + Sync {
    fn interpolate(&self, template: &str, parameters: &Parameters) -> String;
}

/// Substitutes `{{ name }}` placeholders and nothing else.
///
/// Whitespace inside the braces is optional. Placeholders without a
/// parameter are left as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderInterpolator;

impl MessageInterpolator for PlaceholderInterpolator {
    fn interpolate(&self, template: &str, parameters: &Parameters) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find("}}") else {
                break;
            };
            out.push_str(&rest[..start]);
            let name = after_open[..end].trim();
            match parameters.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
