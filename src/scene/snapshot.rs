use std::collections::BTreeMap;

use crate::foundation::core::Rgba8;

/// One computed visual parameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Position, scale, opacity, angle, count, ...
    Scalar(f64),
    /// Straight-alpha color.
    Color(Rgba8),
}

/// Complete visual state of one scene at one frame.
///
/// Keys are dotted names (`logo.scale`, `title.char.03.opacity`); iteration order is the key
/// order, so two equal snapshots always serialize identically.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VisualSnapshot {
    params: BTreeMap<String, ParamValue>,
}

impl VisualSnapshot {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        self.params.insert(key.into(), value);
    }

    /// Set a scalar parameter.
    pub fn set_scalar(&mut self, key: impl Into<String>, v: f64) {
        self.insert(key, ParamValue::Scalar(v));
    }

    /// Booleans are stored as `1.0` / `0.0`.
    pub fn set_flag(&mut self, key: impl Into<String>, on: bool) {
        self.set_scalar(key, if on { 1.0 } else { 0.0 });
    }

    /// Set a color parameter.
    pub fn set_color(&mut self, key: impl Into<String>, c: Rgba8) {
        self.insert(key, ParamValue::Color(c));
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<ParamValue> {
        self.params.get(key).copied()
    }

    /// Scalar value of `key`; `None` if absent or a color.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            ParamValue::Scalar(v) => Some(v),
            ParamValue::Color(_) => None,
        }
    }

    /// Color value of `key`; `None` if absent or a scalar.
    pub fn color(&self, key: &str) -> Option<Rgba8> {
        match self.get(key)? {
            ParamValue::Color(c) => Some(c),
            ParamValue::Scalar(_) => None,
        }
    }

    /// Parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> + '_ {
        self.params.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if no parameter was set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/snapshot.rs"]
mod tests;
