use std::borrow::Cow;
use std::collections::{
    BTreeMap,
    HashMap,
};
use std::hash::BuildHasher;

use serde_json::Value;

/// A record whose fields can be read by name.
///
/// Filtering and aggregation only ever see field values as text.
pub trait Record {
    /// The named field rendered as text, `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Every value of the named field. List-valued fields yield one entry per
    /// element; scalar fields yield at most one.
    fn field_values(&self, name: &str) -> Vec<Cow<'_, str>> {
        self.field(name).into_iter().collect()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }

    fn field_values(&self, name: &str) -> Vec<Cow<'_, str>> {
        (**self).field_values(name)
    }
}

impl<S: BuildHasher> Record for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// A JSON scalar as text: strings as-is, numbers and booleans rendered.
fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(value) => Some(Cow::Borrowed(value)),
        Value::Number(value) => Some(Cow::Owned(value.to_string())),
        Value::Bool(value) => Some(Cow::Owned(value.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON objects: scalars are fields, arrays of scalars are multi-valued fields.
impl Record for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        scalar_text(self.get(name)?)
    }

    fn field_values(&self, name: &str) -> Vec<Cow<'_, str>> {
        match self.get(name) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(value) => scalar_text(value).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_object()?.field(name)
    }

    fn field_values(&self, name: &str) -> Vec<Cow<'_, str>> {
        self.as_object().map_or_else(Vec::new, |object| object.field_values(name))
    }
}
