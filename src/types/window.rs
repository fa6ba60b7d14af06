use std::collections::HashMap;

use super::property::Property;
use super::value::Value;

/// Snapshot of a new window's properties, as handed over by the window manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowProperties {
    values: HashMap<Property, Value>,
}

impl WindowProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value, replacing any earlier one.
    #[must_use]
    pub fn set(mut self, property: Property, value: impl Into<Value>) -> Self {
        self.insert(property, value.into());
        self
    }

    /// Insert a value (mutable reference version).
    pub fn insert(&mut self, property: Property, value: Value) {
        self.values.insert(property, value);
    }

    #[must_use]
    pub fn get(&self, property: Property) -> Option<&Value> {
        self.values.get(&property)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Property, Value)> for WindowProperties {
    fn from_iter<I: IntoIterator<Item = (Property, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let w = WindowProperties::new().set(Property::Class, "URxvt");
        assert_eq!(w.get(Property::Class), Some(&Value::String("URxvt".into())));
    }

    #[test]
    fn missing_is_none() {
        let w = WindowProperties::new().set(Property::Pid, 10_i64);
        assert_eq!(w.get(Property::Title), None);
    }

    #[test]
    fn overwrite_value() {
        let w = WindowProperties::new()
            .set(Property::Title, "a")
            .set(Property::Title, "b");
        assert_eq!(w.get(Property::Title), Some(&Value::from("b")));
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn collect_from_pairs() {
        let w: WindowProperties = [
            (Property::Instance, Value::from("term")),
            (Property::Pid, Value::Int(7)),
        ]
        .into_iter()
        .collect();
        assert_eq!(w.len(), 2);
        assert_eq!(w.get(Property::Pid), Some(&Value::Int(7)));
    }

    #[test]
    fn empty() {
        assert!(WindowProperties::new().is_empty());
    }
}
