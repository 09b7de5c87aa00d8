use crate::value::Value;

///
/// Item
///
/// The mapping from attribute key to attribute value representing one
/// record. Keys are unique; insertion order carries no semantic weight but
/// is preserved so that generated code's "emit in declaration order"
/// guarantee (§9) is directly observable on the resulting `Item`.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    entries: Vec<(String, Value)>,
}

impl Item {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value for `key`, overwriting any prior value at that key
    /// without disturbing the position of the existing entry.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// `try_get` as named in the spec's renderer contract (§4.8); an alias
    /// of `get` kept because generated code calls it by that name.
    #[must_use]
    pub fn try_get(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Value)> for Item {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut item = Self::new();
        for (key, value) in iter {
            item.insert(key, value);
        }
        item
    }
}

impl IntoIterator for Item {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Item {
    type Item = (&'a str, &'a Value);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

impl From<Item> for Value {
    /// Embed a nested `Item` as a `M` attribute value, for a mapper member
    /// whose leaf type delegates to another `#[derive(Mapper)]` type
    /// (spec §4.5).
    fn from(item: Item) -> Self {
        Self::M(item.entries.into_iter().collect())
    }
}

impl From<&std::collections::BTreeMap<String, Value>> for Item {
    /// The inverse of `From<Item> for Value`: rebuild an `Item` from a
    /// decoded `M` variant's map before handing it to a nested type's
    /// `from_item`.
    fn from(map: &std::collections::BTreeMap<String, Value>) -> Self {
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
