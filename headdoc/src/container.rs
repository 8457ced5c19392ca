//! Ordered container of items with append/prepend semantics

use crate::value::Value;

/// Insertion-ordered sequence of items
///
/// Insertion order is render order. Items only enter or leave through
/// [`append`](Self::append), [`prepend`](Self::prepend) and
/// [`replace_all`](Self::replace_all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedContainer {
    items: Vec<Value>,
}

impl NamedContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item after the last element
    pub fn append(&mut self, item: impl Into<Value>) {
        self.items.push(item.into());
    }

    /// Add an item before the first element
    pub fn prepend(&mut self, item: impl Into<Value>) {
        self.items.insert(0, item.into());
    }

    /// Replace every element with `item`
    ///
    /// An empty item leaves the container untouched.
    pub fn replace_all(&mut self, item: impl Into<Value>) {
        let item = item.into();
        if item.is_empty() {
            return;
        }
        self.items.clear();
        self.items.push(item);
    }

    /// Snapshot of the current contents
    pub fn to_sequence(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Iterate over the items in render order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the container holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a NamedContainer {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(container: &NamedContainer) -> Vec<String> {
        container.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_append_prepend_interleaving() {
        let mut container = NamedContainer::new();
        container.append("b");
        container.prepend("a");
        container.append("c");
        container.prepend("z");
        assert_eq!(texts(&container), vec!["z", "a", "b", "c"]);
    }

    #[test]
    fn test_replace_all() {
        let mut container = NamedContainer::new();
        container.append("one");
        container.append("two");
        container.replace_all("only");
        assert_eq!(texts(&container), vec!["only"]);
    }

    #[test]
    fn test_replace_all_with_empty_is_noop() {
        let mut container = NamedContainer::new();
        container.append("keep");
        container.replace_all("");
        container.replace_all(false);
        assert_eq!(texts(&container), vec!["keep"]);
    }

    #[test]
    fn test_to_sequence_is_a_snapshot() {
        let mut container = NamedContainer::new();
        container.append("first");
        let mut snapshot = container.to_sequence();
        snapshot.push(Value::from("second"));
        assert_eq!(container.len(), 1);
        assert_eq!(snapshot.len(), 2);
    }
}
