// ABOUTME: Read-only associative view over an element's attributes.
// ABOUTME: Lookup and iteration only; the interface has no mutating methods.

use scraper::node::Element;

/// Read-only view over one element's attributes.
///
/// Values are trimmed of surrounding whitespace on read. The view has no
/// mutating interface: the backing tree cannot be changed through it.
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a> {
    element: Option<&'a Element>,
}

impl<'a> Attributes<'a> {
    pub(crate) fn of(element: Option<&'a Element>) -> Self {
        Attributes { element }
    }

    /// The trimmed attribute value, or `None` when absent.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.element.and_then(|el| el.attr(name)).map(str::trim)
    }

    /// Whether the named attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.element.map_or(false, |el| el.attr(name).is_some())
    }

    /// Iterates over `(name, value)` pairs, values untrimmed.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.element.into_iter().flat_map(|el| el.attrs())
    }

    pub fn len(&self) -> usize {
        self.element.map_or(0, |el| el.attrs().count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
