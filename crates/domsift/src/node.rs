// ABOUTME: The Queryable Node wrapper over one parsed DOM node.
// ABOUTME: CSS querying, attribute reads, text extraction, and child/sibling navigation.

//! The [`Node`] wrapper.
//!
//! A `Node` is a cheap, copyable view of one node in a parsed
//! [`Document`](crate::Document): the document root, an element, a text
//! node, or a comment. It never owns or mutates the tree; the borrow of the
//! backing document is what keeps it valid.
//!
//! Selector-based operations compile their CSS through a process-wide cache
//! and propagate [`QueryError::Selector`] for selectors that do not compile.
//! "Nothing matched" is never an error.

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Selector};

use crate::attrs::Attributes;
use crate::error::QueryError;
use crate::selectors;
use crate::text;

/// A read-only view of one DOM node, with CSS-based querying and navigation.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    node: NodeRef<'a, scraper::Node>,
}

fn compile(css: &str) -> Result<Selector, QueryError> {
    selectors::get_or_compile(css).ok_or_else(|| QueryError::selector(css))
}

impl<'a> Node<'a> {
    pub(crate) fn from_ref(node: NodeRef<'a, scraper::Node>) -> Self {
        Node { node }
    }

    /// Wraps an element obtained from the underlying library.
    pub fn from_element(element: ElementRef<'a>) -> Self {
        Node { node: *element }
    }

    /// The underlying element, if this node is one.
    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        ElementRef::wrap(self.node)
    }

    /// Stable identity of the underlying node within its document.
    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    fn first_descendant_match(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.node
            .descendants()
            .skip(1) // descendants of the current node, not self
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el))
    }

    fn all_descendant_matches(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.node
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| selector.matches(el))
            .collect()
    }

    /// Returns the first element among this node's descendants matching the
    /// CSS selector, in document order. The node itself is never a candidate.
    pub fn query(&self, selector: &str) -> Result<Option<Node<'a>>, QueryError> {
        let compiled = compile(selector)?;
        Ok(self.first_descendant_match(&compiled).map(Node::from_element))
    }

    /// Returns every descendant element matching the CSS selector, in
    /// document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Node<'a>>, QueryError> {
        let compiled = compile(selector)?;
        Ok(self
            .all_descendant_matches(&compiled)
            .into_iter()
            .map(Node::from_element)
            .collect())
    }

    /// Like [`query`](Self::query), converting the result into a caller
    /// supplied wrapper type.
    pub fn query_as<T>(&self, selector: &str) -> Result<Option<T>, QueryError>
    where
        T: From<Node<'a>>,
    {
        Ok(self.query(selector)?.map(T::from))
    }

    /// Like [`query_all`](Self::query_all), converting each result into a
    /// caller supplied wrapper type.
    pub fn query_all_as<T>(&self, selector: &str) -> Result<Vec<T>, QueryError>
    where
        T: From<Node<'a>>,
    {
        Ok(self.query_all(selector)?.into_iter().map(T::from).collect())
    }

    /// Walks the ancestor-or-self chain and returns the nearest element
    /// matching the CSS selector.
    pub fn closest(&self, selector: &str) -> Result<Option<Node<'a>>, QueryError> {
        let compiled = compile(selector)?;
        let mut current = Some(self.node);
        while let Some(node) = current {
            if let Some(el) = ElementRef::wrap(node) {
                if compiled.matches(&el) {
                    return Ok(Some(Node::from_element(el)));
                }
            }
            current = node.parent();
        }
        Ok(None)
    }

    /// Like [`closest`](Self::closest), converting the result into a caller
    /// supplied wrapper type.
    pub fn closest_as<T>(&self, selector: &str) -> Result<Option<T>, QueryError>
    where
        T: From<Node<'a>>,
    {
        Ok(self.closest(selector)?.map(T::from))
    }

    /// Direct element children; text and comment children are skipped.
    pub fn children(&self) -> Vec<Node<'a>> {
        self.node
            .children()
            .filter_map(ElementRef::wrap)
            .map(Node::from_element)
            .collect()
    }

    /// Direct element children matching the CSS selector.
    ///
    /// The selector is evaluated in full tree context; only matches that are
    /// direct children of this node are kept.
    pub fn children_matching(&self, selector: &str) -> Result<Vec<Node<'a>>, QueryError> {
        let compiled = compile(selector)?;
        Ok(self
            .node
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| compiled.matches(el))
            .map(Node::from_element)
            .collect())
    }

    /// First direct element child, or `None`.
    pub fn child(&self) -> Option<Node<'a>> {
        self.children().into_iter().next()
    }

    /// First direct element child matching the CSS selector, or `None`.
    pub fn child_matching(&self, selector: &str) -> Result<Option<Node<'a>>, QueryError> {
        Ok(self.children_matching(selector)?.into_iter().next())
    }

    /// The immediate parent node, or `None` at the tree root.
    pub fn parent(&self) -> Option<Node<'a>> {
        self.node.parent().map(Node::from_ref)
    }

    /// Escape hatch: evaluates a pre-compiled selector against the
    /// descendant-or-self axis and returns the raw, unwrapped match list.
    pub fn select_raw(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.node
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| selector.matches(el))
            .collect()
    }

    fn walk_siblings(
        &self,
        step: fn(&NodeRef<'a, scraper::Node>) -> Option<NodeRef<'a, scraper::Node>>,
    ) -> Option<Node<'a>> {
        let mut current = step(&self.node);
        while let Some(node) = current {
            if node.value().is_element() {
                return Some(Node::from_ref(node));
            }
            current = step(&node);
        }
        None
    }

    /// Next sibling element, skipping text and comment nodes.
    pub fn next_element_sibling(&self) -> Option<Node<'a>> {
        self.walk_siblings(NodeRef::next_sibling)
    }

    /// Previous sibling element, skipping text and comment nodes.
    pub fn prev_element_sibling(&self) -> Option<Node<'a>> {
        self.walk_siblings(NodeRef::prev_sibling)
    }

    /// Raw next sibling link, any node type.
    pub fn next_sibling(&self) -> Option<Node<'a>> {
        self.node.next_sibling().map(Node::from_ref)
    }

    /// Raw previous sibling link, any node type.
    pub fn prev_sibling(&self) -> Option<Node<'a>> {
        self.node.prev_sibling().map(Node::from_ref)
    }

    /// Raw first child link, any node type.
    pub fn first_child(&self) -> Option<Node<'a>> {
        self.node.first_child().map(Node::from_ref)
    }

    /// Element tag name (lowercased by the parser), `None` for non-elements.
    pub fn node_name(&self) -> Option<&'a str> {
        match self.node.value() {
            scraper::Node::Element(el) => Some(el.name()),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        self.node.value().is_element()
    }

    pub fn is_text(&self) -> bool {
        self.node.value().is_text()
    }

    pub fn is_comment(&self) -> bool {
        self.node.value().is_comment()
    }

    pub fn is_document(&self) -> bool {
        self.node.value().is_document()
    }

    /// Un-normalized text content: the concatenation of every descendant
    /// text node (or the node's own text, for a text node).
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        for node in self.node.descendants() {
            if let scraper::Node::Text(text) = node.value() {
                out.push_str(text);
            }
        }
        out
    }

    /// Plain text: whitespace runs (including non-breaking spaces) collapsed
    /// to single spaces, ends trimmed.
    pub fn text(&self) -> String {
        text::plain(&self.raw_text())
    }

    /// Shaped text: per-line trimmed, paragraph breaks preserved, runs of
    /// blank lines collapsed to one.
    pub fn inner_text(&self) -> String {
        text::shape(&self.raw_text())
    }

    /// Inner markup: element children serialized recursively, text children
    /// inserted as raw decoded text. Comments are dropped.
    pub fn inner_html(&self) -> String {
        let mut html = String::new();
        for child in self.node.children() {
            match child.value() {
                scraper::Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        html.push_str(&el.html());
                    }
                }
                scraper::Node::Text(text) => html.push_str(text),
                _ => {}
            }
        }
        html
    }

    /// Outer markup: the node and its subtree as produced by the underlying
    /// serializer. For a text node this is its raw text; for the document
    /// root, the serialized children.
    pub fn outer_html(&self) -> String {
        if let Some(el) = self.as_element() {
            return el.html();
        }
        match self.node.value() {
            scraper::Node::Text(text) => text.to_string(),
            _ => self
                .node
                .children()
                .map(|child| Node::from_ref(child).outer_html())
                .collect(),
        }
    }

    /// Attribute value trimmed of surrounding whitespace, `None` when the
    /// attribute is absent or the node is not an element.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        match self.node.value() {
            scraper::Node::Element(el) => el.attr(name).map(str::trim),
            _ => None,
        }
    }

    /// Whether the named attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        match self.node.value() {
            scraper::Node::Element(el) => el.attr(name).is_some(),
            _ => false,
        }
    }

    /// Read-only view over this node's attributes.
    pub fn attrs(&self) -> Attributes<'a> {
        match self.node.value() {
            scraper::Node::Element(el) => Attributes::of(Some(el)),
            _ => Attributes::of(None),
        }
    }
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Node::from_element(element)
    }
}

impl<'a> PartialEq for Node<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<'a> Eq for Node<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <body>
            <ul id="list">
                <li class="pick">One</li>
                <!-- between -->
                <li>Two</li>
                stray text
                <li class="pick">Three</li>
            </ul>
            <div class="outer">
                <div class="inner"><a href=" /go ">  Go   now </a></div>
            </div>
        </body>
        </html>
    "#;

    #[test]
    fn test_query_returns_first_match_in_document_order() {
        let doc = Document::parse(SAMPLE_HTML);
        let li = doc.root().query("li.pick").unwrap().unwrap();
        assert_eq!(li.text(), "One");
    }

    #[test]
    fn test_query_all_returns_all_matches_in_document_order() {
        let doc = Document::parse(SAMPLE_HTML);
        let picks = doc.root().query_all("li.pick").unwrap();
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].text(), "One");
        assert_eq!(picks[1].text(), "Three");
    }

    #[test]
    fn test_query_excludes_self() {
        let doc = Document::parse(SAMPLE_HTML);
        let list = doc.root().query("ul#list").unwrap().unwrap();
        assert!(list.query("ul").unwrap().is_none());
        assert_eq!(list.query_all("li").unwrap().len(), 3);
    }

    #[test]
    fn test_query_no_match_is_none() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(doc.root().query("article").unwrap().is_none());
        assert!(doc.root().query_all("article").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_selector_errors() {
        let doc = Document::parse(SAMPLE_HTML);
        let err = doc.root().query("[[[invalid").unwrap_err();
        assert_eq!(err, QueryError::Selector("[[[invalid".to_string()));
    }

    #[test]
    fn test_closest_prefers_nearest_ancestor() {
        let doc = Document::parse(SAMPLE_HTML);
        let a = doc.root().query("a").unwrap().unwrap();
        let inner = a.closest("div").unwrap().unwrap();
        assert_eq!(inner.attr("class"), Some("inner"));
        let outer = a.closest("div.outer").unwrap().unwrap();
        assert_eq!(outer.attr("class"), Some("outer"));
    }

    #[test]
    fn test_closest_matches_self() {
        let doc = Document::parse(SAMPLE_HTML);
        let inner = doc.root().query("div.inner").unwrap().unwrap();
        assert_eq!(inner.closest("div").unwrap().unwrap(), inner);
    }

    #[test]
    fn test_children_keeps_only_elements() {
        let doc = Document::parse(SAMPLE_HTML);
        let list = doc.root().query("ul").unwrap().unwrap();
        let children = list.children();
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| c.node_name() == Some("li")));
        assert_eq!(list.child(), Some(children[0]));
    }

    #[test]
    fn test_children_matching_restricts_to_direct_children() {
        let doc = Document::parse(SAMPLE_HTML);
        let outer = doc.root().query("div.outer").unwrap().unwrap();
        // The <a> is a grandchild; only the inner <div> is a direct child.
        assert!(outer.children_matching("a").unwrap().is_empty());
        let divs = outer.children_matching("div").unwrap();
        assert_eq!(divs.len(), 1);
        assert_eq!(divs[0].attr("class"), Some("inner"));
        assert_eq!(outer.child_matching("div").unwrap(), Some(divs[0]));
    }

    #[test]
    fn test_parent_and_root() {
        let doc = Document::parse(SAMPLE_HTML);
        let li = doc.root().query("li").unwrap().unwrap();
        assert_eq!(li.parent().unwrap().node_name(), Some("ul"));
        assert!(doc.root().parent().is_none());
        assert!(doc.root().is_document());
    }

    #[test]
    fn test_select_raw_includes_self() {
        let doc = Document::parse(SAMPLE_HTML);
        let list = doc.root().query("ul#list").unwrap().unwrap();
        let selector = Selector::parse("ul").unwrap();
        let raw = list.select_raw(&selector);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].value().name(), "ul");
    }

    #[test]
    fn test_element_sibling_walk_skips_comments_and_text() {
        let doc = Document::parse(SAMPLE_HTML);
        let first = doc.root().query("li").unwrap().unwrap();
        let second = first.next_element_sibling().unwrap();
        assert_eq!(second.text(), "Two");
        let third = second.next_element_sibling().unwrap();
        assert_eq!(third.text(), "Three");
        assert!(third.next_element_sibling().is_none());
        assert_eq!(third.prev_element_sibling(), Some(second));
        // The raw link lands on the comment between the first two items.
        assert!(first.next_sibling().unwrap().is_text() || first.next_sibling().unwrap().is_comment());
    }

    #[test]
    fn test_sibling_walk_from_non_element_reaches_element() {
        let doc = Document::parse("<div><!--c--><span>s</span></div>");
        let div = doc.root().query("div").unwrap().unwrap();
        let comment = div.first_child().unwrap();
        assert!(comment.is_comment());
        let span = comment.next_element_sibling().unwrap();
        assert_eq!(span.node_name(), Some("span"));
    }

    #[test]
    fn test_attr_is_trimmed_and_missing_is_none() {
        let doc = Document::parse(SAMPLE_HTML);
        let a = doc.root().query("a").unwrap().unwrap();
        assert_eq!(a.attr("href"), Some("/go"));
        assert_eq!(a.attr("title"), None);
        assert!(a.has_attr("href"));
        assert!(!a.has_attr("title"));
    }

    #[test]
    fn test_text_accessors() {
        let doc = Document::parse(SAMPLE_HTML);
        let a = doc.root().query("a").unwrap().unwrap();
        assert_eq!(a.text(), "Go now");
        assert_eq!(a.raw_text(), "  Go   now ");
    }

    #[test]
    fn test_inner_text_keeps_paragraph_breaks() {
        let doc = Document::parse("<div>  first\n\n\n\n  second  </div>");
        let div = doc.root().query("div").unwrap().unwrap();
        assert_eq!(div.inner_text(), "first\n\nsecond");
    }

    #[test]
    fn test_inner_html_drops_comments_and_keeps_raw_text() {
        let doc = Document::parse("<div>before<!--gone--><span>kept</span>after</div>");
        let div = doc.root().query("div").unwrap().unwrap();
        assert_eq!(div.inner_html(), "before<span>kept</span>after");
    }

    #[test]
    fn test_outer_html_serializes_subtree() {
        let doc = Document::parse(r#"<div><a href="/x">link</a></div>"#);
        let a = doc.root().query("a").unwrap().unwrap();
        assert_eq!(a.outer_html(), r#"<a href="/x">link</a>"#);
    }

    #[derive(Debug)]
    struct Link<'a> {
        node: Node<'a>,
    }

    impl<'a> From<Node<'a>> for Link<'a> {
        fn from(node: Node<'a>) -> Self {
            Link { node }
        }
    }

    #[test]
    fn test_query_as_builds_caller_type() {
        let doc = Document::parse(SAMPLE_HTML);
        let link: Link = doc.root().query_as("a").unwrap().unwrap();
        assert_eq!(link.node.attr("href"), Some("/go"));

        let links: Vec<Link> = doc.root().query_all_as("a").unwrap();
        assert_eq!(links.len(), 1);

        let holder: Option<Link> = link.node.closest_as("div.outer").unwrap();
        assert!(holder.is_some());
    }
}
