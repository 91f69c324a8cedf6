// ABOUTME: Owning wrapper for a parsed HTML tree.
// ABOUTME: Parses strings or raw bytes, collects parse diagnostics, and hands out the root Node.

use std::borrow::Cow;

use scraper::Html;

use crate::encoding;
use crate::node::Node;

/// An owned, parsed HTML document.
///
/// The document owns the whole tree for its lifetime; every [`Node`] handed
/// out borrows from it. Malformed markup never fails: the parser produces a
/// best-effort tree and records its diagnostics on the side.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an already-decoded HTML string.
    pub fn parse(html: &str) -> Self {
        Document {
            html: Html::parse_document(html),
        }
    }

    /// Parses an HTML byte string, decoding it first.
    ///
    /// A recognized `encoding` label forces that decoding; otherwise the
    /// charset is sniffed from the bytes.
    pub fn parse_bytes(bytes: &[u8], encoding: Option<&str>) -> Self {
        Document::parse(&encoding::decode(bytes, encoding))
    }

    /// Diagnostics the parser recorded while building the tree.
    pub fn errors(&self) -> &[Cow<'static, str>] {
        &self.html.errors
    }

    /// Wrapper for the document root node.
    pub fn root(&self) -> Node<'_> {
        Node::from_ref(self.html.tree.root())
    }

    /// Serialization of the parsed tree.
    pub fn html(&self) -> String {
        self.html.root_element().html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_produces_document_root() {
        let doc = Document::parse("<p>hi</p>");
        assert!(doc.root().is_document());
        assert_eq!(doc.root().query("p").unwrap().unwrap().text(), "hi");
    }

    #[test]
    fn test_malformed_markup_still_yields_tree() {
        let doc = Document::parse("<p><div =bad>mangled");
        // Diagnostics are collected, not raised.
        assert!(!doc.errors().is_empty());
        assert!(doc.root().query("div").unwrap().is_some());
    }

    #[test]
    fn test_parse_bytes_with_encoding_label() {
        let bytes = b"<html><body><p>caf\xe9</p></body></html>";
        let doc = Document::parse_bytes(bytes, Some("iso-8859-1"));
        assert_eq!(doc.root().query("p").unwrap().unwrap().text(), "café");
    }

    #[test]
    fn test_parse_bytes_sniffs_encoding() {
        let bytes = b"<html><body><p>caf\xe9</p></body></html>";
        let doc = Document::parse_bytes(bytes, None);
        assert_eq!(doc.root().query("p").unwrap().unwrap().text(), "café");
    }

    #[test]
    fn test_html_serializes_tree() {
        let doc = Document::parse("<html><body><p>hi</p></body></html>");
        let html = doc.html();
        assert!(html.contains("<p>hi</p>"));
    }
}
