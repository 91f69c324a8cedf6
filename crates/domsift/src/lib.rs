// ABOUTME: Main library entry point for the domsift HTML query facade.
// ABOUTME: Re-exports the public API: Document, Node, Attributes, FormConfig, QueryError.

//! domsift - query parsed HTML with CSS selectors.
//!
//! A thin, read-only facade over a native HTML parser and CSS selector
//! engine. Parse once into a [`Document`], then walk and query it through
//! cheap, copyable [`Node`] views.
//!
//! # Example
//!
//! ```
//! use domsift::Document;
//!
//! # fn main() -> Result<(), domsift::QueryError> {
//! let doc = Document::parse(r#"<ul><li class="pick">One</li><li>Two</li></ul>"#);
//! let item = doc.root().query("li.pick")?.expect("matching element");
//! assert_eq!(item.text(), "One");
//! assert_eq!(item.node_name(), Some("li"));
//! # Ok(())
//! # }
//! ```

pub mod attrs;
pub mod document;
pub mod error;
pub mod form;
pub mod node;

mod encoding;
mod selectors;
mod text;

pub use crate::attrs::Attributes;
pub use crate::document::Document;
pub use crate::error::QueryError;
pub use crate::form::FormConfig;
pub use crate::node::Node;

// The raw-query escape hatch deals in the underlying library's types.
pub use scraper::{ElementRef, Selector};
