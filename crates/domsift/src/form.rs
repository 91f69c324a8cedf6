// ABOUTME: Form value helpers: look up form element values by field name.
// ABOUTME: The set of form element selectors is an explicit configuration value.

use std::collections::HashMap;

use crate::error::QueryError;
use crate::node::Node;

/// Which selectors count as form elements for the form helpers.
///
/// Passed explicitly to each call; there is no shared static configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub element_selectors: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            element_selectors: vec!["input".to_string()],
        }
    }
}

impl FormConfig {
    /// Selector matching configured form elements with the given name.
    fn named_selector(&self, name: &str) -> String {
        self.element_selectors
            .iter()
            .map(|selector| format!("{}[name=\"{}\"]", selector, name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Selector matching any configured form element.
    fn any_selector(&self) -> String {
        self.element_selectors.join(", ")
    }
}

impl<'a> Node<'a> {
    /// The `value` attribute of the first configured form element whose
    /// `name` attribute equals `name`, or `None` if there is no such element
    /// (or it has no value).
    pub fn form_value(
        &self,
        name: &str,
        config: &FormConfig,
    ) -> Result<Option<String>, QueryError> {
        let element = self.query(&config.named_selector(name))?;
        Ok(element.and_then(|el| el.attr("value").map(str::to_string)))
    }

    /// Maps every named form element below this node to its `value`
    /// attribute. Unnamed elements are skipped; a later element with the
    /// same name overwrites an earlier one.
    pub fn form_values(
        &self,
        config: &FormConfig,
    ) -> Result<HashMap<String, Option<String>>, QueryError> {
        let mut values = HashMap::new();
        for element in self.query_all(&config.any_selector())? {
            if let Some(name) = element.attr("name") {
                if !name.is_empty() {
                    values.insert(name.to_string(), element.attr("value").map(str::to_string));
                }
            }
        }
        Ok(values)
    }
}
