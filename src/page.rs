//! Page - in-memory model of the document the client drives
//!
//! Inputs hold form values, containers hold innerHTML. Every mutation
//! goes through this type so rendering stays a pure string transformation.

use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    inputs: HashMap<String, String>,
    inner_html: HashMap<String, String>,
    reloads: u64,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of an input, empty when unset
    pub fn value(&self, id: &str) -> &str {
        self.inputs.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.inputs.insert(id.to_string(), value.into());
    }

    pub fn value_mut(&mut self, id: &str) -> &mut String {
        self.inputs.entry(id.to_string()).or_default()
    }

    pub fn inner_html(&self, id: &str) -> &str {
        self.inner_html.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn set_inner_html(&mut self, id: &str, html: impl Into<String>) {
        self.inner_html.insert(id.to_string(), html.into());
    }

    /// Drop all document state, as a browser reload does
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.inner_html.clear();
        self.reloads += 1;
    }

    /// Number of reloads since the page was created
    pub fn reloads(&self) -> u64 {
        self.reloads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ids;

    #[test]
    fn test_unset_elements_read_empty() {
        let page = Page::new();
        assert_eq!(page.value(ids::CHORE_NAME), "");
        assert_eq!(page.inner_html(ids::ERROR), "");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut page = Page::new();
        page.set_value(ids::ARTIST_NAME, "A2");
        page.set_inner_html(ids::ERROR, "boom");

        page.reset();

        assert_eq!(page.value(ids::ARTIST_NAME), "");
        assert_eq!(page.inner_html(ids::ERROR), "");
        assert_eq!(page.reloads(), 1);
    }
}
