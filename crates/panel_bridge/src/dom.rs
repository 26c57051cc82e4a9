use std::collections::{BTreeMap, HashMap};

/// Capability surface over the host page.
///
/// The protocol layers never touch a document directly; they go through this
/// trait so envelope building and snapshot rendering stay testable without a
/// browser. Element-scoped methods return whether the target existed; lookups
/// that miss are expected while the host is still constructing a region.
pub trait ElementAccess {
    fn field_value(&self, id: &str) -> Option<String>;
    fn set_field_value(&mut self, id: &str, value: &str) -> bool;
    /// Synthesizes an input-changed notification on the field, the signal
    /// the host's reactive engine watches.
    fn dispatch_change(&mut self, id: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str) -> bool;
    fn set_html(&mut self, id: &str, html: &str) -> bool;
    fn set_class(&mut self, id: &str, class: &str) -> bool;
    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool;
    fn install_stylesheet(&mut self, href: &str);
    fn install_inline_style(&mut self, css: &str);
}

/// One node appended to the page head during startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadInstall {
    Stylesheet(String),
    InlineStyle(String),
}

/// Recorded state of one in-memory element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub value: String,
    pub text: String,
    pub html: String,
    pub class: String,
    pub styles: BTreeMap<String, String>,
    pub change_events: usize,
}

impl MemoryElement {
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

/// Headless [`ElementAccess`] implementation backed by a map.
///
/// Elements must be added up front; operations against unknown ids report a
/// miss exactly like a real document would.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: HashMap<String, MemoryElement>,
    head: Vec<HeadInstall>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.add_element(id);
        self
    }

    pub fn add_element(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn head(&self) -> &[HeadInstall] {
        &self.head
    }
}

impl ElementAccess for MemoryDom {
    fn field_value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|element| element.value.clone())
    }

    fn set_field_value(&mut self, id: &str, value: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    fn dispatch_change(&mut self, id: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.change_events += 1;
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.html = html.to_string();
                true
            }
            None => false,
        }
    }

    fn set_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.class = class.to_string();
                true
            }
            None => false,
        }
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element
                    .styles
                    .insert(property.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn install_stylesheet(&mut self, href: &str) {
        self.head.push(HeadInstall::Stylesheet(href.to_string()));
    }

    fn install_inline_style(&mut self, css: &str) {
        self.head.push(HeadInstall::InlineStyle(css.to_string()));
    }
}
