//! `LayoutElement` over live DOM elements.
//!
//! TRADE-OFFS
//! ==========
//! The marker ancestor is found by walking `parentElement` and comparing class
//! tokens rather than through `Element.closest`, which would need the marker
//! escaped into a CSS selector. DOM exceptions from `classList.add` are
//! logged and treated as "not added".

use leptos::logging::warn;
use multicol::LayoutElement;

/// A `web_sys::Element` seen through the layout passes.
#[derive(Clone, Debug)]
pub struct DomElement(web_sys::Element);

impl DomElement {
    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl From<web_sys::Element> for DomElement {
    fn from(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl From<web_sys::HtmlDivElement> for DomElement {
    fn from(element: web_sys::HtmlDivElement) -> Self {
        Self(element.into())
    }
}

impl LayoutElement for DomElement {
    fn class_name(&self) -> String {
        self.0.class_name()
    }

    fn set_class_name(&self, value: &str) {
        self.0.set_class_name(value);
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }

    fn child_elements(&self) -> Vec<Self> {
        let children = self.0.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .map(Self)
            .collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> bool {
        let list = self.0.class_list();
        if list.contains(class) {
            return false;
        }
        match list.add_1(class) {
            Ok(()) => true,
            Err(err) => {
                warn!("multicol: classList.add({class}) failed: {err:?}");
                false
            }
        }
    }
}
