//! A queryable element tree.
//!
//! `Document` owns the root element and offers the handful of DOM-style
//! lookups form scripts need: by id, by class, by `name`, and `closest`
//! ancestor matching a class.

use crate::element::{ancestry, descendants, find_element, find_element_mut, Element};

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// The element itself or its nearest ancestor carrying `class`.
    pub fn closest(&self, id: &str, class: &str) -> Option<&Element> {
        ancestry(&self.root, id)?
            .into_iter()
            .rev()
            .find(|el| el.has_class(class))
    }

    /// Direct parent of the element with `id`.
    pub fn parent(&self, id: &str) -> Option<&Element> {
        let chain = ancestry(&self.root, id)?;
        let len = chain.len();
        if len < 2 {
            return None;
        }
        Some(chain[len - 2])
    }

    /// First element in document order carrying `class`.
    pub fn query_class(&self, class: &str) -> Option<&Element> {
        descendants(&self.root)
            .into_iter()
            .find(|el| el.has_class(class))
    }

    /// First descendant of `scope_id` (excluding the scope itself) carrying `class`.
    pub fn query_class_within(&self, scope_id: &str, class: &str) -> Option<&Element> {
        let scope = self.get_element_by_id(scope_id)?;
        descendants(scope)
            .into_iter()
            .skip(1)
            .find(|el| el.has_class(class))
    }

    pub fn query_all_class(&self, class: &str) -> Vec<&Element> {
        descendants(&self.root)
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// All inputs whose `name` attribute equals `name`.
    pub fn query_by_name(&self, name: &str) -> Vec<&Element> {
        descendants(&self.root)
            .into_iter()
            .filter(|el| el.is_input() && el.name.as_deref() == Some(name))
            .collect()
    }

    /// Check the radio with `id` and uncheck the other radios sharing its name.
    /// Returns false if `id` is not a named input.
    pub fn check_radio(&mut self, id: &str) -> bool {
        let Some(name) = self.get_element_by_id(id).and_then(|el| el.name.clone()) else {
            return false;
        };
        let group: Vec<String> = self
            .query_by_name(&name)
            .into_iter()
            .map(|el| el.id.clone())
            .collect();
        for member in group {
            if let Some(el) = self.get_element_by_id_mut(&member) {
                el.checked = member == id;
            }
        }
        log::debug!("radio group '{}' now selects '{}'", name, id);
        true
    }
}
