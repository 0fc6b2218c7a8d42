//! `formdom` implementation of the form ports.

use formdom::{Document, Element, InputKind, Tag};
use log::{info, warn};

use crate::error::DomError;
use crate::form::{FeedbackTarget, FormPort, Masking, StateMarker, VisibilityPort};

/// Values sent by a native form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form_id: String,
    /// `(name, value)` pairs in document order, as a browser would encode them.
    pub values: Vec<(String, String)>,
}

/// Default class of the nearest ancestor of an input that receives state markers.
pub const CONTAINER_CLASS: &str = "input-box";

/// Default class of the error display element inside a container.
pub const ERROR_CLASS: &str = "error";

/// A document plus the class names the form scripts look for.
#[derive(Debug, Clone)]
pub struct DomForm {
    document: Document,
    container_class: &'static str,
    error_class: &'static str,
    submissions: Vec<Submission>,
}

impl DomForm {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            container_class: CONTAINER_CLASS,
            error_class: ERROR_CLASS,
            submissions: Vec::new(),
        }
    }

    /// Use a different class to find a field's container.
    pub fn container_class(mut self, class: &'static str) -> Self {
        self.container_class = class;
        self
    }

    /// Use a different class to find the error slot inside a container.
    pub fn error_class(mut self, class: &'static str) -> Self {
        self.error_class = class;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Submissions performed so far, oldest first.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    fn element(&self, id: &str) -> Result<&Element, DomError> {
        self.document.get_element_by_id(id).ok_or_else(|| {
            warn!("lookup of '#{}' failed", id);
            DomError::missing(id)
        })
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.document
            .get_element_by_id_mut(id)
            .ok_or_else(|| DomError::missing(id))
    }

    fn input(&self, id: &str) -> Result<&Element, DomError> {
        let element = self.element(id)?;
        if element.is_input() {
            Ok(element)
        } else {
            Err(DomError::NotAnInput { id: id.to_string() })
        }
    }

    /// Id of the element receiving state markers for `target`.
    fn container_id(&self, target: FeedbackTarget<'_>) -> Result<String, DomError> {
        let container = match target {
            FeedbackTarget::Field(id) => {
                self.element(id)?;
                self.document.closest(id, self.container_class)
            }
            FeedbackTarget::Group(class) => self.document.query_class(class),
        };

        container.map(|c| c.id.clone()).ok_or_else(|| {
            warn!("no container for {}", target);
            let (id, class) = match target {
                FeedbackTarget::Field(id) => (id, self.container_class),
                FeedbackTarget::Group(class) => (class, class),
            };
            DomError::MissingContainer {
                id: id.to_string(),
                class: class.to_string(),
            }
        })
    }

    fn error_slot_id(&self, target: FeedbackTarget<'_>) -> Result<String, DomError> {
        let container = self.container_id(target)?;
        self.document
            .query_class_within(&container, self.error_class)
            .map(|slot| slot.id.clone())
            .ok_or(DomError::MissingErrorSlot { container })
    }

    fn collect_values(element: &Element, out: &mut Vec<(String, String)>) {
        let unchecked_radio = element.kind == Some(InputKind::Radio) && !element.checked;
        if element.is_input() && !unchecked_radio {
            let name = element.name.clone().unwrap_or_else(|| element.id.clone());
            out.push((name, element.value.clone()));
        }
        for child in &element.children {
            Self::collect_values(child, out);
        }
    }
}

impl FormPort for DomForm {
    fn input_value(&self, id: &str) -> Result<String, DomError> {
        Ok(self.input(id)?.value.clone())
    }

    fn any_checked(&self, name: &str) -> Result<bool, DomError> {
        Ok(self.document.query_by_name(name).iter().any(|el| el.checked))
    }

    fn clear_markers(&mut self, target: FeedbackTarget<'_>) -> Result<(), DomError> {
        let id = self.container_id(target)?;
        let container = self.element_mut(&id)?;
        for marker in StateMarker::ALL {
            container.remove_class(marker.class());
        }
        Ok(())
    }

    fn add_marker(
        &mut self,
        target: FeedbackTarget<'_>,
        marker: StateMarker,
    ) -> Result<(), DomError> {
        let id = self.container_id(target)?;
        self.element_mut(&id)?.add_class(marker.class());
        Ok(())
    }

    fn set_error_html(&mut self, target: FeedbackTarget<'_>, html: &str) -> Result<(), DomError> {
        let id = self.error_slot_id(target)?;
        self.element_mut(&id)?.inner_html = html.to_string();
        Ok(())
    }

    fn submit(&mut self, form_id: &str) -> Result<(), DomError> {
        let form = self
            .document
            .get_element_by_id(form_id)
            .filter(|el| el.tag == Tag::Form)
            .ok_or_else(|| DomError::MissingForm {
                id: form_id.to_string(),
            })?;

        let mut values = Vec::new();
        Self::collect_values(form, &mut values);
        info!("submitting '#{}' with {} value(s)", form_id, values.len());

        self.submissions.push(Submission {
            form_id: form_id.to_string(),
            values,
        });
        Ok(())
    }
}

impl VisibilityPort for DomForm {
    fn elements_with_class(&self, class: &str) -> Vec<String> {
        self.document
            .query_all_class(class)
            .into_iter()
            .map(|el| el.id.clone())
            .collect()
    }

    fn query_in_parent(&self, id: &str, class: &str) -> Result<String, DomError> {
        self.element(id)?;
        let missing = || DomError::MissingSibling {
            id: id.to_string(),
            class: class.to_string(),
        };
        let parent = self.document.parent(id).ok_or_else(missing)?;
        self.document
            .query_class_within(&parent.id, class)
            .map(|el| el.id.clone())
            .ok_or_else(missing)
    }

    fn masking(&self, input_id: &str) -> Result<Masking, DomError> {
        let input = self.input(input_id)?;
        Ok(if input.kind == Some(InputKind::Password) {
            Masking::Masked
        } else {
            Masking::Plain
        })
    }

    fn set_masking(&mut self, input_id: &str, masking: Masking) -> Result<(), DomError> {
        self.input(input_id)?;
        let input = self.element_mut(input_id)?;
        input.kind = Some(match masking {
            Masking::Masked => InputKind::Password,
            Masking::Plain => InputKind::Text,
        });
        Ok(())
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.toggle_class(class))
    }
}
