//! Form configuration.

use super::registry::{ChoiceGroup, FieldDescriptor, GENDER_GROUP, REGISTRATION_FIELDS};

/// Describes what the orchestrator validates.
///
/// `FormSchema::default()` is the registration form. The builder methods
/// allow other forms to reuse the same orchestration.
#[derive(Debug, Clone)]
pub struct FormSchema {
    /// Id of the form element submitted once everything passes.
    pub form_id: &'static str,

    /// Fields in validation order.
    pub fields: Vec<FieldDescriptor>,

    /// Radio group validated after the fields, if any.
    pub choice_group: Option<ChoiceGroup>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::registration()
    }
}

impl FormSchema {
    /// An empty schema for the form with the given id.
    pub fn new(form_id: &'static str) -> Self {
        Self {
            form_id,
            fields: Vec::new(),
            choice_group: None,
        }
    }

    /// The registration form: six fields plus the gender group.
    pub fn registration() -> Self {
        Self::new("form")
            .fields(REGISTRATION_FIELDS)
            .choice_group(GENDER_GROUP)
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields, keeping their order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn choice_group(mut self, group: ChoiceGroup) -> Self {
        self.choice_group = Some(group);
        self
    }
}
