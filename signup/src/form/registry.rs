//! The fields the registration form validates, in validation order.

use crate::error::DomError;
use crate::validation::{
    FailureKind, Verdict, date_is_valid, email_is_valid, messages, name_is_valid,
    password_is_secure, passwords_match,
};

/// How a field's value is checked.
#[derive(Clone, Copy)]
pub enum Validator {
    /// Looks only at the field's own trimmed value.
    Single(fn(&str) -> Verdict),
    /// Also reads the raw, untrimmed live value of the field `with`.
    Paired {
        with: &'static str,
        check: fn(&str, &str) -> Verdict,
    },
}

impl Validator {
    /// Run the check on `value`, fetching the sibling value through `read` if needed.
    pub fn evaluate<F>(&self, value: &str, read: F) -> Result<Verdict, DomError>
    where
        F: FnOnce(&str) -> Result<String, DomError>,
    {
        match self {
            Self::Single(check) => Ok(check(value)),
            Self::Paired { with, check } => {
                let other = read(*with)?;
                Ok(check(value, &other))
            }
        }
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(_) => write!(f, "Single(..)"),
            Self::Paired { with, .. } => write!(f, "Paired {{ with: {with:?} }}"),
        }
    }
}

/// Binds a form input to its display label and validator.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Id of the input element.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub validator: Validator,
}

impl FieldDescriptor {
    pub const fn new(id: &'static str, label: &'static str, validator: Validator) -> Self {
        Self {
            id,
            label,
            validator,
        }
    }
}

pub const REGISTRATION_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor::new("name", "Nome", Validator::Single(name_is_valid)),
    FieldDescriptor::new("last_name", "Sobrenome", Validator::Single(name_is_valid)),
    FieldDescriptor::new("birthdate", "Nascimento", Validator::Single(date_is_valid)),
    FieldDescriptor::new("email", "E-mail", Validator::Single(email_is_valid)),
    FieldDescriptor::new("password", "Senha", Validator::Single(password_is_secure)),
    FieldDescriptor::new(
        "confirm_password",
        "Confirmar senha",
        Validator::Paired {
            with: "password",
            check: passwords_match,
        },
    ),
];

/// Mutually exclusive options that are valid when at least one is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceGroup {
    /// Shared `name` of the options.
    pub name: &'static str,
    pub label: &'static str,
    /// Class of the element wrapping the options and their error slot.
    pub container_class: &'static str,
    pub message: &'static str,
}

impl ChoiceGroup {
    pub fn evaluate(&self, any_checked: bool) -> Verdict {
        Verdict::check(any_checked, FailureKind::NoneSelected, self.message)
    }
}

pub const GENDER_GROUP: ChoiceGroup = ChoiceGroup {
    name: "gender",
    label: "Gênero",
    container_class: "radio-container",
    message: messages::GENDER_REQUIRED,
};
