//! The registration page markup.

use formdom::{Document, Element, InputKind};

use crate::form::{GENDER_GROUP, REGISTRATION_FIELDS, toggle};

/// Input kind and placeholder for each registration field.
fn input_for(id: &str) -> (InputKind, &'static str) {
    match id {
        "name" => (InputKind::Text, "Digite seu nome"),
        "last_name" => (InputKind::Text, "Digite seu sobrenome"),
        "birthdate" => (InputKind::Date, "AAAA-MM-DD"),
        "email" => (InputKind::Email, "Digite seu e-mail"),
        "password" => (InputKind::Password, "Digite sua senha"),
        "confirm_password" => (InputKind::Password, "Confirme sua senha"),
        _ => (InputKind::Text, ""),
    }
}

const GENDER_OPTIONS: [(&str, &str); 3] = [
    ("female", "Feminino"),
    ("male", "Masculino"),
    ("other", "Outro"),
];

fn field_box(id: &str, label: &str) -> Element {
    let (kind, placeholder) = input_for(id);

    let mut row = Element::div()
        .id(format!("{id}-field"))
        .class("input-field")
        .class("inline")
        .child(
            Element::input(kind)
                .id(id)
                .name(id)
                .class("form-control")
                .placeholder(placeholder),
        );
    if kind == InputKind::Password {
        row = row.child(
            Element::icon()
                .id(format!("{id}-toggle"))
                .class("fa-solid")
                .class(toggle::ICON_CLASS),
        );
    }

    Element::div()
        .id(format!("{id}-box"))
        .class("input-box")
        .child(Element::label(label))
        .child(row)
        .child(Element::span().id(format!("{id}-error")).class("error"))
}

fn gender_box() -> Element {
    let options = GENDER_OPTIONS.iter().map(|(value, caption)| {
        Element::radio(GENDER_GROUP.name, *value)
            .id(format!("{}-{value}", GENDER_GROUP.name))
            .text(*caption)
    });

    Element::div()
        .id("gender-box")
        .class(GENDER_GROUP.container_class)
        .child(Element::label(GENDER_GROUP.label))
        .child(
            Element::div()
                .id("gender-options")
                .class("inline")
                .children(options),
        )
        .child(Element::span().id("gender-error").class("error"))
}

/// Build the registration form document.
pub fn registration_page() -> Document {
    let form = Element::form()
        .id("form")
        .child(Element::heading("Cadastro"))
        .children(
            REGISTRATION_FIELDS
                .iter()
                .map(|field| field_box(field.id, field.label)),
        )
        .child(gender_box())
        .child(Element::button("Cadastrar").id("submit"));

    Document::new(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_box_and_error_slot() {
        let doc = registration_page();
        for field in &REGISTRATION_FIELDS {
            let container = doc.closest(field.id, "input-box").expect("container");
            assert!(doc.query_class_within(&container.id, "error").is_some());
        }
    }

    #[test]
    fn test_password_fields_have_icons() {
        let doc = registration_page();
        let icons: Vec<_> = doc
            .query_all_class(toggle::ICON_CLASS)
            .iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(icons, vec!["password-toggle", "confirm_password-toggle"]);
    }

    #[test]
    fn test_gender_options_start_unchecked() {
        let doc = registration_page();
        let radios = doc.query_by_name("gender");
        assert_eq!(radios.len(), 3);
        assert!(radios.iter().all(|r| !r.checked));
    }
}
