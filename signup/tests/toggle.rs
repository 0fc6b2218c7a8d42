//! Tests for the password visibility toggle.

use formdom::{Document, Element, InputKind};
use signup::form::{Masking, VisibilityPort};
use signup::page::registration_page;
use signup::{DomError, DomForm, PasswordToggle, ToggleBinding};

fn registration_form() -> DomForm {
    DomForm::new(registration_page())
}

fn kind(form: &DomForm, id: &str) -> Option<InputKind> {
    form.document().get_element_by_id(id).unwrap().kind
}

fn has_open_eye(form: &DomForm, id: &str) -> bool {
    form.document()
        .get_element_by_id(id)
        .unwrap()
        .has_class("fa-eye")
}

#[test]
fn test_attach_binds_each_icon_to_its_input() {
    let form = registration_form();
    let toggle = PasswordToggle::attach(&form).unwrap();
    assert_eq!(
        toggle.bindings(),
        &[
            ToggleBinding {
                icon_id: "password-toggle".to_string(),
                input_id: "password".to_string(),
            },
            ToggleBinding {
                icon_id: "confirm_password-toggle".to_string(),
                input_id: "confirm_password".to_string(),
            },
        ]
    );
}

#[test]
fn test_click_flips_masking_and_marker() {
    let mut form = registration_form();
    let toggle = PasswordToggle::attach(&form).unwrap();

    assert!(toggle.handle_click(&mut form, "password-toggle").unwrap());
    assert_eq!(kind(&form, "password"), Some(InputKind::Text));
    assert!(has_open_eye(&form, "password-toggle"));

    assert!(toggle.handle_click(&mut form, "password-toggle").unwrap());
    assert_eq!(kind(&form, "password"), Some(InputKind::Password));
    assert!(!has_open_eye(&form, "password-toggle"));
}

#[test]
fn test_click_never_touches_other_icons() {
    let mut form = registration_form();
    let toggle = PasswordToggle::attach(&form).unwrap();

    toggle.handle_click(&mut form, "confirm_password-toggle").unwrap();
    assert_eq!(kind(&form, "confirm_password"), Some(InputKind::Text));
    assert_eq!(kind(&form, "password"), Some(InputKind::Password));
    assert!(!has_open_eye(&form, "password-toggle"));
}

#[test]
fn test_click_on_other_element_is_ignored() {
    let mut form = registration_form();
    let toggle = PasswordToggle::attach(&form).unwrap();
    assert!(!toggle.handle_click(&mut form, "submit").unwrap());
    assert_eq!(form.masking("password").unwrap(), Masking::Masked);
}

#[test]
fn test_toggle_does_not_affect_validation_state() {
    let mut form = registration_form();
    let toggle = PasswordToggle::attach(&form).unwrap();
    toggle.handle_click(&mut form, "password-toggle").unwrap();

    let classes = &form
        .document()
        .get_element_by_id("password-box")
        .unwrap()
        .classes;
    assert_eq!(classes, &vec!["input-box".to_string()]);
}

#[test]
fn test_icon_without_input_fails_to_attach() {
    let doc = Document::new(
        Element::form().id("form").child(
            Element::div()
                .child(Element::icon().id("lonely").class("password-icon"))
                .child(Element::input(InputKind::Password).id("pw")),
        ),
    );
    let form = DomForm::new(doc);
    assert_eq!(
        PasswordToggle::attach(&form).unwrap_err(),
        DomError::MissingSibling {
            id: "lonely".to_string(),
            class: "form-control".to_string(),
        }
    );
}
