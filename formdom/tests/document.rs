use formdom::{Document, Element, InputKind};

fn field_box(id: &str) -> Element {
    Element::div()
        .id(format!("{id}-box"))
        .class("input-box")
        .child(Element::label(id))
        .child(
            Element::div()
                .id(format!("{id}-wrap"))
                .class("input-field")
                .child(Element::input(InputKind::Text).id(id).class("form-control")),
        )
        .child(Element::span().id(format!("{id}-error")).class("error"))
}

fn sample() -> Document {
    Document::new(
        Element::form()
            .id("form")
            .child(field_box("name"))
            .child(field_box("email"))
            .child(
                Element::div()
                    .id("radios")
                    .class("radio-container")
                    .child(Element::radio("gender", "f").id("f"))
                    .child(Element::radio("gender", "m").id("m"))
                    .child(Element::span().id("gender-error").class("error")),
            ),
    )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_get_element_by_id() {
    let doc = sample();
    assert_eq!(doc.get_element_by_id("email").map(|e| e.id.as_str()), Some("email"));
    assert!(doc.get_element_by_id("missing").is_none());
}

#[test]
fn test_closest_walks_up_to_matching_ancestor() {
    let doc = sample();
    let container = doc.closest("name", "input-box").expect("container");
    assert_eq!(container.id, "name-box");

    // An element matching the class itself is its own closest.
    let same = doc.closest("name-box", "input-box").expect("self");
    assert_eq!(same.id, "name-box");

    assert!(doc.closest("name", "radio-container").is_none());
}

#[test]
fn test_query_class_within_stays_in_scope() {
    let doc = sample();
    let error = doc.query_class_within("email-box", "error").expect("error slot");
    assert_eq!(error.id, "email-error");
    assert!(doc.query_class_within("name-error", "error").is_none());
}

#[test]
fn test_query_by_name_and_parent() {
    let doc = sample();
    let ids: Vec<_> = doc.query_by_name("gender").iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec!["f", "m"]);
    assert_eq!(doc.parent("name").map(|e| e.id.as_str()), Some("name-wrap"));
    assert!(doc.parent("form").is_none());
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_class_ops_do_not_duplicate() {
    let mut doc = sample();
    let el = doc.get_element_by_id_mut("name-box").unwrap();
    el.add_class("valid");
    el.add_class("valid");
    assert_eq!(el.classes, vec!["input-box", "valid"]);
    el.remove_class("valid");
    assert!(!el.has_class("valid"));
    assert!(el.toggle_class("fa-eye"));
    assert!(!el.toggle_class("fa-eye"));
}

#[test]
fn test_check_radio_is_exclusive() {
    let mut doc = sample();
    assert!(doc.check_radio("f"));
    assert!(doc.check_radio("m"));
    assert!(!doc.get_element_by_id("f").unwrap().checked);
    assert!(doc.get_element_by_id("m").unwrap().checked);
    assert!(!doc.check_radio("name-box"));
}
