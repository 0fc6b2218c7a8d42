mod node;

pub use node::{Element, InputKind, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &mut root.children {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Chain of elements from `root` down to the element with `id`, inclusive.
pub fn ancestry<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in &root.children {
        if let Some(mut chain) = ancestry(child, id) {
            chain.insert(0, root);
            return Some(chain);
        }
    }

    None
}

/// Every element under `root` (including `root`) in document order.
pub fn descendants(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(element);
    for child in &element.children {
        collect(child, out);
    }
}
