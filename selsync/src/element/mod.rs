mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element carrying the given name attribute, in document
/// order. This is the live group query: callers re-run it on every event
/// rather than holding on to the result.
pub fn find_named<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    find_named_recursive(root, name, &mut result);
    result
}

fn find_named_recursive<'a>(element: &'a Element, name: &str, result: &mut Vec<&'a Element>) {
    if element.name.as_deref() == Some(name) {
        result.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            find_named_recursive(child, name, result);
        }
    }
}

/// Collect every select element in the tree, in document order.
pub fn collect_selects(root: &Element) -> Vec<&Element> {
    let mut result = Vec::new();
    collect_selects_recursive(root, &mut result);
    result
}

fn collect_selects_recursive<'a>(element: &'a Element, result: &mut Vec<&'a Element>) {
    if matches!(element.content, Content::Select { .. }) {
        result.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_selects_recursive(child, result);
        }
    }
}
