//! Page handle declarations
//!
//! Handles declared with `type="page"` form a hierarchy through their
//! `parent` attribute (e.g. `catalog_product_view_type_simple` under
//! `catalog_product_view`).

use serde::Serialize;

/// One node of the page-type hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHandleNode {
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageHandleNode>,
}

impl PageHandleNode {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }
}

/// Flat declaration as read from the file layout document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHandleDeclaration {
    pub name: String,
    pub label: String,
    pub parent: Option<String>,
}

/// Arrange flat declarations into trees rooted at parentless handles.
///
/// Declarations whose parent is unknown become roots. Sibling order follows
/// declaration order.
pub fn build_hierarchy(declarations: &[PageHandleDeclaration]) -> Vec<PageHandleNode> {
    let known = |name: &str| declarations.iter().any(|d| d.name == name);
    declarations
        .iter()
        .filter(|d| d.parent.as_deref().map_or(true, |p| !known(p) || p == d.name))
        .map(|root| build_node(root, declarations, &mut vec![root.name.as_str()]))
        .collect()
}

fn build_node<'a>(
    declaration: &'a PageHandleDeclaration,
    declarations: &'a [PageHandleDeclaration],
    path: &mut Vec<&'a str>,
) -> PageHandleNode {
    let mut node = PageHandleNode::new(&declaration.name, &declaration.label);
    for child in declarations
        .iter()
        .filter(|d| d.parent.as_deref() == Some(declaration.name.as_str()))
    {
        if path.contains(&child.name.as_str()) {
            continue;
        }
        path.push(&child.name);
        node.children.push(build_node(child, declarations, path));
        path.pop();
    }
    node
}
