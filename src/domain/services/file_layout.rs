//! File layout document
//!
//! All layout files of a theme folded into one `<layouts>` document. Each file
//! becomes a child named after its root element (`layout` stays `layout`,
//! anything else becomes `handle`) with `id` set to the file's handle name and
//! the root attributes (`type`, `label`, `parent`, `design_abstraction`)
//! carried over.

use std::collections::BTreeMap;

use crate::domain::entities::{
    AbstractionKind, DesignAbstraction, LayoutFile, PageHandleDeclaration,
};
use crate::xml::XmlElement;

pub const LAYOUTS_ROOT: &str = "layouts";

const PAGE_TYPE: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLayoutDocument {
    root: XmlElement,
}

impl FileLayoutDocument {
    pub fn empty() -> Self {
        Self {
            root: XmlElement::new(LAYOUTS_ROOT),
        }
    }

    /// Wrap an already aggregated document (e.g. read back from the cache).
    pub fn from_root(root: XmlElement) -> Option<Self> {
        (root.name() == LAYOUTS_ROOT).then_some(Self { root })
    }

    /// Append the parsed root element of `file`.
    pub fn push_file(&mut self, file: &LayoutFile, file_root: XmlElement) {
        self.root.push_element(handle_node(file, file_root));
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Handle and layout nodes whose `id` is `handle`, in file order.
    pub fn handle_nodes(&self, handle: &str) -> Vec<&XmlElement> {
        self.root
            .elements()
            .filter(|el| is_handle_node(el) && el.attribute("id") == Some(handle))
            .collect()
    }

    /// Node declaring `name` as a page handle.
    pub fn page_declaration(&self, name: &str) -> Option<&XmlElement> {
        self.root.elements().find(|el| {
            is_handle_node(el)
                && el.attribute("id") == Some(name)
                && el.attribute("type") == Some(PAGE_TYPE)
        })
    }

    pub fn page_declarations(&self) -> Vec<PageHandleDeclaration> {
        let mut seen: Vec<&str> = Vec::new();
        let mut out = Vec::new();
        for node in self.root.elements().filter(|el| is_handle_node(el)) {
            if node.attribute("type") != Some(PAGE_TYPE) {
                continue;
            }
            let Some(name) = node.attribute("id") else {
                continue;
            };
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            out.push(PageHandleDeclaration {
                name: name.to_string(),
                label: node.attribute("label").unwrap_or_default().to_string(),
                parent: node.attribute("parent").map(str::to_string),
            });
        }
        out
    }

    /// Declarations tagged `page_layout` or `custom`, keyed by handle name.
    pub fn design_abstractions(&self) -> BTreeMap<String, DesignAbstraction> {
        let mut result = BTreeMap::new();
        for node in self.root.elements().filter(|el| is_handle_node(el)) {
            let Some(kind) = node
                .attribute("design_abstraction")
                .and_then(AbstractionKind::from_attribute)
            else {
                continue;
            };
            let name = node.attribute("id").unwrap_or_default().to_string();
            let label = node.attribute("label").unwrap_or_default().to_string();
            result.insert(name.clone(), DesignAbstraction::new(name, label, kind));
        }
        result
    }

    pub fn to_xml(&self) -> String {
        self.root.to_xml()
    }
}

fn is_handle_node(el: &XmlElement) -> bool {
    matches!(el.name(), "handle" | "layout")
}

fn handle_node(file: &LayoutFile, file_root: XmlElement) -> XmlElement {
    let tag = if file_root.name() == "layout" {
        "layout"
    } else {
        "handle"
    };
    let mut node = XmlElement::new(tag).with_attribute("id", file.handle_name());
    for (key, value) in file_root.attributes() {
        if key != "id" {
            node.set_attribute(key.clone(), value.clone());
        }
    }
    node.with_children(file_root.into_children())
}

/// Whether a parsed file root declares a page type.
pub fn declares_page_type(file_root: &XmlElement) -> bool {
    file_root.attribute("type") == Some(PAGE_TYPE)
}
