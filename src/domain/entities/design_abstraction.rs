//! Design abstraction entity
//!
//! Layout declarations tagged for theme customization tools.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractionKind {
    /// A page layout such as `page_empty`
    PageLayout,
    /// A custom abstraction such as `customer_account`
    Custom,
}

impl AbstractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbstractionKind::PageLayout => "page_layout",
            AbstractionKind::Custom => "custom",
        }
    }

    /// Parse the `design_abstraction` attribute value; unknown values yield `None`.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "page_layout" => Some(AbstractionKind::PageLayout),
            "custom" => Some(AbstractionKind::Custom),
            _ => None,
        }
    }
}

/// `{name, label, design_abstraction}` record.
///
/// The default value is the empty record: no name, no label, no kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignAbstraction {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_abstraction: Option<AbstractionKind>,
}

impl DesignAbstraction {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: AbstractionKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            design_abstraction: Some(kind),
        }
    }
}

pub fn is_page_layout_design_abstraction(entry: &DesignAbstraction) -> bool {
    entry.design_abstraction == Some(AbstractionKind::PageLayout)
}

pub fn is_custom_design_abstraction(entry: &DesignAbstraction) -> bool {
    entry.design_abstraction == Some(AbstractionKind::Custom)
}
