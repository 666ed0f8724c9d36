//! Theme, store and layout context entities
//!
//! These are supplied by the storefront; the merge core only reads their ids,
//! the theme inheritance chain and the store URLs.

/// A design theme with an optional parent it inherits files from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    id: u32,
    area: String,
    code: String,
    parent: Option<Box<Theme>>,
    physical: bool,
}

impl Theme {
    pub fn new(id: u32, area: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            area: area.into(),
            code: code.into(),
            parent: None,
            physical: true,
        }
    }

    pub fn with_parent(mut self, parent: Theme) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Virtual themes live only in the database and have no files on disk.
    pub fn with_physical(mut self, physical: bool) -> Self {
        self.physical = physical;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    /// Theme path such as `Vendor/blank`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn parent(&self) -> Option<&Theme> {
        self.parent.as_deref()
    }

    pub fn is_physical(&self) -> bool {
        self.physical
    }

    /// This theme followed by its ancestors, nearest first.
    pub fn inheritance(&self) -> Vec<&Theme> {
        let mut chain = vec![self];
        let mut current = self.parent();
        while let Some(theme) = current {
            chain.push(theme);
            current = theme.parent();
        }
        chain
    }

    /// Nearest theme in the chain that has files on disk.
    pub fn physical_ancestor(&self) -> Option<&Theme> {
        self.inheritance().into_iter().find(|theme| theme.is_physical())
    }
}

/// Store view the layout is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    id: u32,
    base_url: String,
    secure_base_url: String,
}

impl Store {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            base_url: String::new(),
            secure_base_url: String::new(),
        }
    }

    /// Set the base URL; the secure URL follows it unless set explicitly.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        if self.secure_base_url.is_empty() {
            self.secure_base_url = self.base_url.clone();
        }
        self
    }

    pub fn with_secure_base_url(mut self, url: impl Into<String>) -> Self {
        self.secure_base_url = url.into();
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn secure_base_url(&self) -> &str {
        &self.secure_base_url
    }
}

/// Scope a layout is merged for. Fixed for the lifetime of a merge session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutContext {
    area: String,
    store_id: u32,
    theme_id: u32,
}

impl LayoutContext {
    pub fn new(area: impl Into<String>, store_id: u32, theme_id: u32) -> Self {
        Self {
            area: area.into(),
            store_id,
            theme_id,
        }
    }

    pub fn from_parts(theme: &Theme, store: &Store) -> Self {
        Self::new(theme.area(), store.id(), theme.id())
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn store_id(&self) -> u32 {
        self.store_id
    }

    pub fn theme_id(&self) -> u32 {
        self.theme_id
    }
}
