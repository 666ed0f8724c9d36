//! Handle set entity
//!
//! Ordered, duplicate-free list of layout handles requested for one rendering
//! context, plus the subset selected as page handles.

/// Requested layout handles in merge order.
///
/// Invariants: `handles` never contains duplicates and every page handle is
/// also present in `handles`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleSet {
    handles: Vec<String>,
    page_handles: Vec<String>,
}

impl HandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handle unless it is already present.
    pub fn add(&mut self, handle: impl Into<String>) {
        let handle = handle.into();
        if !self.contains(&handle) {
            self.handles.push(handle);
        }
    }

    pub fn extend<I, S>(&mut self, handles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for handle in handles {
            self.add(handle);
        }
    }

    /// Remove a handle from the list and from the page handles.
    pub fn remove(&mut self, handle: &str) {
        self.handles.retain(|h| h != handle);
        self.page_handles.retain(|h| h != handle);
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.handles.iter().any(|h| h == handle)
    }

    pub fn handles(&self) -> &[String] {
        &self.handles
    }

    pub fn page_handles(&self) -> &[String] {
        &self.page_handles
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Swap the current page handles for `page_handles`.
    ///
    /// Old page handles leave the handle list first, then the new ones are
    /// appended. Non-page handles keep their positions.
    pub fn replace_page_handles(&mut self, page_handles: Vec<String>) {
        let previous = std::mem::take(&mut self.page_handles);
        self.handles.retain(|h| !previous.contains(h));

        let mut accepted: Vec<String> = Vec::with_capacity(page_handles.len());
        for handle in page_handles {
            if !accepted.contains(&handle) {
                accepted.push(handle);
            }
        }
        self.extend(accepted.iter().cloned());
        self.page_handles = accepted;
    }
}

/// Ordered scan of `candidates` against the page-handle registry.
///
/// Scanning starts at the first registered candidate; every registered
/// candidate from there on is accepted in candidate order. An empty result
/// means nothing matched.
pub fn select_page_handles<S, F>(candidates: &[S], is_registered: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    candidates
        .iter()
        .map(AsRef::as_ref)
        .skip_while(|candidate| !is_registered(candidate))
        .filter(|candidate| is_registered(candidate))
        .map(str::to_string)
        .collect()
}
