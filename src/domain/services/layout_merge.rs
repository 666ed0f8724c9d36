//! Layout merge engine
//!
//! Request-scoped: one `LayoutMerge` serves one theme/store context. Handles
//! are collected first, then [`LayoutMerge::load`] either adopts the cached
//! merged layout for the handle list or merges every handle from its sources
//! and caches the result.
//!
//! ## Merge order
//!
//! For each handle, in handle order:
//! 1. file declarations of the handle (nested `<update handle="..."/>`
//!    directives are merged before the declaring node)
//! 2. the persistent store update, when the application is installed
//!
//! A handle is merged at most once per engine.

use std::cell::OnceCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{
    self, build_hierarchy, select_page_handles, DesignAbstraction, HandleSet, LayoutContext,
    PageHandleNode, Store, Theme,
};
use crate::domain::ports::{
    AppState, CacheBackend, FileSource, LayoutLogger, LayoutUpdateStore, LogChannel, Severity,
};
use crate::domain::services::file_layout::FileLayoutDocument;
use crate::domain::services::source_aggregator::{Placeholders, SourceAggregator};
use crate::domain::value_objects::CacheKey;
use crate::error::LayoutResult;
use crate::xml::{parse_document, XmlElement};

/// Root element of the merged layout document.
const MERGED_ROOT: &str = "layout";

/// Collaborators a merge engine reads from and reports to.
#[derive(Clone)]
pub struct MergeCollaborators {
    pub file_source: Arc<dyn FileSource>,
    pub update_store: Arc<dyn LayoutUpdateStore>,
    pub app_state: Arc<dyn AppState>,
    pub cache: Arc<dyn CacheBackend>,
    pub logger: Arc<dyn LayoutLogger>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandleStatus {
    Processing,
    Processed,
}

pub struct LayoutMerge {
    theme: Theme,
    store: Store,
    context: LayoutContext,
    aggregator: SourceAggregator,
    app_state: Arc<dyn AppState>,
    cache: Arc<dyn CacheBackend>,
    logger: Arc<dyn LayoutLogger>,
    handles: HandleSet,
    updates: Vec<String>,
    handle_status: HashMap<String, HandleStatus>,
    file_layout: OnceCell<Rc<FileLayoutDocument>>,
}

impl LayoutMerge {
    pub fn new(theme: Theme, store: Store, collaborators: MergeCollaborators) -> Self {
        let context = LayoutContext::from_parts(&theme, &store);
        let aggregator = SourceAggregator::new(
            collaborators.file_source,
            collaborators.update_store,
            Arc::clone(&collaborators.app_state),
            Placeholders::for_store(&store),
        );
        Self {
            theme,
            store,
            context,
            aggregator,
            app_state: collaborators.app_state,
            cache: collaborators.cache,
            logger: collaborators.logger,
            handles: HandleSet::new(),
            updates: Vec::new(),
            handle_status: HashMap::new(),
            file_layout: OnceCell::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn context(&self) -> &LayoutContext {
        &self.context
    }

    // ------------------------------------------------------------------
    // Handles
    // ------------------------------------------------------------------

    pub fn add_handle(&mut self, handle: impl Into<String>) -> &mut Self {
        self.handles.add(handle);
        self
    }

    pub fn add_handles<I, S>(&mut self, handles: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handles.extend(handles);
        self
    }

    pub fn remove_handle(&mut self, handle: &str) -> &mut Self {
        self.handles.remove(handle);
        self
    }

    pub fn handles(&self) -> &[String] {
        self.handles.handles()
    }

    pub fn page_handles(&self) -> &[String] {
        self.handles.page_handles()
    }

    /// Select page handles among `candidates`.
    ///
    /// Registered candidates replace the previous page handles. Returns
    /// `false`, leaving handles untouched, when none is registered.
    pub fn add_page_handles<S: AsRef<str>>(&mut self, candidates: &[S]) -> LayoutResult<bool> {
        let document = self.file_layout_updates_xml()?;
        let accepted =
            select_page_handles(candidates, |h| document.page_declaration(h).is_some());
        if accepted.is_empty() {
            return Ok(false);
        }
        debug!(page_handles = ?accepted, "page handles selected");
        self.handles.replace_page_handles(accepted);
        Ok(true)
    }

    pub fn page_handle_exists(&self, name: &str) -> LayoutResult<bool> {
        Ok(self.file_layout_updates_xml()?.page_declaration(name).is_some())
    }

    pub fn page_handle_label(&self, name: &str) -> LayoutResult<Option<String>> {
        let document = self.file_layout_updates_xml()?;
        Ok(document
            .page_declaration(name)
            .and_then(|node| node.attribute("label"))
            .map(str::to_string))
    }

    pub fn page_handle_parent(&self, name: &str) -> LayoutResult<Option<String>> {
        let document = self.file_layout_updates_xml()?;
        Ok(document
            .page_declaration(name)
            .and_then(|node| node.attribute("parent"))
            .map(str::to_string))
    }

    /// `name` and its page-type ancestors, root first. Empty for an
    /// unregistered handle.
    pub fn page_handle_parents(&self, name: &str) -> LayoutResult<Vec<String>> {
        let document = self.file_layout_updates_xml()?;
        let mut chain: Vec<String> = Vec::new();
        let mut current = document.page_declaration(name);
        while let Some(node) = current {
            let Some(id) = node.attribute("id") else {
                break;
            };
            if chain.iter().any(|seen| seen == id) {
                break;
            }
            chain.push(id.to_string());
            current = node
                .attribute("parent")
                .and_then(|parent| document.page_declaration(parent));
        }
        chain.reverse();
        Ok(chain)
    }

    pub fn page_handles_hierarchy(&self) -> LayoutResult<Vec<PageHandleNode>> {
        let document = self.file_layout_updates_xml()?;
        Ok(build_hierarchy(&document.page_declarations()))
    }

    // ------------------------------------------------------------------
    // Updates
    // ------------------------------------------------------------------

    pub fn add_update(&mut self, update: impl Into<String>) -> &mut Self {
        self.updates.push(update.into());
        self
    }

    pub fn as_vec(&self) -> &[String] {
        &self.updates
    }

    pub fn as_string(&self) -> String {
        self.updates.concat()
    }

    /// Merged updates under a synthetic `<layout>` root.
    pub fn as_document(&self) -> LayoutResult<XmlElement> {
        let xml = format!("<{MERGED_ROOT}>{}</{MERGED_ROOT}>", self.as_string());
        Ok(parse_document(&xml)?)
    }

    /// Container names mapped to their labels (empty when unlabeled).
    pub fn containers(&self) -> LayoutResult<BTreeMap<String, String>> {
        let document = self.as_document()?;
        let containers = document
            .descendants()
            .into_iter()
            .filter(|el| el.name() == "container")
            .filter_map(|el| {
                let name = el.attribute("name")?;
                Some((
                    name.to_string(),
                    el.attribute("label").unwrap_or_default().to_string(),
                ))
            })
            .collect();
        Ok(containers)
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::for_context(&self.context, self.handles.handles())
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Add `handles`, then load.
    pub fn load_handles<I, S>(&mut self, handles: I) -> LayoutResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handles.extend(handles);
        self.load()
    }

    /// Load the merged layout for the current handles.
    ///
    /// A non-empty cache hit is adopted as-is and no source is consulted.
    /// Otherwise every handle is merged and the result saved, tagged with the
    /// handles.
    pub fn load(&mut self) -> LayoutResult<()> {
        let key = self.cache_key();
        if let Some(cached) = self.load_cache(&key).filter(|cached| !cached.is_empty()) {
            debug!(key = %key, "merged layout loaded from cache");
            self.add_update(cached);
            return Ok(());
        }

        let handles = self.handles.handles().to_vec();
        for handle in &handles {
            self.merge(handle)?;
        }

        debug!(key = %key, handles = handles.len(), updates = self.updates.len(), "merged layout built");
        self.save_cache(&key, &self.as_string(), &handles);
        Ok(())
    }

    fn merge(&mut self, handle: &str) -> LayoutResult<()> {
        match self.handle_status.get(handle) {
            Some(HandleStatus::Processed) => return Ok(()),
            Some(HandleStatus::Processing) => {
                self.report_cycle(handle);
                return Ok(());
            }
            None => {}
        }

        self.handle_status
            .insert(handle.to_string(), HandleStatus::Processing);
        self.merge_file_updates(handle)?;
        self.merge_stored_update(handle)?;
        self.handle_status
            .insert(handle.to_string(), HandleStatus::Processed);
        Ok(())
    }

    fn merge_file_updates(&mut self, handle: &str) -> LayoutResult<()> {
        let document = self.file_layout_updates_xml()?;
        for node in document.handle_nodes(handle) {
            self.merge_nested_updates(node)?;
            self.add_update(node.inner_xml());
        }
        Ok(())
    }

    fn merge_stored_update(&mut self, handle: &str) -> LayoutResult<()> {
        let fragment = match self
            .aggregator
            .stored_update(handle, &self.theme, &self.store)?
        {
            None => return Ok(()),
            Some(Ok(fragment)) => fragment,
            Some(Err(e)) => {
                self.logger.log(
                    &format!("Stored layout update for handle '{handle}' is not valid.\n{e}"),
                    Severity::Error,
                    LogChannel::System,
                );
                return Ok(());
            }
        };
        self.merge_nested_updates(&fragment)?;
        self.add_update(fragment.inner_xml());
        Ok(())
    }

    /// Merge handles referenced by direct `<update handle="..."/>` children.
    fn merge_nested_updates(&mut self, node: &XmlElement) -> LayoutResult<()> {
        for child in node.elements().filter(|el| el.name() == "update") {
            if let Some(handle) = child.attribute("handle") {
                self.merge(handle)?;
            }
        }
        Ok(())
    }

    fn report_cycle(&self, handle: &str) {
        warn!(handle, "cyclic layout update skipped");
        if self.app_state.mode().is_developer() {
            self.logger.log(
                &format!("Cyclic dependency in merged layout for handle: {handle}"),
                Severity::Error,
                LogChannel::System,
            );
        }
    }

    // ------------------------------------------------------------------
    // File layout
    // ------------------------------------------------------------------

    /// Every layout file of the theme folded into one document.
    ///
    /// Built once per engine and cached under the context's file-layout key.
    pub fn file_layout_updates_xml(&self) -> LayoutResult<Rc<FileLayoutDocument>> {
        if let Some(document) = self.file_layout.get() {
            return Ok(Rc::clone(document));
        }
        let document = Rc::new(self.load_file_layout()?);
        Ok(Rc::clone(self.file_layout.get_or_init(|| document)))
    }

    fn load_file_layout(&self) -> LayoutResult<FileLayoutDocument> {
        let key = CacheKey::file_layout(&self.context);
        if let Some(cached) = self.load_cache(&key) {
            match parse_document(&cached)
                .ok()
                .and_then(FileLayoutDocument::from_root)
            {
                Some(document) => {
                    debug!(key = %key, "file layout loaded from cache");
                    return Ok(document);
                }
                None => warn!(key = %key, "cached file layout is not valid; rebuilding"),
            }
        }

        let aggregated = self.aggregator.file_layout(&self.theme)?;
        for rejected in &aggregated.rejected {
            self.logger.log(
                &format!(
                    "Theme layout update file '{}' is not valid.\n{}",
                    rejected.path.display(),
                    rejected.reason
                ),
                Severity::Error,
                LogChannel::System,
            );
        }
        self.save_cache(&key, &aggregated.document.to_xml(), &[]);
        Ok(aggregated.document)
    }

    // ------------------------------------------------------------------
    // Design abstractions
    // ------------------------------------------------------------------

    pub fn all_design_abstractions(&self) -> LayoutResult<BTreeMap<String, DesignAbstraction>> {
        Ok(self.file_layout_updates_xml()?.design_abstractions())
    }

    pub fn is_page_layout_design_abstraction(&self, entry: &DesignAbstraction) -> bool {
        entities::is_page_layout_design_abstraction(entry)
    }

    pub fn is_custom_design_abstraction(&self, entry: &DesignAbstraction) -> bool {
        entities::is_custom_design_abstraction(entry)
    }

    // ------------------------------------------------------------------
    // Cache
    // ------------------------------------------------------------------

    /// Backend failures count as misses.
    fn load_cache(&self, key: &CacheKey) -> Option<String> {
        match self.cache.load(key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "layout cache load failed");
                None
            }
        }
    }

    fn save_cache(&self, key: &CacheKey, value: &str, tags: &[String]) {
        if let Err(e) = self.cache.save(value, key.as_str(), tags) {
            warn!(key = %key, error = %e, "layout cache save failed");
        }
    }
}
