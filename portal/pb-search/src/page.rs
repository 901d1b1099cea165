//! Page model
//!
//! A page is a fixed set of named regions that widgets render into. Each
//! region has text content and a visibility flag, and at most one region
//! holds input focus. Operations on a region that is not part of the page
//! do nothing, like an empty selection.

use std::collections::BTreeMap;

/// Region ids of the phone book search page
pub mod selectors {
    /// Result list
    pub const DOCS: &str = "#pbDocs";
    /// Search box container
    pub const SEARCH: &str = "#pbSearch";
    /// Search text input
    pub const SEARCH_INPUT: &str = "#pbSearchInput";
    /// Detail record content
    pub const DETAIL_RESULT: &str = "#ddResult";
    /// Detail panel wrapping `DETAIL_RESULT`
    pub const DETAIL_PANEL: &str = "#pbDetailDiv";
    /// Page links
    pub const PAGER: &str = "#pbPager";
    /// "Displaying x to y of z results." line
    pub const PAGER_HEADER: &str = "#pbPager-header";

    /// Every region, in display order
    pub const ALL: &[&str] = &[
        SEARCH,
        SEARCH_INPUT,
        PAGER_HEADER,
        DOCS,
        PAGER,
        DETAIL_PANEL,
        DETAIL_RESULT,
    ];
}

/// A named area of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    content: String,
    visible: bool,
}

impl Region {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            content: String::new(),
            visible: true,
        }
    }
}

/// The set of regions widgets render into
#[derive(Debug, Clone, Default)]
pub struct Page {
    regions: BTreeMap<String, Region>,
    focused: Option<String>,
}

impl Page {
    /// Create a page with the given regions, all empty and visible
    pub fn with_regions<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: ids
                .into_iter()
                .map(|id| (id.into(), Region::default()))
                .collect(),
            focused: None,
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.region(id).map(Region::content)
    }

    /// Replace a region's content
    pub fn set_content(&mut self, id: &str, content: impl Into<String>) {
        if let Some(region) = self.region_mut(id) {
            region.content = content.into();
        }
    }

    pub fn clear(&mut self, id: &str) {
        self.set_content(id, String::new());
    }

    pub fn hide(&mut self, id: &str) {
        if let Some(region) = self.region_mut(id) {
            region.visible = false;
        }
    }

    pub fn show(&mut self, id: &str) {
        if let Some(region) = self.region_mut(id) {
            region.visible = true;
        }
    }

    /// Visibility of a region; missing regions are never visible
    pub fn is_visible(&self, id: &str) -> bool {
        self.region(id).is_some_and(Region::is_visible)
    }

    /// Move input focus to a region
    pub fn focus(&mut self, id: &str) {
        if self.has(id) {
            self.focused = Some(id.to_string());
        } else {
            tracing::debug!(region = id, "Focus target not on page, ignoring");
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    fn region_mut(&mut self, id: &str) -> Option<&mut Region> {
        let region = self.regions.get_mut(id);
        if region.is_none() {
            tracing::debug!(region = id, "Region not on page, ignoring");
        }
        region
    }
}
