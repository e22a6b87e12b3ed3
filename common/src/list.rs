//! State of the site table.

use std::borrow::Cow;

use crate::model::site::Site;

/// Descriptions longer than this many characters are cut in the table.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// First `DESCRIPTION_PREVIEW_CHARS` characters followed by `...`, or the
/// whole text when it is short enough.
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &description[..cut])),
        None => Cow::Borrowed(description),
    }
}

/// What the table should render.
#[derive(Debug, PartialEq)]
pub enum ListPhase<'a> {
    /// A fetch is pending, or none ever succeeded.
    Loading,
    Empty,
    Rows(&'a [Site]),
}

/// List-view projection of the collection, owned by the list screen.
#[derive(Clone, Debug)]
pub struct SiteCache {
    sites: Option<Vec<Site>>,
    loading: bool,
    deleting: Option<String>,
}

impl Default for SiteCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteCache {
    pub fn new() -> Self {
        Self {
            sites: None,
            loading: true,
            deleting: None,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    pub fn fetch_succeeded(&mut self, sites: Vec<Site>) {
        self.sites = Some(sites);
        self.loading = false;
    }

    /// A failed fetch keeps whatever was shown before. On first load that
    /// means the table never leaves the loading state.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    pub fn phase(&self) -> ListPhase<'_> {
        match &self.sites {
            None => ListPhase::Loading,
            Some(_) if self.loading => ListPhase::Loading,
            Some(sites) if sites.is_empty() => ListPhase::Empty,
            Some(sites) => ListPhase::Rows(sites),
        }
    }

    /// Marks `id` as being deleted. Returns false while another delete is pending.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.deleting = Some(id.to_string());
        true
    }

    pub fn delete_finished(&mut self) {
        self.deleting = None;
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.as_deref() == Some(id)
    }
}
