//! Runtime state of the site table.

use common::list::SiteCache;

/// State container for `SiteListComponent`.
///
/// Fields are `pub` because they are read by `view` and mutated by `update`.
pub struct SiteListComponent {
    /// Rows, loading flag and pending delete.
    pub cache: SiteCache,
    /// Guard for the first-render fetch.
    pub loaded: bool,
}

impl Default for SiteListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteListComponent {
    /// Starts in the loading phase with no rows and no delete pending.
    pub fn new() -> Self {
        Self {
            cache: SiteCache::new(),
            loaded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::list::ListPhase;

    #[test]
    fn default_state_waits_for_first_fetch() {
        let component = SiteListComponent::default();
        assert!(!component.loaded);
        assert_eq!(component.cache.phase(), ListPhase::Loading);
    }
}
