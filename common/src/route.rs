//! Client-side routes of the admin.

use url::form_urlencoded;

pub const SITE_FORM_PATH: &str = "/site";
pub const SITE_LIST_PATH: &str = "/listSite";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Create form when `id` is `None`, edit form otherwise.
    SiteForm { id: Option<String> },
    SiteList,
}

impl Route {
    /// Resolves a location. `search` may include the leading `?`.
    /// Anything that is not the form falls back to the list.
    pub fn parse(path: &str, search: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if path == SITE_FORM_PATH {
            let id = query_param(search, "id").filter(|id| !id.is_empty());
            Route::SiteForm { id }
        } else {
            Route::SiteList
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::SiteForm { id: Some(id) } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("id", id)
                    .finish();
                format!("{}?{}", SITE_FORM_PATH, query)
            }
            Route::SiteForm { id: None } => SITE_FORM_PATH.to_string(),
            Route::SiteList => SITE_LIST_PATH.to_string(),
        }
    }

    pub fn create() -> Self {
        Route::SiteForm { id: None }
    }

    pub fn list() -> Self {
        Route::SiteList
    }

    pub fn edit(id: impl Into<String>) -> Self {
        Route::SiteForm {
            id: Some(id.into()),
        }
    }

    /// True for both form variants, so the sidebar highlights "Add Site"
    /// while editing too.
    pub fn is_form(&self) -> bool {
        matches!(self, Route::SiteForm { .. })
    }
}

/// Percent-decoded value of `key` in a query string.
fn query_param(search: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// One sidebar destination.
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: fn() -> Route,
}

pub const BRAND: &str = "ASTRAL GRID";

pub const MENU: [MenuItem; 2] = [
    MenuItem {
        label: "Add Site",
        icon: "add",
        route: Route::create,
    },
    MenuItem {
        label: "Lists",
        icon: "list",
        route: Route::list,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_without_id_is_create() {
        assert_eq!(Route::parse("/site", ""), Route::create());
        assert_eq!(Route::parse("/site/", "?other=1"), Route::create());
        assert_eq!(Route::parse("/site", "?id="), Route::create());
    }

    #[test]
    fn form_with_id_is_edit() {
        assert_eq!(Route::parse("/site", "?id=65f1c0"), Route::edit("65f1c0"));
        assert_eq!(Route::parse("/site", "tab=x&id=7"), Route::edit("7"));
    }

    #[test]
    fn query_values_are_decoded() {
        assert_eq!(Route::parse("/site", "?id=a%20b"), Route::edit("a b"));
        assert_eq!(Route::parse("/site", "?id=a+b%26c"), Route::edit("a b&c"));
    }

    #[test]
    fn ids_with_reserved_characters_survive_a_reload() {
        for id in ["a&b=c", "50% off", "x y/z?#"] {
            let route = Route::edit(id);
            let href = route.href();
            let (path, search) = href.split_once('?').unwrap();
            assert_eq!(path, SITE_FORM_PATH);
            assert_eq!(Route::parse(path, search), route, "{}", href);
        }
        assert_eq!(Route::edit("a&b=c").href(), "/site?id=a%26b%3Dc");
    }

    #[test]
    fn everything_else_is_the_list() {
        assert_eq!(Route::parse("/listSite", ""), Route::SiteList);
        assert_eq!(Route::parse("/", ""), Route::SiteList);
        assert_eq!(Route::parse("/unknown", "?id=1"), Route::SiteList);
    }

    #[test]
    fn href_parses_back() {
        for route in [Route::create(), Route::edit("abc"), Route::SiteList] {
            let href = route.href();
            let (path, search) = href.split_once('?').unwrap_or((href.as_str(), ""));
            assert_eq!(Route::parse(path, search), route);
        }
    }

    #[test]
    fn menu_points_at_both_screens() {
        assert_eq!((MENU[0].route)(), Route::create());
        assert_eq!((MENU[1].route)(), Route::SiteList);
        assert!(Route::edit("1").is_form());
    }
}
