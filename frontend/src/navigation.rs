//! History-API routing: read the location, push entries, follow back/forward.

use common::route::Route;
use gloo_console::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::Callback;

/// Route for the page the browser is currently on.
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::SiteList;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Route::parse(&path, &search)
}

/// Adds a history entry for `route` without reloading.
pub fn push_route(route: &Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.href())) {
        error!("Failed to push history state", err);
    }
}

/// Keeps a `popstate` handler registered for as long as it is alive.
pub struct PopStateListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl PopStateListener {
    pub fn new(on_change: Callback<Route>) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            on_change.emit(current_route());
        });
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
