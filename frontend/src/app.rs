use common::route::Route;
use yew::{html, Callback, Component, Context, Html};

use crate::components::sidebar::Sidebar;
use crate::components::site_form::SiteFormComponent;
use crate::components::site_list::SiteListComponent;
use crate::navigation::{current_route, push_route, PopStateListener};

pub enum Msg {
    /// User-initiated navigation; adds a history entry.
    Navigate(Route),
    /// Back/forward in the browser.
    RouteChanged(Route),
}

/// Sidebar shell plus the screen selected by the current route.
pub struct App {
    route: Route,
    _popstate: Option<PopStateListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            route: current_route(),
            _popstate: PopStateListener::new(ctx.link().callback(Msg::RouteChanged)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                push_route(&route);
                self.route = route;
                true
            }
            Msg::RouteChanged(route) => {
                if self.route == route {
                    return false;
                }
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate: Callback<Route> = ctx.link().callback(Msg::Navigate);

        let screen = match &self.route {
            Route::SiteList => html! {
                <SiteListComponent on_navigate={on_navigate.clone()} />
            },
            Route::SiteForm { id } => {
                // Keyed so that create -> edit (or edit A -> edit B) remounts the form.
                let key = id.clone().unwrap_or_else(|| "new".to_string());
                html! {
                    <SiteFormComponent key={key} site_id={id.clone()} on_navigate={on_navigate.clone()} />
                }
            }
        };

        html! {
            <div class="layout">
                <Sidebar active={self.route.clone()} on_navigate={on_navigate} />
                <main class="content">{ screen }</main>
            </div>
        }
    }
}
