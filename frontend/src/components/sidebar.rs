use common::route::{Route, BRAND, MENU};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Route of the screen currently shown, used to highlight its entry.
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

/// Static navigation between the form and the table.
pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let items = MENU
            .iter()
            .map(|item| {
                let route = (item.route)();
                let active = if route.is_form() {
                    props.active.is_form()
                } else {
                    props.active == route
                };
                let href = route.href();
                let on_navigate = props.on_navigate.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_navigate.emit(route.clone());
                });

                html! {
                    <li>
                        <a {href} {onclick} class={classes!("nav-link", active.then_some("active"))}>
                            <i class="material-icons">{item.icon}</i>
                            <span>{item.label}</span>
                        </a>
                    </li>
                }
            })
            .collect::<Html>();

        html! {
            <aside class="sidebar">
                <h1 class="brand">{BRAND}</h1>
                <nav>
                    <ul>{ items }</ul>
                </nav>
            </aside>
        }
    }
}
