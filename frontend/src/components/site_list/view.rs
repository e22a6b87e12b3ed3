use common::list::{truncate_description, ListPhase};
use common::model::site::Site;
use wasm_bindgen::JsValue;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::loader::Loader;
use crate::components::no_content::NoContent;

use super::messages::Msg;
use super::state::SiteListComponent;

const COLUMNS: [&str; 8] = [
    "Title",
    "Description",
    "Image",
    "URL",
    "Author",
    "Trending",
    "Date",
    "Actions",
];

/// Renders the table for the current `ListPhase`.
///
/// - `Loading`: the spinner (also the state left after a failed first fetch).
/// - `Empty`: the "no sites" placeholder.
/// - `Rows`: one row per site with truncated description, image thumbnail,
///   link, trending badge, locale date and the Edit/Delete actions.
///
/// # Arguments
/// * `component` - The table state to render.
/// * `ctx` - Component context; its link builds the row callbacks.
pub fn view(component: &SiteListComponent, ctx: &Context<SiteListComponent>) -> Html {
    match component.cache.phase() {
        ListPhase::Loading => html! { <Loader /> },
        ListPhase::Empty => html! { <NoContent /> },
        ListPhase::Rows(sites) => {
            let link = ctx.link();
            let rows = sites
                .iter()
                .map(|site| build_row(component, link, site))
                .collect::<Html>();

            html! {
                <div class="table-wrapper">
                    <table class="sites-table">
                        <thead>
                            <tr>
                                { for COLUMNS.iter().map(|title| html! { <th>{*title}</th> }) }
                            </tr>
                        </thead>
                        <tbody>{ rows }</tbody>
                    </table>
                </div>
            }
        }
    }
}

fn build_row(component: &SiteListComponent, link: &Scope<SiteListComponent>, site: &Site) -> Html {
    let edit_id = site.id.clone();
    let delete_id = site.id.clone();
    let deleting = component.cache.is_deleting(&site.id);

    html! {
        <tr key={site.id.clone()}>
            <td>{ site.title.clone() }</td>
            <td title={site.description.clone()}>{ truncate_description(&site.description).into_owned() }</td>
            <td>
                <img class="thumb" src={site.image.clone()} alt={site.title.clone()} />
            </td>
            <td>
                {
                    match site.url.as_deref().filter(|url| !url.is_empty()) {
                        Some(url) => html! {
                            <a href={url.to_string()} target="_blank" rel="noopener noreferrer">{"Visit Site"}</a>
                        },
                        None => html! {},
                    }
                }
            </td>
            <td>{ site.author.clone().unwrap_or_default() }</td>
            <td>
                <span class={classes!("badge", if site.is_trending { "badge-true" } else { "badge-false" })}>
                    { if site.is_trending { "True" } else { "False" } }
                </span>
            </td>
            <td>{ format_date(site.updated_at.as_deref()) }</td>
            <td class="actions">
                <button class="btn" onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}>
                    {"Edit"}
                </button>
                <button
                    class="btn btn-danger"
                    disabled={deleting}
                    onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}
                >
                    { if deleting { "Deleting..." } else { "Delete" } }
                </button>
            </td>
        </tr>
    }
}

/// Browser-locale date of a server timestamp.
fn format_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) if !raw.is_empty() => js_sys::Date::new(&JsValue::from_str(raw))
            .to_locale_date_string("default", &JsValue::UNDEFINED)
            .into(),
        _ => String::new(),
    }
}
