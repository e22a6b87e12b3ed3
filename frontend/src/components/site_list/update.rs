//! Update function for the site table.
//!
//! Delete runs strictly as confirm -> DELETE -> re-fetch. The row is never
//! removed locally; the table only changes when the fresh collection arrives.

use common::notification::Severity;
use common::route::Route;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::notify::show_alert;

use super::messages::Msg;
use super::state::SiteListComponent;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this site?";

/// Central update function for the site table.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - Launches requests with `spawn_local` and feeds their results back as
///   `Msg::Fetched` / `Msg::DeleteFinished`.
/// - Returns `true` to re-render the view, `false` when only side effects occur.
///
/// # Arguments
/// * `component` - The table state (`SiteCache` plus the first-fetch guard).
/// * `ctx` - Component context, used for the link and the `on_navigate` prop.
/// * `msg` - The message to process.
pub fn update(
    component: &mut SiteListComponent,
    ctx: &Context<SiteListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Fetch => {
            component.cache.begin_fetch();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_sites().await;
                link.send_message(Msg::Fetched(result));
            });
            true
        }
        Msg::Fetched(Ok(sites)) => {
            component.cache.fetch_succeeded(sites);
            true
        }
        Msg::Fetched(Err(err)) => {
            error!("Failed to get all sites", err.to_string());
            component.cache.fetch_failed();
            true
        }
        Msg::Edit(id) => {
            ctx.props().on_navigate.emit(Route::edit(id));
            false
        }
        Msg::Delete(id) => {
            if !confirm_delete() {
                return false;
            }
            if !component.cache.begin_delete(&id) {
                return false;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::delete_site(&id).await;
                link.send_message(Msg::DeleteFinished(result));
            });
            true
        }
        Msg::DeleteFinished(Ok(())) => {
            component.cache.delete_finished();
            show_alert(Severity::Success, "Site deleted successfully");
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::DeleteFinished(Err(err)) => {
            component.cache.delete_finished();
            log!("Failed to delete site", err.to_string());
            show_alert(Severity::Error, &err.user_message());
            true
        }
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_CONFIRMATION).ok())
        .unwrap_or(false)
}
