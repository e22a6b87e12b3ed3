//! Update function for the create/update form.
//!
//! Submit goes through `SiteForm::begin_submit`, which yields at most one
//! request per click and keeps the button disabled until the request ends.
//! On success the draft is emptied and the list is shown after
//! `BACK_TO_LIST_DELAY_MS`, leaving the notification time to be read.

use common::form::{FormMode, SiteForm, Submission, SubmitBlocked};
use common::notification::Severity;
use common::route::Route;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::notify::show_alert;

use super::messages::Msg;
use super::state::{SelectedImage, SiteFormComponent};

const BACK_TO_LIST_DELAY_MS: u32 = 1000;

/// Central update function for the create/update form.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - Launches the hydration and submit requests with `spawn_local` and feeds
///   their results back as `Msg::Hydrated` / `Msg::SubmitFinished`.
/// - Returns `true` to re-render the view, `false` when only side effects occur.
///
/// # Arguments
/// * `component` - The form state (`SiteForm` controller, loader flag, file input ref).
/// * `ctx` - Component context, used for the link and the `on_navigate` prop.
/// * `msg` - The message to process.
pub fn update(
    component: &mut SiteFormComponent,
    ctx: &Context<SiteFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Hydrate(id) => {
            component.hydrating = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_site(&id).await;
                link.send_message(Msg::Hydrated(result));
            });
            true
        }
        Msg::Hydrated(Ok(site)) => {
            component.form = SiteForm::hydrate(&site);
            component.hydrating = false;
            true
        }
        Msg::Hydrated(Err(err)) => {
            error!("Failed to load site", err.to_string());
            show_alert(Severity::Error, &err.user_message());
            ctx.props().on_navigate.emit(Route::SiteList);
            false
        }
        Msg::SetText(field, value) => {
            component.form.set_text(field, value);
            true
        }
        Msg::SetTrending(value) => {
            component.form.set_trending(value);
            true
        }
        Msg::ImageSelected(file) => {
            component
                .form
                .select_image(SelectedImage(gloo_file::File::from(file)));
            true
        }
        Msg::Submit => {
            let submission = match component.form.begin_submit() {
                Ok(submission) => submission,
                Err(SubmitBlocked::Invalid(_)) => return true,
                Err(SubmitBlocked::InFlight | SubmitBlocked::Completed) => return false,
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &submission {
                    Submission::Create(payload) => api::create_site(payload).await,
                    Submission::Update { id, payload } => api::update_site(id, payload).await,
                };
                link.send_message(Msg::SubmitFinished(result));
            });
            true
        }
        Msg::SubmitFinished(Ok(())) => {
            let message = match component.form.mode() {
                FormMode::Create => "Site created successfully",
                FormMode::Edit => "Site updated successfully",
            };
            component.form.finish_submit(true);
            component.clear_file_input();
            show_alert(Severity::Success, message);

            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(BACK_TO_LIST_DELAY_MS).await;
                link.send_message(Msg::BackToList);
            });
            true
        }
        Msg::SubmitFinished(Err(err)) => {
            log!("Failed to save site", err.to_string());
            component.form.finish_submit(false);
            show_alert(Severity::Error, &err.user_message());
            true
        }
        Msg::BackToList => {
            ctx.props().on_navigate.emit(Route::SiteList);
            false
        }
    }
}
