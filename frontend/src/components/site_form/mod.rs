//! Create/update form: root module wiring the Yew `Component` implementation
//! with submodules for messages, props, state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SiteFormProps`, `SiteFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - Fix the mode at mount from the `site_id` prop: without it the form
//!   creates a record; with it the record is fetched on first render and the
//!   form edits it.
//!
//! The component is keyed by the id in `App`, so a different id always means
//! a fresh component.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SiteFormProps;
pub use state::SiteFormComponent;

impl Component for SiteFormComponent {
    type Message = Msg;
    type Properties = SiteFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        SiteFormComponent::new(ctx.props().site_id.is_some())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            if let Some(site_id) = &ctx.props().site_id {
                ctx.link().send_message(Msg::Hydrate(site_id.clone()));
            }
        }
    }
}
