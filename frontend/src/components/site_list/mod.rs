//! Site table: root module wiring the Yew `Component` implementation with
//! submodules for messages, props, state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SiteListProps`, `SiteListComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, request the full collection from `GET /sites`.
//! - Offer edit (navigate to the form with the row id) and delete
//!   (confirm -> `DELETE` -> re-fetch) per row.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SiteListProps;
pub use state::SiteListComponent;

impl Component for SiteListComponent {
    type Message = Msg;
    type Properties = SiteListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SiteListComponent::new()
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
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
