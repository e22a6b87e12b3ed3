use yew::{html, Component, Context, Html};

/// Spinner shown while a request is outstanding.
pub struct Loader;

impl Component for Loader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Loader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="loader" role="progressbar" aria-label="Loading">
                <div class="spin"></div>
                <div class="loader-label">{"Loading..."}</div>
            </div>
        }
    }
}
