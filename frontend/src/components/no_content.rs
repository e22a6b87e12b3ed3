use yew::{html, Component, Context, Html};

pub struct NoContent;

impl Component for NoContent {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NoContent
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="no-content">
                <i class="material-icons">{"inbox"}</i>
                <h2>{"No sites yet"}</h2>
                <p>{"Use \"Add Site\" to publish the first one."}</p>
            </div>
        }
    }
}
