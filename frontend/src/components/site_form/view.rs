use common::form::{Field, FormMode};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::loader::Loader;

use super::messages::Msg;
use super::state::SiteFormComponent;

/// Renders the form, or the spinner while the record to edit is loading.
///
/// Inputs are controlled: every value comes from the draft and every change
/// goes back through `Msg::SetText`, `Msg::SetTrending` or
/// `Msg::ImageSelected`. Error text appears under a field only once
/// `SiteForm::visible_error` reports one.
///
/// # Arguments
/// * `component` - The form state to render.
/// * `ctx` - Component context; its link builds the input callbacks.
pub fn view(component: &SiteFormComponent, ctx: &Context<SiteFormComponent>) -> Html {
    if component.hydrating {
        return html! { <Loader /> };
    }

    let link = ctx.link();
    let form = &component.form;
    let fields = form.draft().fields();
    let creating = form.mode() == FormMode::Create;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    let submit_label = match (form.is_submitting(), creating) {
        (true, _) => "Publishing...",
        (false, true) => "Publish",
        (false, false) => "Update",
    };

    html! {
        <form class="site-form" {onsubmit} novalidate={true}>
            <h2>{ if creating { "Add Site" } else { "Edit Site" } }</h2>

            { text_input(component, link, Field::Title, "title", "Title*", "Title of your site", &fields.title) }

            <div class="form-field">
                <label for="description">{"Description*"}</label>
                <textarea
                    id="description"
                    name="description"
                    rows="4"
                    placeholder="Add your description"
                    value={fields.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        Msg::SetText(Field::Description, value)
                    })}
                />
                { field_error(component, Field::Description) }
            </div>

            <div class="form-field">
                <label for="img">{ if creating { "Select image:*" } else { "Select image:" } }</label>
                <input
                    ref={component.file_input_ref.clone()}
                    type="file"
                    id="img"
                    name="image"
                    accept="image/*"
                    onchange={link.batch_callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        input
                            .files()
                            .and_then(|files| files.get(0))
                            .map(Msg::ImageSelected)
                    })}
                />
                {
                    match form.draft().image_display_name() {
                        Some(name) => html! {
                            <p class="file-name">
                                { if form.draft().selected_image().is_some() { "Selected: " } else { "Current image: " } }
                                { name }
                            </p>
                        },
                        None => html! {},
                    }
                }
                { field_error(component, Field::Image) }
            </div>

            { text_input(component, link, Field::Url, "url", "Url", "Link of your site", &fields.url) }
            { text_input(component, link, Field::Author, "author", "Author", "Author name", &fields.author) }

            <div class="form-field toggle">
                <label class="switch">
                    <input
                        type="checkbox"
                        id="isTrending"
                        name="isTrending"
                        checked={fields.is_trending}
                        onchange={link.callback(|e: Event| {
                            Msg::SetTrending(e.target_unchecked_into::<HtmlInputElement>().checked())
                        })}
                    />
                    <span class="slider"></span>
                </label>
                <span>{"isTrending"}</span>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn" disabled={!form.can_submit()}>
                    { submit_label }
                </button>
            </div>
        </form>
    }
}

/// Single-line controlled input with its error line.
fn text_input(
    component: &SiteFormComponent,
    link: &Scope<SiteFormComponent>,
    field: Field,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    html! {
        <div class="form-field">
            <label for={id}>{label}</label>
            <input
                type="text"
                id={id}
                name={id}
                placeholder={placeholder}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetText(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            { field_error(component, field) }
        </div>
    }
}

fn field_error(component: &SiteFormComponent, field: Field) -> Html {
    match component.form.visible_error(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}
