use common::form::{ImageFile, SiteForm};
use yew::prelude::*;

/// A file picked in the image input.
///
/// The handle is what gets validated; its name is what the backend stores.
#[derive(Clone, Debug)]
pub struct SelectedImage(pub gloo_file::File);

impl ImageFile for SelectedImage {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

pub struct SiteFormComponent {
    /// Draft, validation and submit state.
    pub form: SiteForm<SelectedImage>,
    /// True while the record to edit is being fetched.
    pub hydrating: bool,
    /// Guard for the first-render hydration.
    pub loaded: bool,
    /// The `<input type="file">`, cleared after a successful submit.
    pub file_input_ref: NodeRef,
}

impl SiteFormComponent {
    pub fn new(editing: bool) -> Self {
        Self {
            form: SiteForm::create(),
            hydrating: editing,
            loaded: false,
            file_input_ref: NodeRef::default(),
        }
    }

    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
