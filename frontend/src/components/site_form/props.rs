use common::route::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteFormProps {
    /// Record to edit. `None` opens an empty create form.
    #[prop_or_default]
    pub site_id: Option<String>,
    pub on_navigate: Callback<Route>,
}
