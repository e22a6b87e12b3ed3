use common::route::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteListProps {
    /// Called with the edit route when a row's "Edit" is clicked.
    pub on_navigate: Callback<Route>,
}
