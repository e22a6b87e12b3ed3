use common::api::ApiError;
use common::form::Field;
use common::model::site::Site;

#[derive(Clone)]
pub enum Msg {
    Hydrate(String),
    Hydrated(Result<Site, ApiError>),
    SetText(Field, String),
    SetTrending(bool),
    ImageSelected(web_sys::File),
    Submit,
    SubmitFinished(Result<(), ApiError>),
    BackToList,
}
