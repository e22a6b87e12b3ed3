use common::api::ApiError;
use common::model::site::Site;

#[derive(Clone)]
pub enum Msg {
    Fetch,
    Fetched(Result<Vec<Site>, ApiError>),
    Edit(String),
    Delete(String),
    DeleteFinished(Result<(), ApiError>),
}
