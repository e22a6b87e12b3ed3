//! HTTP client for the sites backend.
//!
//! Every call resolves to `Result<_, ApiError>`; callers decide how to
//! surface the failure. Nothing is retried. Turning a response into a value
//! or an error is left to `common::requests::classify_*`.

use common::api::{ApiError, Endpoints};
use common::model::site::Site;
use common::requests::{
    classify_data, classify_delete, classify_mutation, DataEnvelope, MutationResponse,
    SitePayload,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

fn endpoints() -> Result<Endpoints, ApiError> {
    Endpoints::from_build_env()
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response
        .json::<DataEnvelope<T>>()
        .await
        .map_err(|err| err.to_string());
    classify_data(response.ok(), response.status(), body)
}

async fn read_mutation(response: Response) -> Result<(), ApiError> {
    let body = response
        .json::<MutationResponse>()
        .await
        .map_err(|err| err.to_string());
    classify_mutation(response.ok(), response.status(), body)
}

/// `GET /sites`
pub async fn fetch_sites() -> Result<Vec<Site>, ApiError> {
    let response = Request::get(&endpoints()?.list_sites())
        .send()
        .await
        .map_err(transport)?;
    read_data(response).await
}

/// `GET /sites/{id}`
pub async fn fetch_site(id: &str) -> Result<Site, ApiError> {
    let response = Request::get(&endpoints()?.site(id))
        .send()
        .await
        .map_err(transport)?;
    read_data(response).await
}

/// `POST /admin/site`
pub async fn create_site(payload: &SitePayload) -> Result<(), ApiError> {
    let response = Request::post(&endpoints()?.create_site())
        .json(payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_mutation(response).await
}

/// `PUT /admin/site/{id}`
pub async fn update_site(id: &str, payload: &SitePayload) -> Result<(), ApiError> {
    let response = Request::put(&endpoints()?.update_site(id))
        .json(payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_mutation(response).await
}

/// `DELETE /sites/{id}`. Only the status code matters.
pub async fn delete_site(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&endpoints()?.delete_site(id))
        .send()
        .await
        .map_err(transport)?;
    classify_delete(response.ok(), response.status())
}
