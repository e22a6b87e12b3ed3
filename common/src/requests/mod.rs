//! Request and response bodies exchanged with the sites backend.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Body of `POST /admin/site` and `PUT /admin/site/{id}`.
///
/// Carries every site attribute except the server-owned `id` and
/// `updatedAt`. The image is sent as the selected file's name.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SitePayload {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub author: String,
    pub is_trending: bool,
}

/// `{ "data": ... }` wrapper used by both read endpoints.
#[derive(Deserialize, Clone, Debug)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Answer of the create and update endpoints.
#[derive(Deserialize, Clone, Debug)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationResponse {
    /// Maps `success: false` to an application-level rejection.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// Result of `GET /sites` or `GET /sites/{id}`.
///
/// # Arguments
/// * `ok` - Whether the status was 2xx.
/// * `status` - The HTTP status code.
/// * `body` - The decoded envelope, or the decoding error as text.
///
/// A non-2xx answer is a `Status` error whatever the body says.
pub fn classify_data<T>(
    ok: bool,
    status: u16,
    body: Result<DataEnvelope<T>, String>,
) -> Result<T, ApiError> {
    if !ok {
        return Err(ApiError::Status(status));
    }
    body.map(|envelope| envelope.data).map_err(ApiError::Decode)
}

/// Result of `POST /admin/site` or `PUT /admin/site/{id}`.
///
/// # Arguments
/// * `ok` - Whether the status was 2xx.
/// * `status` - The HTTP status code.
/// * `body` - The decoded `{ success, message }` body, or the decoding error.
///
/// # Returns
/// - `Ok(())` for a 2xx answer with `success: true`.
/// - `Rejected` whenever the body says `success: false`, with the server's
///   message, even on a non-2xx status.
/// - `Status` for a non-2xx answer whose body is unreadable or claims success.
/// - `Decode` for a 2xx answer whose body is unreadable.
pub fn classify_mutation(
    ok: bool,
    status: u16,
    body: Result<MutationResponse, String>,
) -> Result<(), ApiError> {
    match body {
        Ok(response) if !response.success => response.into_result(),
        Ok(_) if ok => Ok(()),
        Ok(_) => Err(ApiError::Status(status)),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(err) => Err(ApiError::Decode(err)),
    }
}

/// Result of `DELETE /sites/{id}`: the status code is all that counts.
pub fn classify_delete(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}
