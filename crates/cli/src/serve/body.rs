//! Request body extraction accepting JSON or form-encoded payloads.

use axum::extract::{FromRequest, Request};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use super::json_error;

/// Deserializes the body as a form when the content type says so, and as
/// JSON otherwise. Rejections carry an `error` field: 413 for a body over the
/// limit, 400 for anything else.
pub(crate) struct JsonOrForm<T>(pub(crate) T);

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// Status for a body rejection. Only the size limit keeps its own code;
/// syntax, data and content-type problems are all a bad request.
fn rejection_status(status: StatusCode) -> StatusCode {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        status
    } else {
        StatusCode::BAD_REQUEST
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    json_error(rejection_status(status), message).into_response()
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&request) {
            match Form::<T>::from_request(request, state).await {
                Ok(Form(value)) => Ok(JsonOrForm(value)),
                Err(rejection) => Err(reject(rejection.status(), &rejection.body_text())),
            }
        } else {
            match Json::<T>::from_request(request, state).await {
                Ok(Json(value)) => Ok(JsonOrForm(value)),
                Err(rejection) => Err(reject(rejection.status(), &rejection.body_text())),
            }
        }
    }
}
