use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use besafe::error::QueryError;
use besafe::FilterError;

#[derive(thiserror::Error, Debug)]
pub enum BeSafeServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl From<FilterError> for BeSafeServerError {
    fn from(error: FilterError) -> Self {
        BeSafeServerError::BadRequest(error.to_string())
    }
}

impl From<QueryError> for BeSafeServerError {
    fn from(error: QueryError) -> Self {
        BeSafeServerError::Internal(error.into())
    }
}

impl IntoResponse for BeSafeServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            BeSafeServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            BeSafeServerError::Internal(e) => {
                tracing::error!("Failed to answer request: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, message).into_response()
    }
}
