use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every failure a request can end in. The display string is the fixed
/// plain-text message sent to the client; sources are only logged.
///
/// Input errors answer 500 like the rest, and a missing row is reported as
/// `QueryFailure`. Clients of this service depend on both.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid Method!")]
    MethodNotAllowed,

    #[error("Couldn't unmarshall JSON into object!")]
    ReadJsonFailure(String),

    #[error("Couldn't marshall object into JSON format!")]
    WriteJsonFailure(#[source] serde_json::Error),

    #[error("Querying the database resulted in an error!")]
    QueryFailure(#[source] sqlx::Error),

    #[error("Couldn't convert the String to an Int!")]
    StrToIntFailure(#[source] std::num::ParseIntError),

    #[error("The ID is not set!")]
    IdNotSet,

    #[error("Negative IDs are invalid!")]
    IdNegative,

    #[error("The category name is empty!")]
    NameNotSet,

    #[error("Couldn't create the product deletion request!")]
    RequestCreationFailure(#[source] reqwest::Error),

    #[error("Requesting the deletion of the category's products failed!")]
    ProductDeletionRequestFailure(String),

    #[error("Couldn't determine the hostname!")]
    HostnameFailure,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::QueryFailure(e) => tracing::error!("{} ({:?})", self, e),
            AppError::WriteJsonFailure(e) => tracing::error!("{} ({:?})", self, e),
            AppError::RequestCreationFailure(e) => tracing::error!("{} ({:?})", self, e),
            AppError::ProductDeletionRequestFailure(detail) => {
                tracing::error!("{} ({})", self, detail)
            }
            AppError::ReadJsonFailure(detail) => tracing::warn!("{} ({})", self, detail),
            AppError::StrToIntFailure(e) => tracing::warn!("{} ({})", self, e),
            AppError::HostnameFailure => tracing::error!("{}", self),
            _ => tracing::warn!("{}", self),
        }

        (self.status(), self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_is_405() {
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_input_errors_are_500() {
        let parse_error = "abc".parse::<i64>().unwrap_err();
        for error in [
            AppError::IdNotSet,
            AppError::IdNegative,
            AppError::NameNotSet,
            AppError::StrToIntFailure(parse_error),
            AppError::ReadJsonFailure("expected value".to_string()),
        ] {
            assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_row_not_found_is_query_failure_500() {
        let error = AppError::QueryFailure(sqlx::Error::RowNotFound);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.to_string(),
            "Querying the database resulted in an error!"
        );
    }

    #[tokio::test]
    async fn test_response_body_is_fixed_message() {
        let response = AppError::IdNegative.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/plain")));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Negative IDs are invalid!");
    }

    #[tokio::test]
    async fn test_source_detail_is_not_exposed() {
        let response =
            AppError::ProductDeletionRequestFailure("connection refused".to_string())
                .into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            &body[..],
            b"Requesting the deletion of the category's products failed!"
        );
    }
}
