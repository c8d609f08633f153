use reqwest::StatusCode;

use crate::core::config::ProductServiceConfig;
use crate::core::error::{AppError, Result};
use crate::shared::constants::PRODUCT_DELETION_PATH;

/// Client for the product service, shared by all requests.
///
/// Calls are made once with no retry. Only a 200 answer counts as success.
pub struct ProductServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProductServiceClient {
    pub fn new(config: &ProductServiceConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent("category-service/0.1")
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the product service to remove every product of `category_id`
    pub async fn delete_products_by_category_id(&self, category_id: i64) -> Result<()> {
        let url = format!("{}{}", self.base_url, PRODUCT_DELETION_PATH);

        let request = self
            .client
            .delete(&url)
            .query(&[("id", category_id)])
            .build()
            .map_err(AppError::RequestCreationFailure)?;

        tracing::debug!("Requesting product deletion: {}", request.url());

        let response = self.client.execute(request).await.map_err(|e| {
            AppError::ProductDeletionRequestFailure(format!("request failed: {}", e))
        })?;

        if response.status() != StatusCode::OK {
            return Err(AppError::ProductDeletionRequestFailure(format!(
                "product service returned status {} for category {}",
                response.status(),
                category_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> ProductServiceClient {
        ProductServiceClient::new(&ProductServiceConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_ok_response_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(PRODUCT_DELETION_PATH))
            .and(query_param("id", "5"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        client.delete_products_by_category_id(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(PRODUCT_DELETION_PATH))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .delete_products_by_category_id(5)
            .await;
        assert!(matches!(
            result,
            Err(AppError::ProductDeletionRequestFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_server_error_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .delete_products_by_category_id(9)
            .await;
        assert!(matches!(
            result,
            Err(AppError::ProductDeletionRequestFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_failure() {
        // Nothing listens on port 9 in the test environment
        let result = client_for("http://127.0.0.1:9")
            .delete_products_by_category_id(1)
            .await;
        assert!(matches!(
            result,
            Err(AppError::ProductDeletionRequestFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_request_creation_failure() {
        let result = client_for("not a url")
            .delete_products_by_category_id(1)
            .await;
        assert!(matches!(result, Err(AppError::RequestCreationFailure(_))));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(
            client_for("http://product-service:8082/").base_url(),
            "http://product-service:8082"
        );
    }
}
