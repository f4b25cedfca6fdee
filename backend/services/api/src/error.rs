use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use wardwatch_common::error::WardwatchError;
use wardwatch_insight::{InsightClientError, TransportError};

pub struct ApiError(pub InsightClientError);

impl From<InsightClientError> for ApiError {
    fn from(err: InsightClientError) -> Self {
        Self(err)
    }
}

impl From<WardwatchError> for ApiError {
    fn from(err: WardwatchError) -> Self {
        Self(InsightClientError::Invalid(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            InsightClientError::Invalid(WardwatchError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            InsightClientError::Transport(TransportError::HttpError { status, body }) => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({
                    "error": format!("insight backend returned {status}"),
                    "upstream_status": status.as_u16(),
                    "upstream_body": body,
                }),
            ),
            InsightClientError::Transport(TransportError::RequestError(e)) if e.is_timeout() => (
                StatusCode::GATEWAY_TIMEOUT,
                serde_json::json!({ "error": self.0.to_string() }),
            ),
            InsightClientError::Transport(_) => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "error": self.0.to_string() }),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": other.to_string() }),
            ),
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %self.0, "insight request failed");
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as HttpStatus;
    use std::sync::Arc;
    use std::time::Duration;
    use wardwatch_insight::{HttpTransport, HttpTransportConfig, InsightClient};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::from(WardwatchError::Validation("dimension required".to_string()));
        assert_eq!(err.into_response().status(), HttpStatus::BAD_REQUEST);
    }

    #[test]
    fn upstream_http_error_maps_to_502() {
        let err = ApiError::from(InsightClientError::Transport(TransportError::HttpError {
            status: HttpStatus::SERVICE_UNAVAILABLE,
            body: "down".to_string(),
        }));
        assert_eq!(err.into_response().status(), HttpStatus::BAD_GATEWAY);
    }

    #[test]
    fn decode_error_maps_to_502() {
        let err = ApiError::from(InsightClientError::Transport(TransportError::Decode(
            "expected value".to_string(),
        )));
        assert_eq!(err.into_response().status(), HttpStatus::BAD_GATEWAY);
    }

    #[test]
    fn internal_maps_to_500() {
        let err = ApiError::from(WardwatchError::Internal("serialize".to_string()));
        assert_eq!(err.into_response().status(), HttpStatus::INTERNAL_SERVER_ERROR);
    }

    fn client_with_timeout(base_url: String, timeout_secs: u64) -> InsightClient {
        let transport = HttpTransport::new(HttpTransportConfig {
            base_url,
            api_token: None,
            timeout_secs,
        })
        .expect("client builds");
        InsightClient::new(Arc::new(transport))
    }

    #[tokio::test]
    async fn upstream_timeout_maps_to_504() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/insights/kpis"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "by_status": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = client_with_timeout(server.uri(), 1)
            .get_insight_kpis()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InsightClientError::Transport(TransportError::RequestError(ref e)) if e.is_timeout()
        ));

        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), HttpStatus::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn unreachable_upstream_maps_to_502() {
        let err = client_with_timeout("http://127.0.0.1:9".to_string(), 1)
            .get_insight_kpis()
            .await
            .unwrap_err();

        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), HttpStatus::BAD_GATEWAY);
    }
}
