//! Status handling for chat-completions responses.

use serde::Deserialize;

use crate::error::EnrichmentError;

/// Wait assumed when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Error bodies are cut to this many characters before logging.
const MAX_ERROR_CHARS: usize = 200;

/// OpenAI-style error envelope: `{"error": {"message": "..."}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Pass successful responses through; map 429 and other failures to
/// [`EnrichmentError::RateLimited`] and [`EnrichmentError::Api`].
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, EnrichmentError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(EnrichmentError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(EnrichmentError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// The provider's own message when the body is an error envelope,
/// otherwise the raw body. Truncated either way.
fn error_message(body: &str) -> String {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.trim().to_string(), |envelope| envelope.error.message);
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, retry_after: Option<&str>, body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[tokio::test]
    async fn ok_passes_through() {
        assert!(check_response(response(200, None, "{}")).await.is_ok());
    }

    #[tokio::test]
    async fn too_many_requests_reads_retry_after() {
        let err = check_response(response(429, Some(" 15 "), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EnrichmentError::RateLimited {
                retry_after_secs: 15
            }
        ));
    }

    #[tokio::test]
    async fn too_many_requests_without_usable_header_waits_a_minute() {
        for header in [None, Some("Wed, 21 Oct 2026 07:28:00 GMT")] {
            let err = check_response(response(429, header, "")).await.unwrap_err();
            assert!(matches!(
                err,
                EnrichmentError::RateLimited {
                    retry_after_secs: 60
                }
            ));
        }
    }

    #[tokio::test]
    async fn api_error_uses_provider_message() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        let err = check_response(response(401, None, body)).await.unwrap_err();
        let EnrichmentError::Api { status, message } = err else {
            panic!("expected Api error, got {err:?}");
        };
        assert_eq!(status, 401);
        assert_eq!(message, "Invalid API Key");
    }

    #[test]
    fn plain_bodies_are_trimmed_and_truncated() {
        assert_eq!(error_message("  bad gateway \n"), "bad gateway");
        let long = "x".repeat(500);
        assert_eq!(error_message(&long).len(), MAX_ERROR_CHARS);
    }
}
