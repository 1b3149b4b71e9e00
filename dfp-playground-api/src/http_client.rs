//! Generic HTTP client tools
//!
//! One request flow for every endpoint: send, log, classify the status,
//! read the body. Callers build the `RequestBuilder` themselves.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;
use crate::utils::log_sanitizer::{summarize_uri, truncate_for_log};

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response body
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name, for logs
    /// * `uri` - server-relative URI, for logs
    ///
    /// # Returns
    /// * `Ok(body)` - on any 2xx status
    /// * `Err(ApiError::Http)` - non-2xx status
    /// * `Err(ApiError::NetworkError | ApiError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        uri: &str,
    ) -> Result<String, ApiError> {
        let response = Self::send(request_builder, method_name, uri).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(response, method_name, uri).await);
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[playground-api] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Performs a request whose redirect answer counts as success
    ///
    /// Form-style endpoints answer a successful POST with `302` to another
    /// page. The caller must build the request on a client that does not
    /// follow redirects; the target page is never fetched.
    ///
    /// # Returns
    /// * `Ok(())` - on any 2xx or 3xx status
    /// * `Err(ApiError::Http)` - any other status
    pub async fn execute_action(
        request_builder: RequestBuilder,
        method_name: &str,
        uri: &str,
    ) -> Result<(), ApiError> {
        let response = Self::send(request_builder, method_name, uri).await?;
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            if let Some(location) = response.headers().get("location") {
                log::debug!("[playground-api] Redirected to {location:?}, not following");
            }
            return Ok(());
        }
        Err(Self::status_error(response, method_name, uri).await)
    }

    /// Send the request and map transport failures
    async fn send(
        request_builder: RequestBuilder,
        method_name: &str,
        uri: &str,
    ) -> Result<Response, ApiError> {
        log::debug!("[playground-api] {method_name} {}", summarize_uri(uri));

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        log::debug!(
            "[playground-api] Response Status: {}",
            response.status().as_u16()
        );
        Ok(response)
    }

    /// Build (and log) the error for a rejected status
    async fn status_error(response: Response, method_name: &str, uri: &str) -> ApiError {
        let status = response.status();

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::Http {
            status: status.as_u16(),
            retry_after,
            body: (!body.is_empty()).then(|| body.clone()),
        };
        if err.is_expected() {
            log::warn!("[playground-api] {method_name} {} -> {err}", summarize_uri(uri));
        } else {
            log::error!(
                "[playground-api] {method_name} {} -> {err}: {}",
                summarize_uri(uri),
                truncate_for_log(&body)
            );
        }
        err
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[playground-api] JSON parse failed: {e}");
            log::error!(
                "[playground-api] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request, retrying transient failures
    ///
    /// # Retry strategy
    /// - Only [`ApiError::is_retryable`] errors are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds),
    ///   or the server's `Retry-After` (capped at 30s) when present
    /// - `max_retries == 0` sends exactly once
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        uri: &str,
        max_retries: u32,
    ) -> Result<String, ApiError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, uri).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[playground-api] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method_name, uri).await;
            };

            match Self::execute_request(req, method_name, uri).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[playground-api] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Use `Retry-After` (capped at 30s) when the server sent one, otherwise back off.
fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    if let ApiError::Http {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, 800ms, 1.6s, ... capped at 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_header_wins() {
        let e = ApiError::Http {
            status: 429,
            retry_after: Some(5),
            body: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(5));

        let e = ApiError::Http {
            status: 429,
            retry_after: Some(600),
            body: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    #[test]
    fn retry_delay_falls_back_to_backoff() {
        let e = ApiError::NetworkError {
            detail: "reset".into(),
        };
        assert_eq!(retry_delay(&e, 2), Duration::from_millis(400));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<crate::types::QueryResponse, ApiError> =
            HttpUtils::parse_json("<html>Internal error</html>");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
