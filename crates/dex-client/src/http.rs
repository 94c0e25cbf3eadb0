//! Shared request plumbing for the listing and detail endpoints.
//!
//! Every GET goes through [`get_json`], which sends the request, maps
//! non-success statuses through [`check_response`] and decodes the body.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// GET `url` and decode the JSON body as `T`.
pub async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> Result<T, ClientError> {
    tracing::debug!(url, "GET");
    let resp = check_response(http.get(url).send().await?).await?;
    Ok(resp.json::<T>().await?)
}

/// Map a response to an error unless its status is a success.
///
/// - **429** becomes [`ClientError::RateLimited`], reading `Retry-After` as
///   seconds.
/// - Any other non-2xx becomes [`ClientError::Api`] carrying the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ClientError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if status.is_success() {
        return Ok(resp);
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
    })
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, retry_after: Option<&str>, body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(response(200, None, "{}")).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn rate_limit_reads_retry_after() {
        let err = check_response(response(429, Some("15"), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::RateLimited {
                retry_after_secs: 15
            }
        ));
    }

    #[tokio::test]
    async fn rate_limit_without_header_uses_default() {
        let err = check_response(response(429, Some("soon"), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::RateLimited {
                retry_after_secs: DEFAULT_RETRY_AFTER_SECS
            }
        ));
    }

    #[tokio::test]
    async fn not_found_keeps_body() {
        let err = check_response(response(404, None, "Not Found"))
            .await
            .unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
