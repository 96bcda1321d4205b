//! Response status handling for the completion endpoint.

use crate::error::ChatError;

/// Return the response unchanged on success, otherwise [`ChatError::Api`]
/// carrying the status and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ChatError> {
    if !resp.status().is_success() {
        return Err(ChatError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(503, "model is loading");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ChatError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "model is loading");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }
}
