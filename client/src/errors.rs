// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use serde_json::{Map, Value};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ClientError {
    #[error(
        "The Atlantic.net api endpoint was unexpectedly unavailable. The HTTP Status code was {status}"
    )]
    Unavailable { status: u16 },
    #[error("{message}")]
    Api {
        access_key: String,
        response: Value,
        message: String,
    },
    #[error("Missing argument: {0}")]
    MissingArgument(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("error sending request: {0}")]
    RequestError(String),
    #[error("unable to decode response: {0}")]
    DecodeError(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl ClientError {
    /// The response that accompanied the failure.
    ///
    /// Vendor errors carry the full parsed envelope, status failures carry an
    /// empty mapping, and everything else has no response at all.
    pub fn response(&self) -> Option<Value> {
        match self {
            Self::Api { response, .. } => Some(response.clone()),
            Self::Unavailable { .. } => Some(Value::Object(Map::new())),
            _ => None,
        }
    }

    /// Access key of the client that received a vendor error.
    pub fn access_key(&self) -> Option<&str> {
        match self {
            Self::Api { access_key, .. } => Some(access_key),
            _ => None,
        }
    }

    /// Whether the error was caused by the caller's arguments rather than the
    /// network or the API.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::MissingArgument(_) | Self::InvalidArgument(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(source: reqwest::Error) -> Self {
        tracing::error!("{:?}", source);
        ClientError::RequestError(source.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(source: serde_json::Error) -> Self {
        tracing::error!("{:?}", source);
        ClientError::DecodeError(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unavailable_message_includes_status() {
        let err = ClientError::Unavailable { status: 404 };
        assert_eq!(
            err.to_string(),
            "The Atlantic.net api endpoint was unexpectedly unavailable. The HTTP Status code was 404"
        );
        assert_eq!(err.response(), Some(json!({})));
        assert_eq!(err.access_key(), None);
    }

    #[test]
    fn test_api_error_carries_response_and_client() {
        let response = json!({"error": {"message": "Some error occurred"}});
        let err = ClientError::Api {
            access_key: "public_key".to_string(),
            response: response.clone(),
            message: "Some error occurred".to_string(),
        };
        assert_eq!(err.to_string(), "Some error occurred");
        assert_eq!(err.response(), Some(response));
        assert_eq!(err.access_key(), Some("public_key"));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn test_caller_errors() {
        assert!(ClientError::MissingArgument("image_id".to_string()).is_caller_error());
        assert!(ClientError::InvalidArgument("image_id".to_string()).is_caller_error());
        assert!(!ClientError::DecodeError("eof".to_string()).is_caller_error());
        assert_eq!(ClientError::MissingArgument("x".to_string()).response(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let source = serde_json::from_str::<Value>("{invalid json").unwrap_err();
        let err = ClientError::from(source);
        assert!(matches!(err, ClientError::DecodeError(_)));
    }
}
