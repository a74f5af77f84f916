// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Network transport for signed API requests.
//!
//! Every request is a `GET` against a single endpoint with all parameters,
//! signature included, in the query string. The response body is JSON.
//!
//! The [`Transport`] trait is the seam between request assembly and the
//! network. [`HttpTransport`] is the real implementation; tests substitute
//! their own.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::configuration::TransportOptions;
use crate::errors::ClientError;
use crate::models::Parameters;

pub trait Transport {
    /// Sends one request and returns the parsed JSON body.
    fn send_request(&self, parameters: &Parameters) -> Result<Value, ClientError>;
}

/// Blocking HTTPS transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ClientError> {
        Self::with_options(TransportOptions::default())
    }

    pub fn with_options(options: TransportOptions) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(options.timeout)
            // a redirect is a non-200 answer, never re-send the signed query
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ClientError::ConfigError(e.to_string()))?;

        Ok(Self {
            endpoint: options.endpoint,
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, parameters))]
    fn send_request(&self, parameters: &Parameters) -> Result<Value, ClientError> {
        let response = self.http.get(&self.endpoint).query(parameters).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("[transport] endpoint returned HTTP {}", status.as_u16());
            return Err(ClientError::Unavailable {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let parsed: Value = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}
