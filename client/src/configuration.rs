// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::time::Duration;

use crate::constants::{API_URI, REQUEST_TIMEOUT};

/// Settings for [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        TransportOptions {
            endpoint: API_URI.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}
