// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Request signing.
//!
//! Every request carries a `Signature` field: the base64-encoded HMAC-SHA256
//! of the request timestamp immediately followed by the request id, keyed by
//! the account's private key.
//!
//! ```text
//! Signature = BASE64(HMAC-SHA256(private_key, "<timestamp><request_id>"))
//! ```

use std::fmt::Display;

use aws_lc_rs::hmac;
use data_encoding::BASE64;

/// Computes the request signature for a timestamp and request id.
///
/// The timestamp is formatted with [`Display`], so integer epoch seconds and
/// pre-formatted strings produce the same signature for the same text.
pub fn signature(timestamp: impl Display, request_id: &str, private_key: &[u8]) -> String {
    let string_to_sign = format!("{timestamp}{request_id}");

    let key = hmac::Key::new(hmac::HMAC_SHA256, private_key);
    let tag = hmac::sign(&key, string_to_sign.as_bytes());

    BASE64.encode(tag.as_ref()).trim_end().to_string()
}
