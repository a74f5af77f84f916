// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::ClientError;

/// A single record from an API response, keyed by the vendor's field names.
pub type Record = Map<String, Value>;

/// Query string parameters for one request.
pub type Parameters = BTreeMap<String, ParamValue>;

/// A scalar query string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Account API keys.
///
/// `access_key` is the "API Public Key" and `private_key` the "API Private
/// Key" from the account settings page.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub access_key: String,
    pub private_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            private_key: private_key.into(),
        }
    }
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RebootType {
    /// Graceful shutdown and restart
    #[default]
    Soft,
    /// Power cycle
    Hard,
}

impl RebootType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for RebootType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RebootType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soft" => Ok(Self::Soft),
            "hard" => Ok(Self::Hard),
            other => Err(ClientError::InvalidArgument(format!(
                "unknown reboot type: {other}"
            ))),
        }
    }
}

/// Optional settings for `run-instance`.
///
/// Exactly one of `image_id` or `clone_image` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInstanceOptions {
    /// Operating system image to install
    pub image_id: Option<String>,
    /// Existing server to clone
    pub clone_image: Option<String>,
    pub enable_backup: Option<bool>,
    pub server_quantity: Option<u32>,
    /// SSH key to install on the server
    pub key_id: Option<String>,
}

impl RunInstanceOptions {
    pub fn from_image(image_id: impl Into<String>) -> Self {
        Self {
            image_id: Some(image_id.into()),
            ..Self::default()
        }
    }

    pub fn from_clone(clone_image: impl Into<String>) -> Self {
        Self {
            clone_image: Some(clone_image.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        match (&self.image_id, &self.clone_image) {
            (None, None) => Err(ClientError::MissingArgument(
                "image_id or clone_image are required".to_string(),
            )),
            (Some(_), Some(_)) => Err(ClientError::InvalidArgument(
                "only one of image_id or clone_image may be given".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Wire name of each option alongside its value, if set.
    pub fn wire_parameters(&self) -> [(&'static str, Option<ParamValue>); 5] {
        [
            ("imageid", self.image_id.clone().map(ParamValue::from)),
            ("cloneimage", self.clone_image.clone().map(ParamValue::from)),
            ("enablebackup", self.enable_backup.map(ParamValue::from)),
            ("serverqty", self.server_quantity.map(ParamValue::from)),
            ("key_id", self.key_id.clone().map(ParamValue::from)),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeImagesOptions {
    pub image_id: Option<String>,
}

/// Filters for `describe-plan`: a single plan by name, or all plans for a
/// platform (`linux`, `windows`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribePlansOptions {
    pub plan_name: Option<String>,
    pub platform: Option<String>,
}

impl DescribePlansOptions {
    pub fn wire_parameters(&self) -> [(&'static str, Option<ParamValue>); 2] {
        [
            ("plan_name", self.plan_name.clone().map(ParamValue::from)),
            ("platform", self.platform.clone().map(ParamValue::from)),
        ]
    }
}
