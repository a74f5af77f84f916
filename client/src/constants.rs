// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::time::Duration;

pub const API_URI: &str = "https://cloudapi.atlantic.net";
/// Protocol version understood by the cloud API
pub const API_VERSION: &str = "2010-12-30";
pub const API_FORMAT: &str = "json";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Wire names of the fields added to every request
pub const FIELD_VERSION: &str = "Version";
pub const FIELD_ACCESS_KEY: &str = "ACSAccessKeyId";
pub const FIELD_FORMAT: &str = "Format";
pub const FIELD_TIMESTAMP: &str = "Timestamp";
pub const FIELD_REQUEST_ID: &str = "Rndguid";
pub const FIELD_SIGNATURE: &str = "Signature";
pub const FIELD_ACTION: &str = "Action";

/// Suffix appended to the action name to form the envelope key
pub const RESPONSE_SUFFIX: &str = "response";
pub const ERROR_KEY: &str = "error";

pub const ACTION_LIST_INSTANCES: &str = "list-instances";
pub const ACTION_REBOOT_INSTANCE: &str = "reboot-instance";
pub const ACTION_DESCRIBE_INSTANCE: &str = "describe-instance";
pub const ACTION_TERMINATE_INSTANCE: &str = "terminate-instance";
pub const ACTION_RUN_INSTANCE: &str = "run-instance";
pub const ACTION_DESCRIBE_IMAGE: &str = "describe-image";
pub const ACTION_DESCRIBE_PLAN: &str = "describe-plan";
pub const ACTION_LIST_SSH_KEYS: &str = "list-sshkeys";
