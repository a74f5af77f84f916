// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;
use std::time::Duration;

use atlantic_net::configuration::TransportOptions;
use atlantic_net::constants::API_URI;
use atlantic_net::models::RebootType;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliOptions {
    /// "API Public Key" from the account settings page
    #[arg(long, env("ATLANTIC_NET_ACCESS_KEY"))]
    pub access_key: String,
    /// "API Private Key" from the account settings page
    #[arg(long, env("ATLANTIC_NET_PRIVATE_KEY"), hide_env_values = true)]
    pub private_key: String,
    #[arg(long, default_value = API_URI, env("ATLANTIC_NET_ENDPOINT"))]
    pub endpoint: String,
    #[arg(long, default_value = "30", env("ATLANTIC_NET_TIMEOUT_SECS"))]
    pub timeout_secs: u64,
    #[arg(long, default_value = "false", env("ATLANTIC_NET_LOG_JSON"), action = ArgAction::SetTrue)]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Command,
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for CliOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliOptions")
            .field("access_key", &self.access_key)
            .field("private_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_json", &self.log_json)
            .field("command", &self.command)
            .finish()
    }
}

impl From<&CliOptions> for TransportOptions {
    fn from(options: &CliOptions) -> Self {
        TransportOptions {
            endpoint: options.endpoint.clone(),
            timeout: Duration::from_secs(options.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the currently active cloud servers
    ListInstances,
    /// Restart a cloud server
    RebootInstance {
        instance_id: String,
        #[arg(long, default_value = "soft")]
        reboot_type: RebootType,
    },
    DescribeInstance {
        instance_id: String,
    },
    TerminateInstance {
        instance_id: String,
    },
    /// Launch a cloud server from an image or a clone of an existing server
    RunInstance {
        server_name: String,
        plan_name: String,
        vm_location: String,
        #[arg(long, conflicts_with = "clone_image")]
        image_id: Option<String>,
        #[arg(long)]
        clone_image: Option<String>,
        #[arg(long)]
        enable_backup: Option<bool>,
        #[arg(long)]
        server_quantity: Option<u32>,
        #[arg(long)]
        key_id: Option<String>,
    },
    DescribeImages {
        #[arg(long)]
        image_id: Option<String>,
    },
    DescribePlans {
        #[arg(long)]
        plan_name: Option<String>,
        #[arg(long)]
        platform: Option<String>,
    },
    ListSshKeys,
    /// Send an arbitrary action with KEY=value parameters
    Call {
        action: String,
        #[arg(value_parser = parse_parameter)]
        parameters: Vec<(String, String)>,
    },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParameterError {
    #[error("invalid KEY=value: no `=` found in `{0}`")]
    MissingSeparator(String),
    #[error("invalid KEY=value: empty key in `{0}`")]
    EmptyKey(String),
}

pub fn parse_parameter(input: &str) -> Result<(String, String), ParameterError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParameterError::MissingSeparator(input.to_string()))?;
    if key.is_empty() {
        return Err(ParameterError::EmptyKey(input.to_string()));
    }
    Ok((key.to_string(), value.to_string()))
}
