// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Command line front end for the [`atlantic_net`] client.
//!
//! - [`configuration`]: CLI argument parsing with clap
//! - [`commands`]: dispatch of parsed commands to the client

pub mod commands;
pub mod configuration;
