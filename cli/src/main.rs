// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::{Context, Result};
use atlantic_cli::commands::execute;
use atlantic_cli::configuration::CliOptions;
use atlantic_net::configuration::TransportOptions;
use atlantic_net::{AtlanticNet, HttpTransport};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // get configuration options from arguments and environment variables
    let options = CliOptions::parse();

    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()));
    if options.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            // this needs to be set to remove duplicated information in the log.
            .with_current_span(false)
            .with_ansi(false)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!("[cli] {:?}", &options);

    let transport = HttpTransport::with_options(TransportOptions::from(&options))?;
    let client = AtlanticNet::with_transport(
        options.access_key.as_str(),
        options.private_key.as_str(),
        transport,
    );

    let result = execute(&client, &options.command)
        .with_context(|| format!("{:?} failed", options.command))?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
