// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # Atlantic.net
//!
//! A blocking client for the Atlantic.net cloud server API.
//!
//! ## Architecture
//!
//! ```text
//! AtlanticNet::list_instances()
//!     -> call("list-instances")
//!          -> RequestIdSource (timestamp, request id)
//!          -> signer (HMAC-SHA256, base64)
//!          -> Transport (HTTPS GET, query string) -> JSON
//!     <- "list-instancesresponse".instancesSet values
//! ```
//!
//! ## Modules
//!
//! - [`client`]: the [`AtlanticNet`] client and response unwrapping
//! - [`configuration`]: transport settings
//! - [`constants`]: endpoint, protocol version and wire field names
//! - [`errors`]: the [`ClientError`] type
//! - [`models`]: credentials, request parameters and operation options
//! - [`request_id`]: timestamp and request id generation
//! - [`signer`]: request signatures
//! - [`transport`]: the [`Transport`] trait and its HTTPS implementation
//!
//! ## Usage
//!
//! ```no_run
//! use atlantic_net::AtlanticNet;
//!
//! let client = AtlanticNet::new("access key", "private key")?;
//! for instance in client.list_instances()? {
//!     println!("{:?}", instance.get("vm_name"));
//! }
//! # Ok::<(), atlantic_net::ClientError>(())
//! ```
//!
//! ## Security Considerations
//!
//! - The private key is zeroized when the client is dropped
//! - Neither the private key nor signatures are written to logs

pub mod client;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod models;
pub mod request_id;
pub mod signer;
pub mod transport;

pub use client::AtlanticNet;
pub use errors::ClientError;
pub use transport::{HttpTransport, Transport};
