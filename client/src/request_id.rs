// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Timestamp and request id generation.
//!
//! This is the only non-deterministic input to a signed request, so the
//! client takes it through the [`RequestIdSource`] trait and tests can pin
//! both values.

use uuid::Uuid;

/// Source of the current time in whole seconds since the Unix epoch.
pub trait Clock {
    fn epoch_seconds(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Produces the `(timestamp, request_id)` pair for the next request.
pub trait RequestIdSource {
    fn next(&self) -> (i64, String);
}

/// Random v4 UUID request ids stamped with the time from a [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct RequestIds<C = SystemClock> {
    clock: C,
}

impl RequestIds {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> RequestIds<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> RequestIdSource for RequestIds<C> {
    fn next(&self) -> (i64, String) {
        let timestamp = self.clock.epoch_seconds();
        let request_id = Uuid::new_v4().to_string();
        (timestamp, request_id)
    }
}
