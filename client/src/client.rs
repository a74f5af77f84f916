// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! The Atlantic.net cloud API client.
//!
//! [`AtlanticNet`] signs each request, hands it to a [`Transport`] and
//! reshapes the response envelope into plain records.
//!
//! # Envelopes
//!
//! Every response is keyed by the action name with `response` appended:
//!
//! ```text
//! {
//!   "Timestamp": 1440018626,
//!   "list-instancesresponse": {
//!     "requestid": "c2a1bc2a-...",
//!     "instancesSet": { "1item": {...}, "item": {...} }
//!   }
//! }
//! ```
//!
//! "Set" structures are mappings with positional labels (`item`, `1item`,
//! ...) instead of arrays. Listing operations return the values and drop the
//! labels, so the order of the returned records is not meaningful.

use serde_json::Value;

use crate::constants::{
    ACTION_DESCRIBE_IMAGE, ACTION_DESCRIBE_INSTANCE, ACTION_DESCRIBE_PLAN, ACTION_LIST_INSTANCES,
    ACTION_LIST_SSH_KEYS, ACTION_REBOOT_INSTANCE, ACTION_RUN_INSTANCE, ACTION_TERMINATE_INSTANCE,
    API_FORMAT, API_VERSION, ERROR_KEY, FIELD_ACCESS_KEY, FIELD_ACTION, FIELD_FORMAT,
    FIELD_REQUEST_ID, FIELD_SIGNATURE, FIELD_TIMESTAMP, FIELD_VERSION, RESPONSE_SUFFIX,
};
use crate::errors::ClientError;
use crate::models::{
    Credentials, DescribeImagesOptions, DescribePlansOptions, ParamValue, Parameters, RebootType,
    Record, RunInstanceOptions,
};
use crate::request_id::{RequestIdSource, RequestIds};
use crate::signer;
use crate::transport::{HttpTransport, Transport};

/// Client for the Atlantic.net cloud API.
///
/// Each method performs exactly one blocking round trip. The client holds no
/// mutable state; it is `Sync` only when its transport and request id source
/// are.
pub struct AtlanticNet {
    credentials: Credentials,
    transport: Box<dyn Transport + Send + Sync>,
    request_ids: Box<dyn RequestIdSource + Send + Sync>,
}

impl AtlanticNet {
    /// Creates a client talking to the public API endpoint over HTTPS.
    pub fn new(
        access_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(access_key, private_key, transport))
    }

    pub fn with_transport<T>(
        access_key: impl Into<String>,
        private_key: impl Into<String>,
        transport: T,
    ) -> Self
    where
        T: Transport + Send + Sync + 'static,
    {
        Self {
            credentials: Credentials::new(access_key, private_key),
            transport: Box::new(transport),
            request_ids: Box::new(RequestIds::new()),
        }
    }

    /// Replaces the timestamp and request id source.
    pub fn with_request_ids<R>(mut self, request_ids: R) -> Self
    where
        R: RequestIdSource + Send + Sync + 'static,
    {
        self.request_ids = Box::new(request_ids);
        self
    }

    pub fn access_key(&self) -> &str {
        &self.credentials.access_key
    }

    /// Signature for a timestamp and request id under this client's private key.
    pub fn signature(&self, timestamp: impl std::fmt::Display, request_id: &str) -> String {
        signer::signature(timestamp, request_id, self.credentials.private_key.as_bytes())
    }

    /// Signs and sends a single action and returns the full response.
    ///
    /// `params` are passed through as given; the protocol fields (version,
    /// access key, format, timestamp, request id, signature, action) are
    /// added on top and win over any caller value with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the response contains an `error`
    /// key, or whatever the transport returns.
    #[tracing::instrument(skip(self, params))]
    pub fn call(&self, action: &str, mut params: Parameters) -> Result<Value, ClientError> {
        let (timestamp, request_id) = self.request_ids.next();
        let signature = self.signature(timestamp, &request_id);

        params.insert(FIELD_VERSION.to_string(), API_VERSION.into());
        params.insert(
            FIELD_ACCESS_KEY.to_string(),
            self.credentials.access_key.as_str().into(),
        );
        params.insert(FIELD_FORMAT.to_string(), API_FORMAT.into());
        params.insert(FIELD_TIMESTAMP.to_string(), timestamp.into());
        params.insert(FIELD_REQUEST_ID.to_string(), request_id.as_str().into());
        params.insert(FIELD_SIGNATURE.to_string(), signature.into());
        params.insert(FIELD_ACTION.to_string(), action.into());

        tracing::debug!("[client] sending {} request {}", action, request_id);

        let response = self.transport.send_request(&params)?;

        if let Some(error) = response.get(ERROR_KEY) {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            tracing::warn!("[client] {} failed: {}", action, message);
            return Err(ClientError::Api {
                access_key: self.credentials.access_key.clone(),
                response,
                message,
            });
        }

        Ok(response)
    }

    /// Retrieves the currently active cloud servers.
    pub fn list_instances(&self) -> Result<Vec<Record>, ClientError> {
        let response = self.call(ACTION_LIST_INSTANCES, Parameters::new())?;
        set_records(envelope(&response, ACTION_LIST_INSTANCES)?.get("instancesSet"))
    }

    /// Restarts a cloud server.
    ///
    /// A soft reboot is a graceful shutdown; a hard reboot is a power cycle.
    pub fn reboot_instance(
        &self,
        instance_id: &str,
        reboot_type: RebootType,
    ) -> Result<Record, ClientError> {
        let params = Parameters::from([
            ("instanceid".to_string(), ParamValue::from(instance_id)),
            ("reboottype".to_string(), ParamValue::from(reboot_type.as_str())),
        ]);
        let response = self.call(ACTION_REBOOT_INSTANCE, params)?;
        let body = envelope(&response, ACTION_REBOOT_INSTANCE)?;

        match body.get("return") {
            Some(value) => as_record(value, "return"),
            None => item(body, "instancesSet"),
        }
    }

    pub fn describe_instance(&self, instance_id: &str) -> Result<Record, ClientError> {
        let params = Parameters::from([("instanceid".to_string(), ParamValue::from(instance_id))]);
        let response = self.call(ACTION_DESCRIBE_INSTANCE, params)?;
        item(
            envelope(&response, ACTION_DESCRIBE_INSTANCE)?,
            "instanceSet",
        )
    }

    pub fn terminate_instance(&self, instance_id: &str) -> Result<Record, ClientError> {
        let params = Parameters::from([("instanceid".to_string(), ParamValue::from(instance_id))]);
        let response = self.call(ACTION_TERMINATE_INSTANCE, params)?;
        item(
            envelope(&response, ACTION_TERMINATE_INSTANCE)?,
            "instancesSet",
        )
    }

    /// Launches a cloud server.
    ///
    /// # Errors
    ///
    /// Returns a caller error without touching the network unless exactly
    /// one of `image_id` or `clone_image` is set in `options`.
    pub fn run_instance(
        &self,
        server_name: &str,
        plan_name: &str,
        vm_location: &str,
        options: &RunInstanceOptions,
    ) -> Result<Record, ClientError> {
        options.validate()?;

        let mut params = Parameters::from([
            ("servername".to_string(), ParamValue::from(server_name)),
            ("planname".to_string(), ParamValue::from(plan_name)),
            ("vm_location".to_string(), ParamValue::from(vm_location)),
        ]);
        for (name, value) in options.wire_parameters() {
            if let Some(value) = value {
                params.insert(name.to_string(), value);
            }
        }

        let response = self.call(ACTION_RUN_INSTANCE, params)?;
        item(envelope(&response, ACTION_RUN_INSTANCE)?, "instancesSet")
    }

    /// Describes every available image, or a single one by id.
    pub fn describe_images(
        &self,
        options: &DescribeImagesOptions,
    ) -> Result<Vec<Record>, ClientError> {
        let mut params = Parameters::new();
        if let Some(image_id) = &options.image_id {
            params.insert("imageid".to_string(), image_id.as_str().into());
        }

        let response = self.call(ACTION_DESCRIBE_IMAGE, params)?;
        set_records(envelope(&response, ACTION_DESCRIBE_IMAGE)?.get("imagesset"))
    }

    pub fn describe_plans(
        &self,
        options: &DescribePlansOptions,
    ) -> Result<Vec<Record>, ClientError> {
        let mut params = Parameters::new();
        for (name, value) in options.wire_parameters() {
            if let Some(value) = value {
                params.insert(name.to_string(), value);
            }
        }

        let response = self.call(ACTION_DESCRIBE_PLAN, params)?;
        match envelope(&response, ACTION_DESCRIBE_PLAN)?.get("plans") {
            Some(plans @ Value::Object(_)) => set_records(Some(plans)),
            _ => Ok(Vec::new()),
        }
    }

    /// Retrieves every SSH key on the account.
    pub fn list_ssh_keys(&self) -> Result<Vec<Record>, ClientError> {
        let response = self.call(ACTION_LIST_SSH_KEYS, Parameters::new())?;
        set_records(envelope(&response, ACTION_LIST_SSH_KEYS)?.get("KeysSet"))
    }
}

impl std::fmt::Debug for AtlanticNet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtlanticNet")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// The `<action>response` body of a response.
fn envelope<'a>(response: &'a Value, action: &str) -> Result<&'a Value, ClientError> {
    let key = format!("{action}{RESPONSE_SUFFIX}");
    response
        .get(&key)
        .ok_or_else(|| ClientError::UnexpectedResponse(format!("missing {key}")))
}

fn as_record(value: &Value, path: &str) -> Result<Record, ClientError> {
    value
        .as_object()
        .cloned()
        .ok_or_else(|| ClientError::UnexpectedResponse(format!("{path} is not an object")))
}

/// The single `item` of a set.
fn item(body: &Value, set: &str) -> Result<Record, ClientError> {
    let value = body
        .get(set)
        .and_then(|set| set.get("item"))
        .ok_or_else(|| ClientError::UnexpectedResponse(format!("missing {set}.item")))?;
    as_record(value, &format!("{set}.item"))
}

/// Values of a positionally keyed set, labels discarded.
fn set_records(set: Option<&Value>) -> Result<Vec<Record>, ClientError> {
    match set {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(items)) => items
            .iter()
            .map(|(label, value)| as_record(value, label))
            .collect(),
        Some(_) => Err(ClientError::UnexpectedResponse(
            "set is not an object".to_string(),
        )),
    }
}
