// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use atlantic_net::models::{
    DescribeImagesOptions, DescribePlansOptions, ParamValue, Parameters, Record,
    RunInstanceOptions,
};
use atlantic_net::{AtlanticNet, ClientError};
use serde_json::Value;

use crate::configuration::Command;

/// Runs a single command and returns its result as JSON.
#[tracing::instrument(skip(client))]
pub fn execute(client: &AtlanticNet, command: &Command) -> Result<Value, ClientError> {
    let result = match command {
        Command::ListInstances => records(client.list_instances()?),
        Command::RebootInstance {
            instance_id,
            reboot_type,
        } => Value::Object(client.reboot_instance(instance_id, *reboot_type)?),
        Command::DescribeInstance { instance_id } => {
            Value::Object(client.describe_instance(instance_id)?)
        }
        Command::TerminateInstance { instance_id } => {
            Value::Object(client.terminate_instance(instance_id)?)
        }
        Command::RunInstance {
            server_name,
            plan_name,
            vm_location,
            image_id,
            clone_image,
            enable_backup,
            server_quantity,
            key_id,
        } => {
            let options = RunInstanceOptions {
                image_id: image_id.clone(),
                clone_image: clone_image.clone(),
                enable_backup: *enable_backup,
                server_quantity: *server_quantity,
                key_id: key_id.clone(),
            };
            Value::Object(client.run_instance(server_name, plan_name, vm_location, &options)?)
        }
        Command::DescribeImages { image_id } => {
            let options = DescribeImagesOptions {
                image_id: image_id.clone(),
            };
            records(client.describe_images(&options)?)
        }
        Command::DescribePlans {
            plan_name,
            platform,
        } => {
            let options = DescribePlansOptions {
                plan_name: plan_name.clone(),
                platform: platform.clone(),
            };
            records(client.describe_plans(&options)?)
        }
        Command::ListSshKeys => records(client.list_ssh_keys()?),
        Command::Call { action, parameters } => {
            let parameters: Parameters = parameters
                .iter()
                .map(|(key, value)| (key.clone(), ParamValue::from(value.as_str())))
                .collect();
            client.call(action, parameters)?
        }
    };

    Ok(result)
}

fn records(records: Vec<Record>) -> Value {
    Value::Array(records.into_iter().map(Value::Object).collect())
}
