//! AWS SDK client setup and table status polling.

use std::time::Duration;

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::TableStatus as SdkTableStatus;
use aws_sdk_dynamodb::Client;
use moviedemo_core::storage::{GatewayError, Result};

use super::error::map_sdk_error;
use crate::config::AwsConfig;

const ACTIVATION_ATTEMPTS: u32 = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Table lifecycle states the gateway cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Fetches the current table status, returns None if the table doesn't exist.
pub async fn get_table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let status = match response.table().and_then(|t| t.table_status()) {
                Some(SdkTableStatus::Creating) => TableStatus::Creating,
                Some(SdkTableStatus::Updating) => TableStatus::Updating,
                Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };
            Ok(Some(status))
        }
        Err(err) => match err.as_service_error() {
            Some(DescribeTableError::ResourceNotFoundException(_)) => Ok(None),
            _ => Err(map_sdk_error("DescribeTable", table_name, err)),
        },
    }
}

/// Polls the table until the service reports it active.
pub async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for attempt in 1..=ACTIVATION_ATTEMPTS {
        if get_table_status(client, table_name).await? == Some(TableStatus::Active) {
            return Ok(());
        }
        tracing::debug!(table = table_name, attempt, "Waiting for table to become active");
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(GatewayError::TableActivationTimeout(table_name.to_string()))
}
