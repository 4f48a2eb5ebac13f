//! Storage backends behind the `MovieGateway` trait.

pub mod dynamodb;
pub mod inmemory;

use std::sync::Arc;

use moviedemo_core::storage::MovieGateway;

pub use dynamodb::DynamoDbGateway;
pub use inmemory::InMemoryGateway;

use crate::config::{Config, StorageBackend};

/// Builds the gateway selected by the configuration.
pub async fn create_gateway(config: &Config) -> Arc<dyn MovieGateway> {
    match config.storage {
        StorageBackend::Dynamodb => Arc::new(DynamoDbGateway::from_config(&config.aws).await),
        StorageBackend::Memory => Arc::new(InMemoryGateway::new()),
    }
}
