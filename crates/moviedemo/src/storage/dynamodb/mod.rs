//! DynamoDB storage backend.

mod client;
mod conversions;
mod error;
mod gateway;
mod keys;

pub use gateway::DynamoDbGateway;
