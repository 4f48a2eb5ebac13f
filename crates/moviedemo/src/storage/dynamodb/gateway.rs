//! DynamoDB gateway implementation.
//!
//! Implements `MovieGateway` from `moviedemo_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, PutRequest,
    ScalarAttributeType, WriteRequest,
};
use aws_sdk_dynamodb::Client;

use moviedemo_core::movie::{Movie, MovieKey, YearRange};
use moviedemo_core::storage::{
    AttributeType, BatchSummary, KeyAttribute, MovieGateway, Result, ScanCursor, ScanPage,
    TableHandle, TableSpec,
};

use super::client::{self, wait_for_table_active};
use super::conversions::{item_to_key, item_to_movie, item_to_summary, movie_to_item};
use super::error::{map_build_error, map_sdk_error};
use super::keys;
use crate::config::AwsConfig;

/// Maximum number of put requests in a single BatchWriteItem call.
const BATCH_WRITE_LIMIT: usize = 25;

/// DynamoDB-based gateway implementation.
pub struct DynamoDbGateway {
    client: Client,
}

impl DynamoDbGateway {
    /// Creates a new gateway with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new gateway using the AWS SDK default credential chain.
    pub async fn from_config(config: &AwsConfig) -> Self {
        Self::new(client::create_client(config).await)
    }
}

#[async_trait]
impl MovieGateway for DynamoDbGateway {
    async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let mut start_table_name = None;

        loop {
            let result = self
                .client
                .list_tables()
                .set_exclusive_start_table_name(start_table_name)
                .send()
                .await
                .map_err(|e| map_sdk_error("ListTables", table_name, e))?;

            if result.table_names().iter().any(|name| name == table_name) {
                return Ok(true);
            }

            match result.last_evaluated_table_name {
                Some(next) => start_table_name = Some(next),
                None => return Ok(false),
            }
        }
    }

    async fn create_table(&self, spec: &TableSpec) -> Result<TableHandle> {
        let key_schema = vec![
            key_schema_element(&spec.partition_key, KeyType::Hash)?,
            key_schema_element(&spec.sort_key, KeyType::Range)?,
        ];
        let attribute_definitions = vec![
            attribute_definition(&spec.partition_key)?,
            attribute_definition(&spec.sort_key)?,
        ];
        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(spec.throughput.read_capacity_units)
            .write_capacity_units(spec.throughput.write_capacity_units)
            .build()
            .map_err(map_build_error)?;

        let result = self
            .client
            .create_table()
            .table_name(&spec.table_name)
            .set_key_schema(Some(key_schema))
            .set_attribute_definitions(Some(attribute_definitions))
            .provisioned_throughput(throughput)
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateTable", &spec.table_name, e))?;

        let table_arn = result
            .table_description()
            .and_then(|d| d.table_arn())
            .map(str::to_string);

        wait_for_table_active(&self.client, &spec.table_name).await?;

        Ok(TableHandle {
            table_name: spec.table_name.clone(),
            table_arn,
        })
    }

    async fn batch_write(&self, table_name: &str, movies: &[Movie]) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for chunk in movies.chunks(BATCH_WRITE_LIMIT) {
            let write_requests = chunk
                .iter()
                .map(|movie| {
                    PutRequest::builder()
                        .set_item(Some(movie_to_item(movie)))
                        .build()
                        .map(|put| WriteRequest::builder().put_request(put).build())
                        .map_err(map_build_error)
                })
                .collect::<Result<Vec<_>>>()?;

            let result = self
                .client
                .batch_write_item()
                .request_items(table_name, write_requests)
                .send()
                .await
                .map_err(|e| map_sdk_error("BatchWriteItem", table_name, e))?;

            let unprocessed = result
                .unprocessed_items()
                .and_then(|items| items.get(table_name))
                .map(Vec::len)
                .unwrap_or(0);

            if unprocessed > 0 {
                tracing::warn!(
                    table = table_name,
                    unprocessed,
                    "Batch write left unprocessed items"
                );
            }

            summary.submitted += chunk.len();
            summary.unprocessed += unprocessed;
        }

        tracing::info!(
            table = table_name,
            submitted = summary.submitted,
            unprocessed = summary.unprocessed,
            "Batch write complete"
        );

        Ok(summary)
    }

    async fn put_movie(&self, table_name: &str, movie: &Movie) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(movie_to_item(movie)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", table_name, e))?;

        Ok(())
    }

    async fn get_movie(&self, table_name: &str, key: &MovieKey) -> Result<Option<Movie>> {
        let result = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(keys::movie_key(key)))
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", table_name, e))?;

        match result.item {
            Some(item) => Ok(Some(item_to_movie(&item)?)),
            None => Ok(None),
        }
    }

    async fn query_by_year(&self, table_name: &str, year: i32) -> Result<Vec<Movie>> {
        let mut movies = Vec::new();
        let mut start_key = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(table_name)
                .key_condition_expression(keys::QUERY_BY_YEAR)
                .expression_attribute_names(keys::YEAR_PLACEHOLDER, keys::YEAR)
                .expression_attribute_values(":year", keys::number(year))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| map_sdk_error("Query", table_name, e))?;

            for item in result.items.unwrap_or_default() {
                movies.push(item_to_movie(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(movies)
    }

    async fn scan_page(
        &self,
        table_name: &str,
        range: YearRange,
        start: Option<ScanCursor>,
    ) -> Result<ScanPage> {
        let result = self
            .client
            .scan()
            .table_name(table_name)
            .filter_expression(keys::SCAN_YEAR_FILTER)
            .projection_expression(keys::SCAN_PROJECTION)
            .expression_attribute_names(keys::YEAR_PLACEHOLDER, keys::YEAR)
            .expression_attribute_values(":first", keys::number(range.first))
            .expression_attribute_values(":second", keys::number(range.second))
            .set_exclusive_start_key(start.map(|cursor| keys::movie_key(cursor.key())))
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", table_name, e))?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_summary)
            .collect::<Result<Vec<_>>>()?;

        let cursor = match result.last_evaluated_key {
            Some(key) if !key.is_empty() => Some(ScanCursor::new(item_to_key(&key)?)),
            _ => None,
        };

        Ok(ScanPage { items, cursor })
    }
}

fn key_schema_element(key: &KeyAttribute, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(&key.name)
        .key_type(key_type)
        .build()
        .map_err(map_build_error)
}

fn attribute_definition(key: &KeyAttribute) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(&key.name)
        .attribute_type(to_scalar_type(key.attribute_type))
        .build()
        .map_err(map_build_error)
}

fn to_scalar_type(attr_type: AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::Number => ScalarAttributeType::N,
        AttributeType::String => ScalarAttributeType::S,
    }
}
