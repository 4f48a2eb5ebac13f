mod error;
mod provision;
mod traits;
mod types;

pub use error::{GatewayError, Result};
pub use provision::provision_table;
pub use traits::MovieGateway;
pub use types::{
    movie_table_spec, AttributeType, BatchSummary, KeyAttribute, ScanCursor, ScanPage,
    TableHandle, TableProvision, TableSpec, Throughput, DEFAULT_TABLE_NAME, PARTITION_KEY,
    SORT_KEY,
};
