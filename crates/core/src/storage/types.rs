use crate::movie::{MovieKey, MovieSummary};

/// Table name used when the user does not type one.
pub const DEFAULT_TABLE_NAME: &str = "Movies";

/// Attribute name of the partition key.
pub const PARTITION_KEY: &str = "year";

/// Attribute name of the sort key.
pub const SORT_KEY: &str = "title";

/// Table schema: name, key schema and provisioned throughput.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub throughput: Throughput,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// Scalar attribute types usable in a key schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Number,
    String,
}

/// Provisioned read and write capacity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl Default for Throughput {
    fn default() -> Self {
        Self {
            read_capacity_units: 100,
            write_capacity_units: 100,
        }
    }
}

/// Returns the movie table schema: `year` (number) partition key and
/// `title` (string) sort key.
pub fn movie_table_spec(table_name: &str) -> TableSpec {
    TableSpec {
        table_name: table_name.to_string(),
        partition_key: KeyAttribute {
            name: PARTITION_KEY.to_string(),
            attribute_type: AttributeType::Number,
        },
        sort_key: KeyAttribute {
            name: SORT_KEY.to_string(),
            attribute_type: AttributeType::String,
        },
        throughput: Throughput::default(),
    }
}

/// A table that was created and is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHandle {
    pub table_name: String,
    pub table_arn: Option<String>,
}

/// Outcome of [`provision_table`](super::provision_table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableProvision {
    Created(TableHandle),
    AlreadyExists { table_name: String },
}

/// Outcome of a batch write.
///
/// Items the service reports as unprocessed are counted, not resubmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub submitted: usize,
    pub unprocessed: usize,
}

impl BatchSummary {
    /// Number of items the service accepted.
    pub fn written(&self) -> usize {
        self.submitted.saturating_sub(self.unprocessed)
    }
}

/// Continuation token handed back by a bounded scan.
///
/// The table's primary key is the last evaluated key, so the cursor wraps
/// the key of the last item the service examined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCursor(MovieKey);

impl ScanCursor {
    pub fn new(key: MovieKey) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &MovieKey {
        &self.0
    }

    pub fn into_key(self) -> MovieKey {
        self.0
    }
}

/// One page of scan results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPage {
    pub items: Vec<MovieSummary>,
    /// Absent on the last page.
    pub cursor: Option<ScanCursor>,
}
