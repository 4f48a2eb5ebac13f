//! Session state.

use crate::error::{DemoError, Result};

/// State carried between menu commands.
///
/// The only thing remembered is the table chosen with option 1.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    table_name: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Makes `table_name` the target of every following command.
    pub fn select_table(&mut self, table_name: impl Into<String>) {
        self.table_name = Some(table_name.into());
    }

    /// Returns the selected table or fails with [`DemoError::NoTableSelected`].
    pub fn require_table(&self) -> Result<&str> {
        self.table_name().ok_or(DemoError::NoTableSelected)
    }
}
