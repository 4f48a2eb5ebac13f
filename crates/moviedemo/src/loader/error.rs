//! Sample data loader errors.

use moviedemo_core::catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while fetching the sample movies.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Download failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Archive does not contain a JSON document")]
    MissingDocument,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_display() {
        assert_eq!(
            LoaderError::MissingDocument.to_string(),
            "Archive does not contain a JSON document"
        );
    }

    #[test]
    fn test_catalog_error_is_transparent() {
        let error = LoaderError::from(CatalogError::NotAnArray);

        assert_eq!(
            error.to_string(),
            "Catalog document must be a JSON array of movies"
        );
    }
}
