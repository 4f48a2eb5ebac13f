//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `GatewayError` from `moviedemo_core::storage`.
//! Every mapped error is logged here, with the operation and table that
//! produced it, before being handed back to the caller.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use moviedemo_core::storage::GatewayError;

/// Map an SDK error to GatewayError and log it.
///
/// Service responses keep their error code and message. Failures that never
/// produced a service response (dispatch, timeout, unreadable response) are
/// reported as connection failures.
pub fn map_sdk_error<E, R>(
    operation: &'static str,
    table_name: &str,
    err: SdkError<E, R>,
) -> GatewayError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let error = match err.as_service_error() {
        Some(service_err) => GatewayError::Service {
            code: service_err.code().unwrap_or("Unknown").to_string(),
            message: service_err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| service_err.to_string()),
        },
        None => GatewayError::ConnectionFailed(DisplayErrorContext(&err).to_string()),
    };

    match &error {
        GatewayError::Service { code, message } => tracing::error!(
            operation,
            table = table_name,
            code = %code,
            message = %message,
            "DynamoDB request failed"
        ),
        other => tracing::error!(
            operation,
            table = table_name,
            error = %other,
            "DynamoDB request failed"
        ),
    }

    error
}

/// Map a request builder error to GatewayError.
pub fn map_build_error(err: BuildError) -> GatewayError {
    GatewayError::InvalidRequest(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::ErrorMetadata;
    use aws_sdk_dynamodb::operation::get_item::GetItemError;
    use aws_sdk_dynamodb::operation::scan::ScanError;

    #[test]
    fn test_service_error_keeps_code_and_message() {
        let err: SdkError<GetItemError, ()> = SdkError::service_error(
            GetItemError::generic(
                ErrorMetadata::builder()
                    .code("ResourceNotFoundException")
                    .message("Requested resource not found")
                    .build(),
            ),
            (),
        );

        let mapped = map_sdk_error("GetItem", "Movies", err);

        assert_eq!(
            mapped,
            GatewayError::Service {
                code: "ResourceNotFoundException".to_string(),
                message: "Requested resource not found".to_string(),
            }
        );
    }

    #[test]
    fn test_service_error_without_code() {
        let err: SdkError<ScanError, ()> =
            SdkError::service_error(ScanError::generic(ErrorMetadata::builder().build()), ());

        let mapped = map_sdk_error("Scan", "Movies", err);

        assert!(matches!(mapped, GatewayError::Service { code, .. } if code == "Unknown"));
    }

    #[test]
    fn test_timeout_maps_to_connection_failed() {
        let err: SdkError<ScanError, ()> = SdkError::timeout_error("operation timed out");

        let mapped = map_sdk_error("Scan", "Movies", err);

        assert!(matches!(mapped, GatewayError::ConnectionFailed(_)));
    }
}
