//! Error classification and GraphQL surfacing.
//!
//! Service-layer [`CoreError`]s become GraphQL errors carrying a stable
//! machine-readable `extensions.code`, so clients distinguish failure kinds
//! without parsing messages. Database errors are classified into the domain
//! taxonomy at the service boundary.

use async_graphql::ErrorExtensions;
use hallyu_core::error::CoreError;

/// Stable machine-readable code for each error variant.
pub fn error_code(err: &CoreError) -> &'static str {
    match err {
        CoreError::NotFound { .. } => "NOT_FOUND",
        CoreError::Validation(_) => "VALIDATION_ERROR",
        CoreError::Conflict(_) => "CONFLICT",
        CoreError::Integrity(_) => "INTEGRITY_ERROR",
        CoreError::Unauthorized(_) => "UNAUTHORIZED",
        CoreError::Internal(_) => "INTERNAL_ERROR",
    }
}

/// Convert a [`CoreError`] into a GraphQL error with `extensions.code`.
///
/// Internal errors are logged and their detail replaced with a generic
/// message so storage internals never leak to clients.
pub fn graphql_error(err: CoreError) -> async_graphql::Error {
    let code = error_code(&err);
    let message = match &err {
        CoreError::Internal(detail) => {
            tracing::error!(error = %detail, "Internal error");
            "An internal error occurred".to_string()
        }
        other => other.to_string(),
    };
    async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
}

/// Classify a sqlx error into the domain taxonomy.
///
/// - Unique violations (23505) -> `Conflict`, naming the constraint.
/// - Foreign-key violations (23503) -> `Integrity`.
/// - Check violations (23514) -> `Validation`, naming the constraint.
/// - Everything else -> `Internal`, with the detail preserved for logging.
pub fn classify_db_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some("23505") => {
                return CoreError::Conflict(format!(
                    "duplicate value violates unique constraint {constraint}"
                ));
            }
            Some("23503") => {
                return CoreError::Integrity(format!(
                    "referenced entity does not exist ({constraint})"
                ));
            }
            Some("23514") => {
                return CoreError::Validation(format!("check constraint {constraint} violated"));
            }
            _ => {}
        }
    }
    CoreError::Internal(err.to_string())
}
