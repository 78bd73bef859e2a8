use sea_orm::{DbErr, SqlErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub mod postgres;

/// Maps a write error, turning unique-constraint violations into
/// [`CoreError::DuplicateEntry`] so callers can treat a lost create race as
/// idempotent success.
pub(crate) fn map_write_err(context: &str, e: DbErr) -> CoreError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return CoreError::DuplicateEntry;
    }
    error!("{context}: {e}");
    CoreError::InternalServerError
}

pub(crate) fn map_read_err(context: &str, e: DbErr) -> CoreError {
    error!("{context}: {e}");
    CoreError::InternalServerError
}
