//! Translation of SQLite failures into library errors.

use rusqlite::types::Type;
use rusqlite::{ffi, ErrorCode};

use crate::error::Error;
use crate::status::TransitionError;

/// Which kind of constraint a statement violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Violation {
    ForeignKey,
    Unique,
    Other,
}

/// Classifies a constraint failure, or returns `None` for any other error.
pub(super) fn violation(err: &rusqlite::Error) -> Option<Violation> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            Some(match e.extended_code {
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Violation::ForeignKey,
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    Violation::Unique
                }
                _ => Violation::Other,
            })
        }
        _ => None,
    }
}

/// Wraps a parse failure of a stored text column.
pub(super) fn conversion_failure<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Converts an error raised while mapping a row.
///
/// A stored status that no longer parses surfaces as
/// [`Error::UnknownStatus`] rather than an opaque storage failure.
pub(super) fn from_row_error(err: rusqlite::Error) -> Error {
    if let rusqlite::Error::FromSqlConversionFailure(_, _, ref inner) = err {
        if let Some(TransitionError::UnknownState { value }) =
            inner.downcast_ref::<TransitionError>()
        {
            return Error::UnknownStatus {
                value: value.clone(),
            };
        }
    }
    Error::Database(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_classifies_unique_and_foreign_key() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE p (id TEXT PRIMARY KEY, n INTEGER UNIQUE);
             CREATE TABLE c (id TEXT PRIMARY KEY, p_id TEXT REFERENCES p(id));
             INSERT INTO p VALUES ('a', 1);",
        )
        .unwrap();

        let dup = conn.execute("INSERT INTO p VALUES ('b', 1)", []).unwrap_err();
        assert_eq!(violation(&dup), Some(Violation::Unique));

        let orphan = conn
            .execute("INSERT INTO c VALUES ('x', 'missing')", [])
            .unwrap_err();
        assert_eq!(violation(&orphan), Some(Violation::ForeignKey));

        assert_eq!(violation(&rusqlite::Error::QueryReturnedNoRows), None);
    }

    #[test]
    fn test_unknown_status_is_recovered_from_row_error() {
        let err = rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            Box::new(TransitionError::UnknownState {
                value: "LOST".into(),
            }),
        );
        assert!(matches!(
            from_row_error(err),
            Error::UnknownStatus { value } if value == "LOST"
        ));
    }
}
