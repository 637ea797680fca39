//! Write-locked units of work.

use rusqlite::{Connection, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Runs `work` inside a `BEGIN IMMEDIATE` transaction.
    ///
    /// The write lock is taken before `work` reads anything, so an
    /// overlap check and the insert that follows it cannot interleave
    /// with another writer. The transaction commits if `work` returns
    /// `Ok` and rolls back otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock cannot be acquired within the busy timeout
    /// - `work` fails
    /// - The commit fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotel::database::{Database, DatabaseConfig};
    /// use hotel::operations::ReservationService;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/hotel.db")).unwrap();
    /// let all = db
    ///     .immediate(|conn| ReservationService::new(conn).list())
    ///     .unwrap();
    /// ```
    pub fn immediate<T, F>(&mut self, work: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let value = work(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
