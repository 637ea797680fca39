//! Table definitions and schema constants.

/// Schema version written to, and expected in, the metadata table.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key/value store for schema bookkeeping.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Room catalogue. Room numbers are unique.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id TEXT PRIMARY KEY NOT NULL,
        number INTEGER NOT NULL UNIQUE CHECK (number > 0),
        type TEXT NOT NULL CHECK (type IN ('STANDARD', 'DELUXE', 'SUITE')),
        capacity INTEGER NOT NULL CHECK (capacity > 0),
        price_per_night TEXT NOT NULL,
        status TEXT NOT NULL CHECK (status IN ('ATIVO', 'INATIVO'))
    )";

/// Reservations. Dates are `YYYY-MM-DD` text so that string comparison
/// matches date order; amounts are decimal text.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY NOT NULL,
        room_id TEXT NOT NULL REFERENCES rooms(id),
        guest_name TEXT NOT NULL,
        checkin TEXT NOT NULL,
        checkout TEXT NOT NULL,
        status TEXT NOT NULL,
        total_amount TEXT NOT NULL,
        CHECK (checkout > checkin)
    )";

/// Speeds up the overlap query, which filters by room then date.
pub const CREATE_ROOM_DATES_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_room_dates
    ON reservations(room_id, checkin, checkout)";

/// Speeds up status-filtered listings.
pub const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_status ON reservations(status)";

/// Reads the schema version.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Writes the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
