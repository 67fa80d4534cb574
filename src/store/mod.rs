//! Flat-file storage for the activity dataset.
//!
//! The whole table is read on load and rewritten on every save. A missing or
//! unreadable file is treated as "no data yet".

mod csv_store;

pub use csv_store::{COLUMNS, Store};
