//! Motel
//!
//! Motel customer records: the static profile a motel keeps for a guest, the
//! values derived from it (age, length of stay), and the description printed
//! for front-desk staff.

pub mod app;
pub mod config;
pub mod customers;
pub mod dates;
pub mod fixtures;
pub mod observability;
pub mod output;
pub mod prelude;
