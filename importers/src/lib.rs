//! Importers Crate
//!
//! Parsing implementations that turn uploaded user data into normalized
//! contact records ready for storage. Parsing is pure: no I/O and no
//! storage access happens here, the API crate drives submission.
//!
//! # Available importers
//!
//! - `csv_contacts`: Apple-style contact CSV exports (iPhone "Export to
//!   CSV" apps and similar header layouts)

pub mod csv_contacts;

pub use csv_contacts::{parse_contacts, preview, PREVIEW_LEN};
