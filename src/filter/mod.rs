//! Level and service filtering
//!
//! A record is kept when it satisfies every filter the user supplied.
//!
//! ```text
//! --level warn               WARN records from any service
//! --service api              records of any level from "api" (exact, case-sensitive)
//! --level error --service db ERROR records from "db" only
//! ```

pub mod error;
pub mod matcher;

pub use error::FilterError;
pub use matcher::{LogFilter, matches_filters};
