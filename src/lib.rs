//! Exploratory statistics over tabular CSV data.
//!
//! The local core is pure and synchronous: load a [`table::Table`]
//! from CSV, extract numeric series, then bin, summarize and
//! correlate. The one asynchronous boundary is
//! [`remote::compute_regression`], which delegates model fitting to an
//! external compute process through a signed message/result exchange.

pub mod correlate;
pub mod errors;
pub mod histogram;
pub mod logging;
pub mod remote;
pub mod series;
pub mod state;
pub mod summary;
pub mod table;
pub mod wallet;

pub use errors::{Error, Result};
pub use table::Table;
