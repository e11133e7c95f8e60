//! Domain primitives shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! shared id/date types, and the small amount of input parsing the handlers
//! need before a query can be issued.

pub mod dates;
pub mod error;
pub mod types;
pub mod validation;
