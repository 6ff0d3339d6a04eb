//! Submitted records and the structural gate in front of the pipeline.
//!
//! The archive layer hands over an untyped JSON value. [`validate`] decides
//! whether it is a dataset at all, and [`decode`] turns it into typed
//! [`Record`]s so nothing downstream ever indexes into raw JSON.

pub mod record;
pub mod validator;


pub use record::{Record, RecordContext};
pub use validator::{decode, validate};
