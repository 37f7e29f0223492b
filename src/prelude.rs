//! Derive macros shared across the crate.
//!
//! `Display` backs `ParseError`; the rest dress up identifier newtypes.

pub use derive_more::{Deref, Display, From, Into};
