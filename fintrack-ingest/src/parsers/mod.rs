//! Bank-specific notification parsers.
//!
//! Each module exposes `NAME`, `SENDER`, `transaction_kind` and `parse`; the
//! registry in [`crate::registry`] ties them together.

pub mod bac;
pub mod bcr;
pub mod davibank;
pub mod scotiabank;
