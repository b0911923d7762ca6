//! sms-segments: SMS encoding classification and segment accounting
//!
//! Classifies message text as GSM-7-compatible or UCS-2, computes how
//! many transport segments the message occupies under each encoding's
//! single- and multi-segment capacities, and reports which characters
//! have configured GSM-7-friendly substitutes.

pub mod alphabet;
pub mod analyze;
pub mod cli;
pub mod input;
pub mod replace;

pub use analyze::{analyze, CharacterSet, MessageInfo};
pub use replace::{ReplacementTable, TableError};
