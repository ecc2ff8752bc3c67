//! The tools module provides the helper pieces around the sorting subsystem.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Byte frequency count, used to rebuild the first column during BWT reversal.
//! - mtf: Move-To-Front transform over the full byte alphabet.
//!
pub mod cli;
pub mod freq_count;
pub mod mtf;
