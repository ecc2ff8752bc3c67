//! Block-sorting transforms in Rust.
//!
//! Provides the reversible front end of a bzip2 style compressor: a circular suffix sort,
//! the Burrows-Wheeler transform and its linear time inverse, and move-to-front coding.
//! The transforms expose local redundancy but do no entropy coding themselves.
//!
//! All data is treated as opaque bytes, one block held in memory at a time.
//!
//! Basic usage to transform a file is as follows:
//!
//! `$> burrows full -z < test.txt > test.bwm`
//!
//! and to restore it:
//!
//! `$> burrows full -d < test.bwm > test.txt`
//!
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;

pub use error::{BwtError, Result};
