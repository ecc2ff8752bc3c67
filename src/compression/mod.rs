//! The compression module drives whole blocks through the block-sorting transforms.
//!
//! Encoding a block happens in the following steps:
//! - Circular suffix sort: order every cyclic rotation of the block.
//! - Burrows Wheeler Transform: keep the last column of the sorted rotations plus the rank of the unrotated block.
//! - Header: write that rank as a 4 byte big-endian integer in front of the last column.
//! - Move To Front transform: replace each byte of the framed stream with its rank in a recency list.
//!
//! Decoding is the exact inverse, in reverse order.
//! - MTF transform: convert the ranks back to the bytes they stand for.
//! - Header: split off the first index.
//! - BWT reversal: restore the original block from the first index and the last column in linear time.
//!
//! Each step can also be run on its own (see `tools::cli::Tool`). There is no entropy coding stage.
//!

pub mod compress;
pub mod decompress;
pub mod header;
