//! The bwt_algorithms module forms the sorting subsystem of the block-sorting transforms.
//!
//! The Burrows-Wheeler Transform prepares data for compression. It reorders a block so that bytes
//! which share a context end up next to each other, producing runs of similar bytes.
//!
//! The transform needs every cyclic rotation of the block in sorted order. circular_suffix provides that order
//! with a three-way radix quicksort that never builds the rotated strings. bwt_sort turns the order into the
//! first index and last column, and rebuilds the block from those two in linear time.
//!
pub mod bwt_sort;
pub mod circular_suffix;
