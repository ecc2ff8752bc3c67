//! The error module defines the single error type shared by every stage of the block-sorting pipeline.
//!
//! Every operation in this crate is a pure function over a block held in memory, so almost every failure is a
//! contract violation by the caller (an empty block, an index out of range, a short header). They are reported
//! at the point of detection and never retried. The only other source of failure is the I/O of the stream drivers.
//!
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BwtError {
    #[error("Block is empty. A block must hold at least one byte")]
    EmptyBlock,

    #[error("Block of {0} bytes is too large for a 32 bit first index")]
    BlockTooLarge(usize),

    #[error("Rank {rank} is outside the sorted rotations 0..{len}")]
    RankOutOfRange { rank: usize, len: usize },

    #[error("First index {key} is outside the block 0..{len}")]
    KeyOutOfRange { key: u32, len: usize },

    #[error("Stream holds {0} bytes, too short for the 4 byte first index header")]
    TruncatedHeader(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BwtError>;
