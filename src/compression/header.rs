use crate::error::{BwtError, Result};

/// Bytes taken by the big-endian first index in front of the last column.
pub const HEADER_LEN: usize = 4;

/// Frame a transformed block: the key as a 32 bit big-endian integer, then the last column.
pub fn write_bwt_stream(key: u32, bwt: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + bwt.len());
    out.extend_from_slice(&key.to_be_bytes());
    out.extend_from_slice(bwt);
    out
}

/// Split a framed block into its key and last column. The column length is whatever follows the header.
pub fn read_bwt_stream(stream: &[u8]) -> Result<(u32, &[u8])> {
    if stream.len() < HEADER_LEN {
        return Err(BwtError::TruncatedHeader(stream.len()));
    }
    let (head, bwt) = stream.split_at(HEADER_LEN);
    let key = u32::from_be_bytes([head[0], head[1], head[2], head[3]]);
    Ok((key, bwt))
}
