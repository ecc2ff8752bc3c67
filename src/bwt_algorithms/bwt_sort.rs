use super::circular_suffix::CircularSuffixArray;
use crate::error::{BwtError, Result};
use crate::tools::freq_count::freqs;
use log::{debug, info, warn};

/// Burrows-Wheeler-Transform of a single block, using the circular suffix array to order the rotations.
/// This returns a u32 Key (the rank of the unrotated block) and a u8 vec of the last column.
pub fn bwt_encode(block: &[u8]) -> Result<(u32, Vec<u8>)> {
    if block.is_empty() {
        return Err(BwtError::EmptyBlock);
    }
    check_len(block.len())?;
    if block.len() > 1 && block.iter().all(|&b| b == block[0]) {
        warn!("Block is {} copies of one byte. Every rotation ties.", block.len());
    }

    let csa = CircularSuffixArray::new(block);
    info!("Encoding BWT of {} bytes.", block.len());

    // Get key and BWT output. The byte before rotation 0 wraps to the end of the block.
    let end = block.len();
    let mut key = 0_u32;
    let mut bwt = Vec::with_capacity(end);
    for (rank, &start) in csa.as_slice().iter().enumerate() {
        if start == 0 {
            key = rank as u32;
            bwt.push(block[end - 1]);
        } else {
            bwt.push(block[start - 1]);
        }
    }
    debug!("Key is {}.", key);
    Ok((key, bwt))
}

/// Decode a Burrows-Wheeler-Transform in linear time from the key and the last column alone.
pub fn bwt_decode(key: u32, bwt_in: &[u8]) -> Result<Vec<u8>> {
    // Calculate end once.
    let end = bwt_in.len();
    if end == 0 {
        return Err(BwtError::EmptyBlock);
    }
    check_len(end)?;
    if key as usize >= end {
        return Err(BwtError::KeyOutOfRange { key, len: end });
    }
    info!("Decoding BWT of {} bytes with key {}.", end, key);

    // Convert frequency count to a cumulative sum of frequencies. freq[s] is then the first row of the
    // sorted (first) column that holds s.
    let freq_in = freqs(bwt_in);
    let mut freq = [0_usize; 256];
    for i in 0..255 {
        freq[i + 1] = freq[i] + freq_in[i] as usize;
    }

    // Build the transformation vec. The k-th s in the last column is the k-th s in the sorted column, so
    // next[row] is where the byte at that row of the sorted column sits in the last column.
    let mut next = vec![0_usize; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        next[freq[s as usize]] = i;
        freq[s as usize] += 1;
    }

    // Follow the chain from the key. The sorted column byte at row idx equals bwt_in[next[idx]].
    let mut out = Vec::with_capacity(end);
    let mut idx = key as usize;
    for _ in 0..end {
        idx = next[idx];
        out.push(bwt_in[idx]);
    }
    Ok(out)
}

/// Blocks on both sides of the transform must be addressable by the 32 bit key.
fn check_len(len: usize) -> Result<()> {
    if u32::try_from(len).is_err() {
        return Err(BwtError::BlockTooLarge(len));
    }
    Ok(())
}
