use std::cmp::Ordering;

use log::{debug, log_enabled, trace, Level};

use crate::error::{BwtError, Result};

/// Ranges at or below this size are finished with an insertion sort.
const INSERTION_CUTOFF: usize = 15;
/// Longest block that is dumped as a rotation table at trace level.
const TABLE_LIMIT: usize = 64;

/// Sorted order of all cyclic rotations of a block. Rank r holds the start offset of the r-th smallest rotation.
/// Equal rotations (only found in periodic blocks) are ranked by start offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    index: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the rotations of block with a three-way radix quicksort.
    pub fn new(block: &[u8]) -> Self {
        let index = radix_sort(block);
        debug!("Sorted {} rotations.", index.len());
        if block.len() <= TABLE_LIMIT && log_enabled!(Level::Trace) {
            trace!("\n{}", table(&index, block));
        }
        Self { index }
    }

    /// Length of the block (and of the sorted index)
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Start offset of the rotation at the given rank.
    pub fn index(&self, rank: usize) -> Result<usize> {
        self.index
            .get(rank)
            .copied()
            .ok_or(BwtError::RankOutOfRange {
                rank,
                len: self.index.len(),
            })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.index
    }

    /// Side by side listing of the original and the sorted rotations of block.
    pub fn table(&self, block: &[u8]) -> String {
        table(&self.index, block)
    }
}

/// Compare the rotations of block starting at a and b, one full cycle long.
pub fn block_compare(a: usize, b: usize, block: &[u8]) -> Ordering {
    block_compare_from(a, b, 0, block)
}

/// Compare the rotations starting at a and b, skipping the first depth bytes that are already known to match.
pub fn block_compare_from(a: usize, b: usize, depth: usize, block: &[u8]) -> Ordering {
    rotation(block, a)
        .skip(depth)
        .cmp(rotation(block, b).skip(depth))
}

/// Reference sort: the standard library sort driven by block_compare. Slow on repetitive data, but obviously right.
pub fn simple_sort(block: &[u8]) -> Vec<usize> {
    let mut index = (0..block.len()).collect::<Vec<usize>>();
    index.sort_unstable_by(|&a, &b| block_compare(a, b, block).then(a.cmp(&b)));
    index
}

/// Three-way radix quicksort over the cyclic rotations of block.
///
/// Each range is split on the byte at `depth` into less / equal / greater parts. The less and greater parts are
/// sorted again at the same depth, the equal part one byte deeper. A range that reaches a full cycle holds
/// identical rotations and is put in offset order. For a block made of repeats of a shorter pattern, agreeing on
/// one period is already a full match, so ranges stop there instead of walking the whole block.
pub fn radix_sort(block: &[u8]) -> Vec<usize> {
    let end = block.len();
    let mut index = (0..end).collect::<Vec<usize>>();
    if end < 2 {
        return index;
    }

    let period = smallest_period(block);
    if period < end {
        debug!("Block repeats with period {}.", period);
    }

    // Pending ranges as (lo, hi, depth), hi exclusive. Using a vec avoids deep recursion on repetitive blocks.
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(64);
    stack.push((0, end, 0));

    while let Some((lo, hi, depth)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }
        if depth >= period {
            index[lo..hi].sort_unstable();
            continue;
        }
        if hi - lo <= INSERTION_CUTOFF {
            insertion_sort(&mut index[lo..hi], depth, period, block);
            continue;
        }

        let pivot = byte_at(block, index[lo], depth);
        // [lo, lt) < pivot, [lt, un) == pivot, [un, gt) unseen, [gt, hi) > pivot
        let mut lt = lo;
        let mut un = lo + 1;
        let mut gt = hi;
        while un < gt {
            match byte_at(block, index[un], depth).cmp(&pivot) {
                Ordering::Less => {
                    index.swap(lt, un);
                    lt += 1;
                    un += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    index.swap(un, gt);
                }
                Ordering::Equal => un += 1,
            }
        }

        stack.push((lo, lt, depth));
        stack.push((gt, hi, depth));
        stack.push((lt, gt, depth + 1));
    }
    index
}

/// Length of the shortest pattern that block is whole repeats of (the block length if there is none).
/// Uses the KMP failure function, so it is linear in the block length.
fn smallest_period(block: &[u8]) -> usize {
    let end = block.len();
    if end == 0 {
        return 0;
    }
    // fail[i] is the longest proper border of block[..i]
    let mut fail = vec![0_usize; end + 1];
    let mut k = 0;
    for i in 1..end {
        while k > 0 && block[i] != block[k] {
            k = fail[k];
        }
        if block[i] == block[k] {
            k += 1;
        }
        fail[i + 1] = k;
    }
    let period = end - fail[end];
    if end % period == 0 {
        period
    } else {
        end
    }
}

/// Insertion sort for small ranges whose rotations already agree on their first depth bytes.
/// Only the first period bytes are compared, anything past that repeats.
fn insertion_sort(range: &mut [usize], depth: usize, period: usize, block: &[u8]) {
    let compare = |a: usize, b: usize| {
        rotation(block, a)
            .take(period)
            .skip(depth)
            .cmp(rotation(block, b).take(period).skip(depth))
            .then(a.cmp(&b))
    };
    for i in 1..range.len() {
        let mut j = i;
        while j > 0 && compare(range[j], range[j - 1]) == Ordering::Less
        {
            range.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Byte at position depth of the rotation starting at offset. Both must be less than the block length.
#[inline]
fn byte_at(block: &[u8], offset: usize, depth: usize) -> u8 {
    let pos = offset + depth;
    if pos >= block.len() {
        block[pos - block.len()]
    } else {
        block[pos]
    }
}

/// Iterate over one full cycle of block starting at offset, without building the rotated copy.
fn rotation(block: &[u8], offset: usize) -> impl Iterator<Item = &u8> {
    block[offset..].iter().chain(block[..offset].iter())
}

fn table(index: &[usize], block: &[u8]) -> String {
    let spell = |offset: usize| {
        rotation(block, offset)
            .map(|&b| {
                if b.is_ascii_graphic() {
                    (b as char).to_string()
                } else {
                    format!("\\x{:02x}", b)
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    };
    let mut out = String::from(" i    Original rotations    Sorted rotations    index[i]\n");
    for (i, &start) in index.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}    {}    {}    {}\n",
            i,
            spell(i),
            spell(start),
            start
        ));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    /// Blocks of assorted lengths and alphabets. Same generator as the bzip2 fallback pivot choice.
    fn test_blocks() -> Vec<Vec<u8>> {
        let mut seed = 1_u32;
        let mut blocks = vec![];
        for &(len, alphabet) in &[
            (1, 256),
            (2, 2),
            (16, 2),
            (17, 3),
            (40, 256),
            (100, 4),
            (257, 2),
            (500, 26),
            (1000, 256),
        ] {
            let block = (0..len)
                .map(|_| {
                    seed = ((seed * 7621) + 1) % 32768;
                    (seed % alphabet) as u8
                })
                .collect::<Vec<u8>>();
            blocks.push(block);
        }
        blocks.push(b"abcabcabcabcabcabcabcabcabcabc".to_vec());
        blocks.push(vec![7; 300]);
        blocks.push(b"mississippi".repeat(9));
        blocks
    }

    #[test]
    fn abracadabra_test() {
        let csa = CircularSuffixArray::new(b"ABRACADABRA!");
        assert_eq!(csa.as_slice(), &[11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
        assert_eq!(csa.len(), 12);
        assert_eq!(csa.index(3).unwrap(), 0);
        assert_eq!(csa.index(11).unwrap(), 2);
    }

    #[test]
    fn single_byte_test() {
        let csa = CircularSuffixArray::new(b"X");
        assert_eq!(csa.as_slice(), &[0]);
    }

    #[test]
    fn empty_block_test() {
        let csa = CircularSuffixArray::new(b"");
        assert!(csa.is_empty());
        assert!(csa.index(0).is_err());
    }

    #[test]
    fn identical_bytes_test() {
        let csa = CircularSuffixArray::new(b"AAAAA");
        assert_eq!(csa.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn tie_break_test() {
        // Rotations 0 and 2 (and 1 and 3) are identical, so they are ranked by offset.
        assert_eq!(radix_sort(b"abab"), vec![0, 2, 1, 3]);
        assert_eq!(radix_sort(&b"ab".repeat(20)), simple_sort(&b"ab".repeat(20)));
    }

    #[test]
    fn smallest_period_test() {
        assert_eq!(smallest_period(b"AAAAA"), 1);
        assert_eq!(smallest_period(b"abab"), 2);
        assert_eq!(smallest_period(b"abcabcabc"), 3);
        assert_eq!(smallest_period(b"ababa"), 5);
        assert_eq!(smallest_period(b"ABRACADABRA!"), 12);
        assert_eq!(smallest_period(b"X"), 1);
    }

    #[test]
    fn long_repetitive_block_test() {
        // Finishes at the first period instead of walking every depth of the block.
        let zeros = vec![0_u8; 200_000];
        assert_eq!(radix_sort(&zeros), (0..200_000).collect::<Vec<usize>>());

        let pairs = b"ab".repeat(100_000);
        let expected = (0..200_000)
            .step_by(2)
            .chain((1..200_000).step_by(2))
            .collect::<Vec<usize>>();
        assert_eq!(radix_sort(&pairs), expected);
    }

    #[test]
    fn rank_out_of_range_test() {
        let csa = CircularSuffixArray::new(b"banana");
        match csa.index(6) {
            Err(BwtError::RankOutOfRange { rank, len }) => assert_eq!((rank, len), (6, 6)),
            other => panic!("Expected a rank error, got {:?}", other),
        }
    }

    #[test]
    fn block_compare_test() {
        let block = b"ABRACADABRA!";
        assert_eq!(block_compare(0, 11, block), Ordering::Greater);
        assert_eq!(block_compare(10, 7, block), Ordering::Less);
        assert_eq!(block_compare(4, 4, block), Ordering::Equal);
        assert_eq!(block_compare(0, 2, b"abab"), Ordering::Equal);
        // ABRA!... and ABRAC... only differ at depth 4
        assert_eq!(block_compare_from(7, 0, 4, block), Ordering::Less);
    }

    #[test]
    fn radix_matches_simple_test() {
        for block in test_blocks() {
            assert_eq!(radix_sort(&block), simple_sort(&block), "block {:?}", block);
        }
    }

    #[test]
    fn sorted_order_test() {
        for block in test_blocks() {
            let index = radix_sort(&block);
            let mut seen = index.clone();
            seen.sort_unstable();
            assert_eq!(seen, (0..block.len()).collect::<Vec<usize>>());
            for pair in index.windows(2) {
                assert_ne!(block_compare(pair[0], pair[1], &block), Ordering::Greater);
            }
        }
    }

    #[test]
    fn table_test() {
        let block = b"ABRACADABRA!";
        let table = CircularSuffixArray::new(block).table(block);
        let lines = table.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[1],
            " 0    A B R A C A D A B R A !    ! A B R A C A D A B R A    11"
        );
    }
}
