/// Returns a frequency count of each byte value in the input data.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    let mut freqs = vec![0_u32; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

#[test]
fn freqs_test() {
    let freq = freqs(b"ARD!RCAAAABB");
    assert_eq!(freq.len(), 256);
    assert_eq!(freq[b'A' as usize], 5);
    assert_eq!(freq[b'B' as usize], 2);
    assert_eq!(freq[b'!' as usize], 1);
    assert_eq!(freq.iter().sum::<u32>(), 12);
}
