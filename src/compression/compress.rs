use std::io::{Read, Write};

use log::{debug, info};

use super::header::write_bwt_stream;
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::error::Result;
use crate::tools::cli::Tool;
use crate::tools::mtf::mtf_encode;

/// Apply the forward transform of tool to a whole block.
pub fn encode_block(tool: Tool, block: &[u8]) -> Result<Vec<u8>> {
    match tool {
        Tool::Bwt => bwt_stream(block),
        Tool::Mtf => Ok(mtf_encode(block)),
        // MTF runs over the whole framed stream, header included.
        Tool::Full => Ok(mtf_encode(&bwt_stream(block)?)),
    }
}

fn bwt_stream(block: &[u8]) -> Result<Vec<u8>> {
    let (key, bwt) = bwt_encode(block)?;
    Ok(write_bwt_stream(key, &bwt))
}

/// Read all of input as one block, encode it with tool and write the result to output.
pub fn compress<R: Read, W: Write>(tool: Tool, mut input: R, mut output: W) -> Result<()> {
    let mut block = Vec::new();
    input.read_to_end(&mut block)?;
    info!("Read a block of {} bytes.", block.len());

    let encoded = encode_block(tool, &block)?;
    debug!("{} encoded {} bytes into {} bytes.", tool, block.len(), encoded.len());

    output.write_all(&encoded)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::BwtError;

    #[test]
    fn bwt_block_test() {
        assert_eq!(
            encode_block(Tool::Bwt, b"ABRACADABRA!").unwrap(),
            b"\x00\x00\x00\x03ARD!RCAAAABB".to_vec()
        );
    }

    #[test]
    fn full_block_test() {
        assert_eq!(
            encode_block(Tool::Full, b"ABRACADABRA!").unwrap(),
            vec![0, 0, 0, 3, 65, 82, 69, 36, 2, 69, 4, 0, 0, 0, 69, 0]
        );
    }

    #[test]
    fn mtf_stream_test() {
        let mut out = Vec::new();
        compress(Tool::Mtf, &b"ABRACADABRA!"[..], &mut out).unwrap();
        assert_eq!(
            out,
            vec![0x41, 0x42, 0x52, 0x02, 0x44, 0x01, 0x45, 0x01, 0x04, 0x04, 0x02, 0x26]
        );
    }

    #[test]
    fn empty_input_test() {
        let mut out = Vec::new();
        compress(Tool::Mtf, &b""[..], &mut out).unwrap();
        assert!(out.is_empty());
        assert!(matches!(
            compress(Tool::Bwt, &b""[..], &mut out),
            Err(BwtError::EmptyBlock)
        ));
    }
}
