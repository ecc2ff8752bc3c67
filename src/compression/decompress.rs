use std::io::{Read, Write};

use log::{debug, info};

use super::header::read_bwt_stream;
use crate::bwt_algorithms::bwt_sort::bwt_decode;
use crate::error::Result;
use crate::tools::cli::Tool;
use crate::tools::mtf::mtf_decode;

/// Apply the inverse transform of tool to a whole encoded block.
pub fn decode_block(tool: Tool, data: &[u8]) -> Result<Vec<u8>> {
    match tool {
        Tool::Bwt => bwt_unstream(data),
        Tool::Mtf => Ok(mtf_decode(data)),
        Tool::Full => bwt_unstream(&mtf_decode(data)),
    }
}

fn bwt_unstream(stream: &[u8]) -> Result<Vec<u8>> {
    let (key, bwt) = read_bwt_stream(stream)?;
    bwt_decode(key, bwt)
}

/// Read all of input as one encoded block, decode it with tool and write the original bytes to output.
pub fn decompress<R: Read, W: Write>(tool: Tool, mut input: R, mut output: W) -> Result<()> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    info!("Read {} encoded bytes.", data.len());

    let decoded = decode_block(tool, &data)?;
    debug!("{} decoded {} bytes into {} bytes.", tool, data.len(), decoded.len());

    output.write_all(&decoded)?;
    output.flush()?;
    Ok(())
}
