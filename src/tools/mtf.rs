use log::info;

/// Recency list for the Move To Front transform. Two parallel arrays are kept in step:
/// `symbols[rank]` is the byte at a rank and `ranks[byte]` is the rank of a byte.
#[derive(Debug, Clone)]
pub struct MtfIndex {
    symbols: [u8; 256],
    ranks: [u8; 256],
}

impl MtfIndex {
    /// Fresh list in identity order (byte value == rank).
    pub fn new() -> Self {
        let mut symbols = [0_u8; 256];
        for (rank, sym) in symbols.iter_mut().enumerate() {
            *sym = rank as u8;
        }
        Self {
            symbols,
            ranks: symbols,
        }
    }

    pub fn rank_of(&self, symbol: u8) -> u8 {
        self.ranks[symbol as usize]
    }

    pub fn symbol_at(&self, rank: u8) -> u8 {
        self.symbols[rank as usize]
    }

    /// Emit the current rank of symbol and move it to the front.
    pub fn encode_symbol(&mut self, symbol: u8) -> u8 {
        let rank = self.rank_of(symbol);
        self.promote(rank as usize);
        rank
    }

    /// Emit the symbol currently at rank and move it to the front.
    pub fn decode_symbol(&mut self, rank: u8) -> u8 {
        let symbol = self.symbol_at(rank);
        self.promote(rank as usize);
        symbol
    }

    /// Move the symbol at rank to the front. Everything ahead of it shifts back one place.
    fn promote(&mut self, rank: usize) {
        if rank == 0 {
            return;
        }
        let symbol = self.symbols[rank];
        self.symbols.copy_within(0..rank, 1);
        self.symbols[0] = symbol;
        for (r, &s) in self.symbols.iter().enumerate().take(rank + 1) {
            self.ranks[s as usize] = r as u8;
        }
    }
}

impl Default for MtfIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using Move To Front transform over the full byte alphabet.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    info!("MTF encoding {} bytes.", data.len());
    let mut index = MtfIndex::new();
    data.iter().map(|&byte| index.encode_symbol(byte)).collect()
}

/// Decode Move To Front ranks back to the bytes they stand for.
pub fn mtf_decode(data: &[u8]) -> Vec<u8> {
    info!("MTF decoding {} bytes.", data.len());
    let mut index = MtfIndex::new();
    data.iter().map(|&rank| index.decode_symbol(rank)).collect()
}
