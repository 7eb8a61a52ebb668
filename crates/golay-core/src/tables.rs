use std::time::Instant;

use crate::matrices::{CHECK_PARITY_ROWS, GEN_PARITY_ROWS};

/// Number of entries in each table: one per 12-bit value.
pub const TABLE_SIZE: usize = 0x1000;

/// Correction-table sentinel for syndromes not reachable by a weight <= 3
/// error pattern.
pub const CORRECT_UNKNOWN: u16 = 0xfff;

/// Error-table value for syndromes beyond the guaranteed correction radius.
pub const WEIGHT_UNCORRECTABLE: u8 = 4;

/// Precomputed lookup tables for the (24,12,8) code.
///
/// `encode` maps a data word to its codeword. `syndrome` maps a received
/// parity field to its syndrome contribution. `correct` and `errors` map a
/// syndrome to the data-field XOR mask and the Hamming weight of the
/// minimum-weight error pattern producing it. Built once, immutable after.
pub struct GolayTables {
    encode: [u32; TABLE_SIZE],
    syndrome: [u16; TABLE_SIZE],
    correct: [u16; TABLE_SIZE],
    errors: [u8; TABLE_SIZE],
}

impl GolayTables {
    /// Build all four tables from the fixed matrix rows.
    pub fn build() -> Self {
        let start = Instant::now();
        let mut tables = GolayTables {
            encode: [0; TABLE_SIZE],
            syndrome: [0; TABLE_SIZE],
            correct: [0; TABLE_SIZE],
            errors: [0; TABLE_SIZE],
        };
        tables.build_encode();
        tables.build_decode();
        tracing::debug!("built Golay (24,12) tables in {:?}", start.elapsed());
        tables
    }

    /// Multiply each data word by the generator matrix over GF(2). The code
    /// is systematic: the upper 12 bits of the codeword are the data word,
    /// the lower 12 the parity field.
    fn build_encode(&mut self) {
        for x in 0..TABLE_SIZE {
            let mut codeword = (x as u32) << 12;
            for (i, &row) in GEN_PARITY_ROWS.iter().enumerate() {
                if (x >> (11 - i)) & 1 == 1 {
                    codeword ^= row as u32;
                }
            }
            self.encode[x] = codeword;
        }
    }

    fn build_decode(&mut self) {
        // Phase 1: syndrome contribution of each parity-field value, with
        // uncorrectable sentinels provisionally set for every nonzero value.
        for p in 0..TABLE_SIZE {
            for (i, &row) in CHECK_PARITY_ROWS.iter().enumerate() {
                if (p >> (11 - i)) & 1 == 1 {
                    self.syndrome[p] ^= row;
                    self.errors[p] = WEIGHT_UNCORRECTABLE;
                    self.correct[p] = CORRECT_UNKNOWN;
                }
            }
        }
        self.errors[0] = 0;
        self.correct[0] = 0;

        // Phase 2: enumerate all weight <= 3 error patterns. Repeated bit
        // positions collapse via OR, so weights 0..2 are covered as
        // degenerate cases. Minimum distance 8 guarantees each reachable
        // syndrome has a unique minimum-weight pattern, so repeated writes
        // to the same syndrome are consistent.
        for i in 0..24 {
            for j in 0..24 {
                for k in 0..24 {
                    let error: u32 = (1 << i) | (1 << j) | (1 << k);
                    let syn = self.syndrome_of(error) as usize;
                    self.correct[syn] = ((error >> 12) & 0xfff) as u16;
                    self.errors[syn] = error.count_ones() as u8;
                }
            }
        }
    }

    /// Codeword for a 12-bit data word.
    #[inline]
    pub fn codeword(&self, data: u16) -> u32 {
        self.encode[(data & 0xfff) as usize]
    }

    /// Syndrome of a received word split into data field `v1` (bits 12-23)
    /// and parity field `v2` (bits 0-11).
    #[inline]
    pub fn syndrome2(&self, v1: u16, v2: u16) -> u16 {
        self.syndrome[(v2 & 0xfff) as usize] ^ (v1 & 0xfff)
    }

    #[inline]
    fn syndrome_of(&self, word: u32) -> u16 {
        self.syndrome2(((word >> 12) & 0xfff) as u16, (word & 0xfff) as u16)
    }

    /// XOR mask that corrects the data field for this syndrome. Only valid
    /// when the total error weight is <= 3.
    #[inline]
    pub fn correction(&self, syndrome: u16) -> u16 {
        self.correct[(syndrome & 0xfff) as usize]
    }

    /// Hamming weight of the minimum-weight error pattern for this
    /// syndrome: 0-3 exact, 4 = weight >= 4.
    #[inline]
    pub fn error_weight(&self, syndrome: u16) -> u8 {
        self.errors[(syndrome & 0xfff) as usize]
    }
}
