//! Matrix rows for the extended Golay (24,12,8) code, from the IRIG-106
//! Chapter 7 reference encoder.

/// Parity sub-generator matrix rows, 12 bits each. Row `i` is XORed into
/// the parity field when bit `11 - i` of the data word is set.
pub const GEN_PARITY_ROWS: [u16; 12] = [
    0xc75, 0x63b, 0xf68, 0x7b4,
    0x3da, 0xd99, 0x6cd, 0x367,
    0xdc6, 0xa97, 0x93e, 0x8eb,
];

/// Matching parity-check matrix rows, 12 bits each. Row `i` is XORed into
/// the syndrome when bit `11 - i` of the received parity field is set.
pub const CHECK_PARITY_ROWS: [u16; 12] = [
    0xa4f, 0xf68, 0x7b4, 0x3da,
    0x1ed, 0xab9, 0xf13, 0xdc6,
    0x6e3, 0x93e, 0x49f, 0xc75,
];
