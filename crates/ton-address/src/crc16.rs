//! CRC-16 checksum guarding the human-readable address form.
//!
//! Polynomial 0x1021 (CCITT/XMODEM family), MSB-first, register
//! initialised to zero, no final XOR. The register is fed bit by bit
//! with the input followed by two zero bytes; pushing those 16 trailing
//! zero bits through is the classic augmented formulation of this CRC.

const POLY: u16 = 0x1021;

/// Compute the CRC-16 of `data`, returned as two big-endian bytes.
///
/// Total over all inputs, including the empty slice.
pub fn crc16(data: &[u8]) -> [u8; 2] {
    let mut reg: u16 = 0;
    for &byte in data.iter().chain([0u8, 0].iter()) {
        let mut mask = 0x80u8;
        while mask > 0 {
            let overflow = reg & 0x8000 != 0;
            reg <<= 1;
            if byte & mask != 0 {
                reg |= 1;
            }
            if overflow {
                reg ^= POLY;
            }
            mask >>= 1;
        }
    }
    reg.to_be_bytes()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_reference_vector() {
        // crc16(base64decode("cZ+8IP/1L2//+Q==")) == base64decode("YU0=")
        let data = codec::decode("cZ+8IP/1L2//+Q==").unwrap();
        let expected = codec::decode("YU0=").unwrap();
        assert_eq!(crc16(&data), [expected[0], expected[1]]);
    }

    #[test]
    fn test_empty_input() {
        // Zero register, zero input bits: stays zero.
        assert_eq!(crc16(&[]), [0, 0]);
    }

    #[test]
    fn test_known_address_checksum() {
        // Trailing two bytes of a valid packed address are the CRC of
        // the first 34.
        let packed = codec::decode("Ef-BHO0nH49EnLUetZIAkLkssgCyDwcXBnbp22--naUWz8VY").unwrap();
        assert_eq!(packed.len(), 36);
        assert_eq!(crc16(&packed[..34]), [packed[34], packed[35]]);
    }

    #[test]
    fn test_single_bit_sensitivity() {
        let mut data = [0xA5u8; 34];
        let baseline = crc16(&data);
        // CRC-16 detects every single-bit error.
        for i in 0..data.len() {
            for bit in 0..8 {
                data[i] ^= 1 << bit;
                assert_ne!(crc16(&data), baseline, "flip at byte {} bit {}", i, bit);
                data[i] ^= 1 << bit;
            }
        }
    }
}
