//! XOR-Prüfsummen
//!
//! Nicht kryptographisch: erkennt nur einfache Bitfehler.

/// XOR über alle Bytes, 0 für leere Eingabe
pub fn xor8(data: &[u8]) -> u8 {
    data.iter().fold(0, |acc, byte| acc ^ byte)
}

/// XOR über High- und Low-Byte aller Wörter, 0 für leere Eingabe
///
/// Das Ergebnis bleibt 8 Bit breit.
pub fn xor16(data: &[u16]) -> u8 {
    data.iter().fold(0, |acc, word| {
        let [high, low] = word.to_be_bytes();
        acc ^ high ^ low
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor8_empty() {
        assert_eq!(xor8(&[]), 0);
    }

    #[test]
    fn test_xor8_known_value() {
        assert_eq!(xor8(&[0x01, 0x02, 0x04]), 0x07);
        assert_eq!(xor8(&[0xFF, 0x0F]), 0xF0);
    }

    #[test]
    fn test_xor8_order_independent() {
        let a = [0x12, 0x34, 0x56, 0x78, 0x9A];
        let b = [0x9A, 0x56, 0x12, 0x78, 0x34];
        assert_eq!(xor8(&a), xor8(&b));
    }

    #[test]
    fn test_xor16_empty() {
        assert_eq!(xor16(&[]), 0);
    }

    #[test]
    fn test_xor16_folds_both_bytes() {
        assert_eq!(xor16(&[0x1234]), 0x12 ^ 0x34);
        assert_eq!(xor16(&[0xFF00, 0x00FF]), 0x00);
    }

    #[test]
    fn test_xor16_matches_xor8_of_bytes() {
        let words = [0xBEEF, 0x1234, 0x0001];
        let bytes = [0xBE, 0xEF, 0x12, 0x34, 0x00, 0x01];
        assert_eq!(xor16(&words), xor8(&bytes));
    }
}
