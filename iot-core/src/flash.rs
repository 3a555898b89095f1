//! Längenbestimmung von C-Strings aus dem Flash

/// Maximal untersuchte Länge eines Flash-Strings
pub const MAX_SCAN_LEN: usize = 80;

/// Position des ersten NUL-Bytes innerhalb der ersten 80 Bytes
///
/// Gibt 0 zurück, wenn dort kein Terminator steht.
pub fn bounded_c_str_len(data: &[u8]) -> u8 {
    data.iter()
        .take(MAX_SCAN_LEN)
        .position(|&b| b == 0)
        .map_or(0, |len| len as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_c_str_len_terminated() {
        assert_eq!(bounded_c_str_len(b"string to be measured\0"), 21);
        assert_eq!(bounded_c_str_len(b"\0"), 0);
    }

    #[test]
    fn test_bounded_c_str_len_stops_at_first_nul() {
        assert_eq!(bounded_c_str_len(b"ab\0cd\0"), 2);
    }

    #[test]
    fn test_bounded_c_str_len_missing_terminator() {
        assert_eq!(bounded_c_str_len(b"no terminator"), 0);
        assert_eq!(bounded_c_str_len(&[]), 0);
    }

    #[test]
    fn test_bounded_c_str_len_terminator_beyond_scan_window() {
        let mut data = [b'x'; MAX_SCAN_LEN + 1];
        data[MAX_SCAN_LEN] = 0;
        assert_eq!(bounded_c_str_len(&data), 0);

        data[MAX_SCAN_LEN - 1] = 0;
        assert_eq!(bounded_c_str_len(&data), (MAX_SCAN_LEN - 1) as u8);
    }
}
