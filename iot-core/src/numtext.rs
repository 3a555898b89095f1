//! Zahl → Text Konvertierungen ohne Heap

use heapless::String;

/// Größte Zahl, die `format_bounded` darstellt
pub const MAX_BOUNDED: u16 = 999;

/// Länge des Ergebnisses von `format_bounded`: " 999 " / " ERR "
pub const BOUNDED_LEN: usize = 5;

pub type BoundedText = String<BOUNDED_LEN>;

/// Formatiert 0-999 dreistellig mit Leerzeichen links und rechts
///
/// Führende Nullen bleiben erhalten (`7` → `" 007 "`).
/// Größere Werte ergeben den Marker `" ERR "` statt eines Fehlers.
pub fn format_bounded(number: u16) -> BoundedText {
    let body: [u8; 3] = if number > MAX_BOUNDED {
        *b"ERR"
    } else {
        [
            b'0' + (number / 100) as u8,
            b'0' + (number / 10 % 10) as u8,
            b'0' + (number % 10) as u8,
        ]
    };

    let mut text = BoundedText::new();
    for byte in [b' ', body[0], body[1], body[2], b' '] {
        let _ = text.push(char::from(byte));
    }
    text
}

/// Schreibt `value` dezimal in `buf` und gibt den belegten Teil zurück
///
/// Der ganze Slice ist Ziffern-Kapazität (kein Terminator). Reicht er nicht,
/// bleiben die niederwertigsten Ziffern stehen, die hineinpassen
/// (`12345` in 2 Bytes → `"45"`). Leerer Puffer → `""`.
pub fn u16_to_digits(value: u16, buf: &mut [u8]) -> &str {
    let mut len = 0;
    let mut rest = value;
    loop {
        if len < buf.len() {
            buf[len] = b'0' + (rest % 10) as u8;
            len += 1;
        }
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let digits = &mut buf[..len];
    digits.reverse();
    // Nur ASCII-Ziffern geschrieben
    core::str::from_utf8(digits).unwrap_or("")
}

/// Liest eine reine Dezimalzahl (nur Ziffern, passend in u16)
pub fn parse_u16_digits(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.bytes().try_fold(0u16, |acc, b| {
        acc.checked_mul(10)?.checked_add(u16::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bounded_examples() {
        assert_eq!(format_bounded(0).as_str(), " 000 ");
        assert_eq!(format_bounded(7).as_str(), " 007 ");
        assert_eq!(format_bounded(42).as_str(), " 042 ");
        assert_eq!(format_bounded(999).as_str(), " 999 ");
    }

    #[test]
    fn test_format_bounded_error_marker() {
        assert_eq!(format_bounded(1000).as_str(), " ERR ");
        assert_eq!(format_bounded(u16::MAX).as_str(), " ERR ");
    }

    #[test]
    fn test_format_bounded_full_range() {
        for n in 0..=MAX_BOUNDED {
            let text = format_bounded(n);
            assert_eq!(text.len(), BOUNDED_LEN);
            assert!(text.starts_with(' ') && text.ends_with(' '));
            assert_eq!(text[1..4].parse::<u16>().unwrap(), n);
        }
    }

    #[test]
    fn test_u16_to_digits_zero() {
        let mut buf = [0u8; 6];
        assert_eq!(u16_to_digits(0, &mut buf), "0");
    }

    #[test]
    fn test_u16_to_digits_max() {
        let mut buf = [0u8; 5];
        assert_eq!(u16_to_digits(u16::MAX, &mut buf), "65535");
    }

    #[test]
    fn test_u16_to_digits_truncates_to_low_digits() {
        let mut buf = [0u8; 2];
        assert_eq!(u16_to_digits(12345, &mut buf), "45");
    }

    #[test]
    fn test_u16_to_digits_empty_buffer() {
        let mut buf = [0u8; 0];
        assert_eq!(u16_to_digits(12, &mut buf), "");
    }

    #[test]
    fn test_parse_u16_digits_rejects_garbage() {
        assert_eq!(parse_u16_digits(""), None);
        assert_eq!(parse_u16_digits("12a"), None);
        assert_eq!(parse_u16_digits("-1"), None);
        assert_eq!(parse_u16_digits("65536"), None);
        assert_eq!(parse_u16_digits("00042"), Some(42));
    }
}
