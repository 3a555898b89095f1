//! Text → Wert Konvertierungen

/// Präfix, das als `true` gilt: die ersten 4 Zeichen von `"true"` (JSON)
pub const TRUE_PREFIX: &[u8; 4] = b"\"tru";

/// Wandelt ein JSON-Feld in bool um
///
/// Verglichen werden nur die ersten 4 Zeichen mit dem Anfang von `"true"`
/// (inkl. Anführungszeichen). Alles andere, auch kürzerer Text, ist `false`.
pub fn string_to_bool(text: &str) -> bool {
    text.as_bytes().get(..TRUE_PREFIX.len()) == Some(TRUE_PREFIX.as_slice())
}
