//! Ausgabe von E-Mail-Texten auf der Konsole
//!
//! `<br>` wird zu Zeilenumbruch + Tab, `&emsp;` zu Tab.

use core::fmt::{self, Write};

const LINE_BREAK: &str = "\n\t";
const EM_SPACE: &str = "&emsp;";

/// Schreibt einen E-Mail-Text lesbar formatiert nach `out`
pub fn render_email_body<W: Write>(out: &mut W, body: &str) -> fmt::Result {
    out.write_str(LINE_BREAK)?;

    let mut rest = body;
    while let Some(c) = rest.chars().next() {
        if is_br_tag(rest) {
            out.write_str(LINE_BREAK)?;
            rest = &rest[4..];
        } else if rest.starts_with(EM_SPACE) {
            out.write_char('\t')?;
            rest = &rest[EM_SPACE.len()..];
        } else {
            out.write_char(c)?;
            rest = &rest[c.len_utf8()..];
        }
    }
    Ok(())
}

// <br>, <BR>, <Br>, <bR>
fn is_br_tag(text: &str) -> bool {
    text.get(..4)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("<br>"))
}
