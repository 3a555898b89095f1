//! Kopfzeilen für Konsolen-Meldungen
//!
//! Format: `{ACK|DBG} HH:MM:SS <start>[ <main>]{ -END\n| }`

use core::fmt::{self, Write};

use crate::timestamp::format_timestamp;
use crate::types::ClockSnapshot;

/// Abschluss einer kompletten Meldung
pub const END_MARKER: &str = " -END\n";

/// Art der Meldung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampTag {
    /// Quittung / Betriebsmeldung
    Ack,
    /// Debug-Ausgabe
    Dbg,
}

impl StampTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StampTag::Ack => "ACK ",
            StampTag::Dbg => "DBG ",
        }
    }
}

/// Schreibt Tag, Zeitstempel und Überschriften
///
/// Mit `terminate` wird die Zeile mit " -END\n" abgeschlossen, sonst folgt
/// nur ein Leerzeichen und der Aufrufer hängt weiteren Text an.
pub fn info_stamp<W: Write>(
    out: &mut W,
    clock: ClockSnapshot,
    start_header: &str,
    main_header: Option<&str>,
    tag: StampTag,
    terminate: bool,
) -> fmt::Result {
    out.write_str(tag.as_str())?;
    out.write_str(&format_timestamp(clock))?;
    out.write_str(start_header)?;
    if let Some(main) = main_header {
        out.write_char(' ')?;
        out.write_str(main)?;
    }
    out.write_str(if terminate { END_MARKER } else { " " })
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    #[test]
    fn test_info_stamp_ack_terminated() {
        let mut out: String<64> = String::new();
        info_stamp(
            &mut out,
            ClockSnapshot::at(8, 59, 3),
            "Module:",
            Some("ready"),
            StampTag::Ack,
            true,
        )
        .unwrap();
        assert_eq!(out.as_str(), "ACK 08:59:03 Module: ready -END\n");
    }

    #[test]
    fn test_info_stamp_dbg_open_without_main_header() {
        let mut out: String<64> = String::new();
        info_stamp(
            &mut out,
            ClockSnapshot::at(12, 0, 0),
            "Module:",
            None,
            StampTag::Dbg,
            false,
        )
        .unwrap();
        assert_eq!(out.as_str(), "DBG 12:00:00 Module: ");
    }

    #[test]
    fn test_info_stamp_reports_full_sink() {
        let mut out: String<8> = String::new();
        let result = info_stamp(
            &mut out,
            ClockSnapshot::at(1, 2, 3),
            "too long for the sink",
            None,
            StampTag::Dbg,
            true,
        );
        assert!(result.is_err());
    }
}
