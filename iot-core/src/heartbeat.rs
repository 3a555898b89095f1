//! "I am alive"-Anzeige auf der Konsole

use core::fmt::{self, Write};

use crate::diagnostics::report_mem_usage;
use crate::stamp::{StampTag, info_stamp};
use crate::traits::HeapProbe;
use crate::types::ClockSnapshot;

/// Zeichen, die reihum an derselben Position ausgegeben werden
pub const ALIVE_GLYPHS: [char; 6] = ['-', '+', '.', '*', '#', '@'];

const MODULE: &str = "Heartbeat::tick:";
const MINUTE_EDGE: &str = "One minute edge watchdog.";
const HOUR_EDGE: &str = "One hour edge watchdog.";

/// Rotierende Lebenszeichen-Anzeige
///
/// Einmal pro Durchlauf der Hauptschleife aufrufen. Zur vollen Minute
/// (Sekunde 0) kommen Watchdog-Zeile und Speicherbericht dazu, bei
/// gesetztem `hour_edge` zusätzlich die Stunden-Zeile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Heartbeat {
    glyph: u8,
}

impl Heartbeat {
    pub const fn new() -> Self {
        Self { glyph: 0 }
    }

    /// Aktuelles Zeichen der Anzeige
    ///
    /// Nach einem `tick()` das zuletzt ausgegebene Zeichen, vorher das
    /// Startzeichen `-` (ausgegeben wird es erst nach einer vollen Runde).
    pub fn glyph(&self) -> char {
        ALIVE_GLYPHS[usize::from(self.glyph)]
    }

    pub fn tick<W: Write, H: HeapProbe>(
        &mut self,
        out: &mut W,
        clock: ClockSnapshot,
        probe: &H,
        active: bool,
    ) -> fmt::Result {
        if !active {
            return Ok(());
        }

        self.glyph = (self.glyph + 1) % ALIVE_GLYPHS.len() as u8;
        out.write_char(self.glyph())?;
        out.write_char('\r')?;

        if clock.second == 0 {
            out.write_char('\n')?;
            info_stamp(out, clock, MODULE, Some(MINUTE_EDGE), StampTag::Dbg, true)?;
            report_mem_usage(out, clock, MODULE, None, probe)?;
            if clock.hour_edge {
                info_stamp(out, clock, MODULE, Some(HOUR_EDGE), StampTag::Dbg, true)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeapStats;
    use heapless::String;

    struct NoHeap;

    impl HeapProbe for NoHeap {
        fn stats(&self) -> HeapStats {
            HeapStats::default()
        }
    }

    #[test]
    fn test_tick_inactive_is_silent() {
        let mut out: String<16> = String::new();
        let mut hb = Heartbeat::new();
        hb.tick(&mut out, ClockSnapshot::at(0, 0, 0), &NoHeap, false).unwrap();
        assert!(out.is_empty());
        assert_eq!(hb, Heartbeat::new());
    }

    #[test]
    fn test_glyph_before_first_tick() {
        let mut out: String<8> = String::new();
        let mut hb = Heartbeat::new();
        assert_eq!(hb.glyph(), '-');
        hb.tick(&mut out, ClockSnapshot::at(0, 0, 30), &NoHeap, true).unwrap();
        assert_eq!(hb.glyph(), '+');
        assert_eq!(out.as_str(), "+\r");
    }

    #[test]
    fn test_tick_rotates_glyphs() {
        let mut out: String<32> = String::new();
        let mut hb = Heartbeat::new();
        for _ in 0..7 {
            hb.tick(&mut out, ClockSnapshot::at(0, 0, 30), &NoHeap, true).unwrap();
        }
        assert_eq!(out.as_str(), "+\r.\r*\r#\r@\r-\r+\r");
    }

    #[test]
    fn test_tick_minute_edge_reports() {
        let mut out: String<320> = String::new();
        let mut hb = Heartbeat::new();
        hb.tick(&mut out, ClockSnapshot::at(7, 15, 0), &NoHeap, true).unwrap();
        assert!(out.starts_with("+\r\nDBG 07:15:00 Heartbeat::tick: One minute edge watchdog. -END\n"));
        assert!(out.contains("ACK 07:15:00 Heartbeat::tick: Free heap:  0."));
        assert!(!out.contains("One hour edge"));
    }

    #[test]
    fn test_tick_hour_edge_reports() {
        let mut out: String<320> = String::new();
        let mut hb = Heartbeat::new();
        let clock = ClockSnapshot::at(8, 0, 0).with_min_edge().with_hour_edge();
        hb.tick(&mut out, clock, &NoHeap, true).unwrap();
        assert!(out.ends_with("DBG 08:00:00 Heartbeat::tick: One hour edge watchdog. -END\n"));
    }
}
