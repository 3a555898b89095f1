//! Core Types für die Utility-Routinen
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Momentaufnahme der Uhr, vom Aufrufer geliefert
///
/// Die Zeitquelle selbst (NTP, RTC, ...) liegt außerhalb dieser Crate.
/// Die Edge-Flags sind genau für einen Durchlauf der Hauptschleife gesetzt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockSnapshot {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Eine neue Sekunde hat begonnen
    pub sec_edge: bool,
    /// Eine neue Minute hat begonnen
    pub min_edge: bool,
    /// Eine neue Stunde hat begonnen
    pub hour_edge: bool,
}

impl ClockSnapshot {
    /// Erstellt eine Momentaufnahme ohne gesetzte Edge-Flags
    pub const fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            sec_edge: false,
            min_edge: false,
            hour_edge: false,
        }
    }

    pub const fn with_sec_edge(mut self) -> Self {
        self.sec_edge = true;
        self
    }

    pub const fn with_min_edge(mut self) -> Self {
        self.min_edge = true;
        self
    }

    pub const fn with_hour_edge(mut self) -> Self {
        self.hour_edge = true;
        self
    }
}

/// Blinkmuster der Status-LED
///
/// Der Index (0-7) ist die Zeile in der Mustertabelle,
/// siehe [`crate::indicator::PATTERNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BlinkPattern {
    /// Sucht ein WLAN als Station
    WifiSearch = 0,
    /// Wartet als Access Point auf einen Client
    ApSearch = 1,
    /// WLAN-Verbindung verloren
    WifiLost = 2,
    /// Netzwerkzeit nicht gesetzt (NTP-Fehler)
    NtpFailure = 3,
    /// Rollladen-Steuerung im Normalbetrieb
    ShadesOk = 4,
    /// Rollladen-Skript pausiert
    ShadesPaused = 5,
    /// Fehler beim Öffnen einer SD-Datei
    SdFailure = 6,
    /// Reserviert
    Reserved = 7,
}

impl BlinkPattern {
    pub const ALL: [BlinkPattern; 8] = [
        BlinkPattern::WifiSearch,
        BlinkPattern::ApSearch,
        BlinkPattern::WifiLost,
        BlinkPattern::NtpFailure,
        BlinkPattern::ShadesOk,
        BlinkPattern::ShadesPaused,
        BlinkPattern::SdFailure,
        BlinkPattern::Reserved,
    ];

    /// Zeilenindex in der Mustertabelle
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Fehler: Musterindex außerhalb der Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownPattern(pub u8);

impl TryFrom<u8> for BlinkPattern {
    type Error = UnknownPattern;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        BlinkPattern::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(UnknownPattern(index))
    }
}

/// Heap-Statistik der Plattform
///
/// Nicht jede Plattform liefert Fragmentierung und größten freien Block,
/// fehlende Werte werden als `-` ausgegeben.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapStats {
    pub free_bytes: usize,
    pub fragmentation_pct: Option<u8>,
    pub max_free_block: Option<usize>,
}

/// Zeigt einen optionalen Zahlenwert an, `-` wenn er fehlt
pub(crate) struct OrDash<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrDash<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("-"),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ClockSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{=u8}:{=u8}:{=u8} (edges s/m/h: {}/{}/{})",
            self.hour,
            self.minute,
            self.second,
            self.sec_edge,
            self.min_edge,
            self.hour_edge
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BlinkPattern {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "BlinkPattern({=u8})", self.index())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HeapStats {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "HeapStats {{ free: {}, frag: {}, max_block: {} }}",
            self.free_bytes,
            self.fragmentation_pct,
            self.max_free_block
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_try_from_valid_indices() {
        for (i, pattern) in BlinkPattern::ALL.iter().enumerate() {
            assert_eq!(BlinkPattern::try_from(i as u8), Ok(*pattern));
            assert_eq!(pattern.index(), i as u8);
        }
    }

    #[test]
    fn test_pattern_try_from_out_of_range() {
        assert_eq!(BlinkPattern::try_from(8), Err(UnknownPattern(8)));
        assert_eq!(BlinkPattern::try_from(255), Err(UnknownPattern(255)));
    }

    #[test]
    fn test_clock_snapshot_builders() {
        let clock = ClockSnapshot::at(23, 59, 0).with_sec_edge().with_hour_edge();
        assert!(clock.sec_edge);
        assert!(!clock.min_edge);
        assert!(clock.hour_edge);
        assert_eq!((clock.hour, clock.minute, clock.second), (23, 59, 0));
    }
}
