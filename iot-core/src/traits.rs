//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Plattform-Zugriffe
//! ohne konkrete Implementierung. Die LED selbst wird über
//! `embedded_hal::digital::OutputPin` angesprochen.

use crate::console::InputLine;
use crate::types::{HeapStats, UnknownPattern};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Der Pin konnte nicht geschaltet werden
    PinWriteFailed,
    /// Musterindex außerhalb der Tabelle (0-7)
    UnknownPattern(u8),
}

impl From<UnknownPattern> for LedError {
    fn from(err: UnknownPattern) -> Self {
        LedError::UnknownPattern(err.0)
    }
}

/// Fehler-Typ für Konsolen-Ein-/Ausgaben
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    ReadFailed,
    WriteFailed,
}

impl From<core::fmt::Error> for InputError {
    fn from(_: core::fmt::Error) -> Self {
        InputError::WriteFailed
    }
}

/// Trait für Heap-Statistiken der Plattform
///
/// # Implementierungen
/// - **Production:** EspHeapProbe (esp-alloc)
/// - **Testing:** MockHeap (feste Werte)
pub trait HeapProbe {
    fn stats(&self) -> HeapStats;
}

/// Trait für zeilenweise Konsolen-Eingabe
///
/// `poll_line` blockiert nie: `Ok(None)` heißt "noch keine komplette Zeile".
pub trait LineSource {
    fn poll_line(&mut self) -> Result<Option<InputLine>, InputError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::PinWriteFailed => defmt::write!(fmt, "PinWriteFailed"),
            LedError::UnknownPattern(index) => {
                defmt::write!(fmt, "UnknownPattern({=u8})", index)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            InputError::ReadFailed => defmt::write!(fmt, "ReadFailed"),
            InputError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
