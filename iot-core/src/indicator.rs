//! Status-LED mit festen Blinkmustern
//!
//! Ein Zyklus hat 16 Schritte, jeder `tick()` schaltet einen Schritt weiter.
//! Die Blinkgeschwindigkeit ergibt sich also allein aus der Aufrufrate.

use embedded_hal::digital::OutputPin;

use crate::traits::LedError;
use crate::types::BlinkPattern;

/// Schritte pro Blinkzyklus
pub const CYCLE_STEPS: usize = 16;

/// Anzahl der Muster in der Tabelle
pub const PATTERN_COUNT: usize = 8;

const X: bool = true;
const O: bool = false;

/// Mustertabelle: `true` = LED an
#[rustfmt::skip]
pub const PATTERNS: [[bool; CYCLE_STEPS]; PATTERN_COUNT] = [
    //  0 1 2 3 4 5 6 7 8 9 A B C D E F
    [X,O,X,O,X,O,X,O,X,O,X,O,X,O,X,O], // WifiSearch
    [X,X,X,O,X,X,X,O,X,X,X,O,X,X,X,O], // ApSearch
    [X,O,X,O,O,O,O,O,O,O,O,O,O,O,O,O], // WifiLost
    [X,X,O,O,O,O,O,O,O,O,O,O,O,O,O,O], // NtpFailure
    [X,X,X,O,O,X,X,X,O,O,O,O,O,O,O,O], // ShadesOk
    [X,X,X,X,X,X,X,X,O,O,O,O,O,O,O,O], // ShadesPaused
    [X,X,O,O,X,X,O,O,X,X,O,O,O,O,O,O], // SdFailure
    [O,O,X,X,O,O,X,X,O,O,X,X,X,X,X,X], // Reserved
];

/// Ist die LED bei `step` im Muster `pattern` an?
pub fn is_lit(pattern: BlinkPattern, step: usize) -> bool {
    PATTERNS[usize::from(pattern.index())][step % CYCLE_STEPS]
}

/// Treiber für die Status-LED
///
/// Hält die Zyklus-Position, die LED selbst wird bei jedem Aufruf übergeben.
/// Die LED ist low-aktiv: LOW = an, HIGH = aus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LedIndicator {
    step: u8,
}

impl LedIndicator {
    pub const fn new() -> Self {
        Self { step: 0 }
    }

    /// Aktuelle Position im Zyklus (0-15)
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Schaltet die LED für den aktuellen Schritt und rückt einen Schritt vor
    ///
    /// Der Schritt rückt auch dann vor, wenn der Pin nicht geschaltet werden
    /// konnte, damit der Rhythmus erhalten bleibt.
    ///
    /// # Rückgabe
    /// `Ok(true)` wenn die LED in diesem Schritt leuchtet
    pub fn tick<P: OutputPin>(
        &mut self,
        pin: &mut P,
        pattern: BlinkPattern,
    ) -> Result<bool, LedError> {
        let lit = is_lit(pattern, usize::from(self.step));
        let written = if lit { pin.set_low() } else { pin.set_high() };

        self.step = (self.step + 1) % CYCLE_STEPS as u8;

        written.map(|_| lit).map_err(|_| LedError::PinWriteFailed)
    }

    /// Wie `tick()`, aber mit rohem Musterindex
    ///
    /// Ein unbekannter Index lässt Pin und Zyklus unverändert.
    pub fn tick_index<P: OutputPin>(&mut self, pin: &mut P, index: u8) -> Result<bool, LedError> {
        let pattern = BlinkPattern::try_from(index)?;
        self.tick(pin, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Merkt sich den letzten Pegel (true = HIGH)
    struct LevelPin {
        high: Option<bool>,
    }

    impl ErrorType for LevelPin {
        type Error = Infallible;
    }

    impl OutputPin for LevelPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = Some(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = Some(true);
            Ok(())
        }
    }

    #[test]
    fn test_is_lit_wraps_step() {
        assert!(is_lit(BlinkPattern::WifiSearch, 0));
        assert!(!is_lit(BlinkPattern::WifiSearch, 1));
        assert!(is_lit(BlinkPattern::WifiSearch, 16));
        assert!(is_lit(BlinkPattern::Reserved, 15));
    }

    #[test]
    fn test_tick_drives_pin_active_low() {
        let mut pin = LevelPin { high: None };
        let mut led = LedIndicator::new();

        assert_eq!(led.tick(&mut pin, BlinkPattern::NtpFailure), Ok(true));
        assert_eq!(pin.high, Some(false));

        led.tick(&mut pin, BlinkPattern::NtpFailure).unwrap();
        assert_eq!(led.tick(&mut pin, BlinkPattern::NtpFailure), Ok(false));
        assert_eq!(pin.high, Some(true));
    }

    #[test]
    fn test_step_wraps_after_full_cycle() {
        let mut pin = LevelPin { high: None };
        let mut led = LedIndicator::new();
        for _ in 0..CYCLE_STEPS {
            led.tick(&mut pin, BlinkPattern::ShadesOk).unwrap();
        }
        assert_eq!(led.step(), 0);
    }

    #[test]
    fn test_tick_index_unknown_pattern_keeps_state() {
        let mut pin = LevelPin { high: None };
        let mut led = LedIndicator::new();
        assert_eq!(led.tick_index(&mut pin, 8), Err(LedError::UnknownPattern(8)));
        assert_eq!(led.step(), 0);
        assert_eq!(pin.high, None);
    }

    #[test]
    fn test_patterns_table_row_counts() {
        let lit: [usize; PATTERN_COUNT] =
            core::array::from_fn(|row| PATTERNS[row].iter().filter(|&&on| on).count());
        assert_eq!(lit, [8, 12, 2, 2, 6, 8, 6, 10]);
    }
}
