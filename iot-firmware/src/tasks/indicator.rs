// Indicator Task - Steuert die Status-LED über feste Blinkmuster
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;
use esp_hal::gpio::Output;

use crate::config::{BLINK_TICK_MS, STARTUP_PATTERN};
use crate::{BlinkPattern, LedIndicator, PatternReceiver};

/// Indicator Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// - Schaltet pro Tick einen Schritt im aktuellen Blinkmuster weiter
/// - Übernimmt neue Muster aus dem Channel (non-blocking)
/// - Ein Musterwechsel behält die Zyklus-Position bei
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `P: OutputPin` ermöglicht:
/// - Real Hardware (esp_hal::gpio::Output) im Production-Code
/// - Mock Implementation in Tests
pub async fn indicator_logic<P: OutputPin>(mut led: P, pattern_receiver: PatternReceiver) {
    let mut indicator = LedIndicator::new();
    let mut pattern: BlinkPattern = STARTUP_PATTERN;
    info!("LED: starting with {}", pattern);

    loop {
        // Prüfe auf neues Muster (non-blocking)
        if let Ok(next) = pattern_receiver.try_receive() {
            if next != pattern {
                info!("LED: pattern {} -> {}", pattern, next);
                pattern = next;
            }
        }

        // Fehler nur loggen, der Rhythmus läuft weiter
        if let Err(e) = indicator.tick(&mut led, pattern) {
            error!("LED: tick failed: {}", e);
        }

        Timer::after(Duration::from_millis(BLINK_TICK_MS)).await;
    }
}

/// Indicator Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `led`: GPIO-Ausgang der Status-LED (in main.rs mit Level::High = aus erstellt)
/// - `pattern_receiver`: Channel Receiver für Musterwechsel
#[embassy_executor::task]
pub async fn indicator_task(led: Output<'static>, pattern_receiver: PatternReceiver) {
    indicator_logic(led, pattern_receiver).await;
}
