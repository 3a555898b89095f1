// Konsolen-Eingabe - async Variante von iot_core::wait_for_user_input
//
// Die blockierende Variante aus iot-core würde den Executor anhalten,
// hier wartet stattdessen ein Embassy Timer zwischen den Abfragen.
use defmt::info;
use embassy_time::{Duration, Timer};
use iot_core::console::{INPUT_POLL_MS, InputLine};
use iot_core::{InputError, LineSource, write_input_echo, write_input_prompt};

use crate::SharedConsole;
use crate::clock::UptimeClock;

/// Fordert eine Eingabe an und wartet darauf
///
/// Die Konsole wird nur für Aufforderung und Echo gesperrt, damit der
/// Heartbeat Task während des Wartens weiter schreiben kann.
///
/// # Parameter
/// - `console`: gemeinsame Konsole (UART TX)
/// - `source`: Zeilenquelle (UART RX)
/// - `msg`: eigener Aufforderungstext, sonst Standardtext
pub async fn wait_for_user_input<S: LineSource>(
    console: &'static SharedConsole,
    source: &mut S,
    msg: Option<&str>,
) -> Result<InputLine, InputError> {
    let clock = UptimeClock::new();
    write_input_prompt(&mut *console.lock().await, clock.now(), msg)?;

    loop {
        if let Some(line) = source.poll_line()? {
            write_input_echo(&mut *console.lock().await, clock.now(), &line)?;
            info!("Console: received {} bytes", line.len());
            return Ok(line);
        }
        Timer::after(Duration::from_millis(u64::from(INPUT_POLL_MS))).await;
    }
}
