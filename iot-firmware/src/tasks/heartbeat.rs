// Heartbeat Task - Lebenszeichen und Heap-Diagnose auf der Konsole
use defmt::{error, warn};
use embassy_time::{Duration, Ticker};
use iot_core::{Heartbeat, report_heap_quarter};

use crate::clock::UptimeClock;
use crate::config::{HEARTBEAT_ENABLED, HEARTBEAT_INTERVAL_MS};
use crate::hal::EspHeapProbe;
use crate::{HeapProbe, SharedConsole};

/// Heartbeat Logic
///
/// Einmal pro Sekunde:
/// - Heap-Bericht zu den Sekunden 4, 19, 34, 49
/// - rotierendes Lebenszeichen, zur vollen Minute mit Speicherbericht
pub async fn heartbeat_logic<H: HeapProbe>(console: &'static SharedConsole, probe: H) {
    let mut clock = UptimeClock::new();
    let mut heartbeat = Heartbeat::new();
    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_INTERVAL_MS));

    loop {
        ticker.next().await;
        let now = clock.tick();
        if !now.sec_edge {
            warn!("Heartbeat: no second edge at {}", now);
        }

        let mut out = console.lock().await;
        if report_heap_quarter(&mut *out, now, &probe).is_err() {
            error!("Heartbeat: heap report failed");
        }
        if heartbeat
            .tick(&mut *out, now, &probe, HEARTBEAT_ENABLED)
            .is_err()
        {
            error!("Heartbeat: console write failed");
        }
    }
}

/// Heartbeat Task - Embassy Task für parallele Ausführung
#[embassy_executor::task]
pub async fn heartbeat_task(console: &'static SharedConsole) {
    heartbeat_logic(console, EspHeapProbe).await;
}
