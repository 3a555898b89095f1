// Uptime-Uhr: liefert ClockSnapshots aus der Embassy-Zeit seit dem Start
//
// Ersetzt die echte Uhrzeit (NTP/RTC), solange keine Zeitquelle angebunden ist.

use embassy_time::Instant;
use iot_core::ClockSnapshot;

const SECS_PER_DAY: u64 = 24 * 3600;

/// Uhr auf Basis der Laufzeit seit dem Boot
///
/// `tick()` setzt die Edge-Flags durch Vergleich mit dem vorherigen Aufruf,
/// `now()` liefert die Zeit ohne Flanken (z.B. für Eingabe-Meldungen).
pub struct UptimeClock {
    last: Option<ClockSnapshot>,
}

impl UptimeClock {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Aktuelle Zeit ohne Edge-Flags
    pub fn now(&self) -> ClockSnapshot {
        snapshot_from_secs(Instant::now().as_secs())
    }

    /// Aktuelle Zeit mit Flanken seit dem letzten `tick()`
    pub fn tick(&mut self) -> ClockSnapshot {
        let mut clock = self.now();
        match self.last {
            Some(last) => {
                clock.sec_edge = clock.second != last.second;
                clock.min_edge = clock.minute != last.minute;
                clock.hour_edge = clock.hour != last.hour;
            }
            // Erster Aufruf zählt als neue Sekunde
            None => clock.sec_edge = true,
        }
        self.last = Some(clock);
        clock
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_from_secs(uptime_secs: u64) -> ClockSnapshot {
    let secs = uptime_secs % SECS_PER_DAY;
    ClockSnapshot::at(
        (secs / 3600) as u8,
        (secs / 60 % 60) as u8,
        (secs % 60) as u8,
    )
}
