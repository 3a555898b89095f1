//! Zeitstempel-Formatierung "HH:MM:SS "

use heapless::String;

use crate::types::ClockSnapshot;

/// Länge eines formatierten Zeitstempels inkl. abschließendem Leerzeichen
pub const TIMESTAMP_LEN: usize = 9;

pub type Timestamp = String<TIMESTAMP_LEN>;

/// Formatiert die Uhrzeit als "HH:MM:SS " (immer zweistellig, mit Leerzeichen)
///
/// Werte über 99 werden modulo 100 dargestellt, das Layout bleibt fest.
///
/// # Beispiele
///
/// ```
/// # use iot_core::{ClockSnapshot, format_timestamp};
/// let ts = format_timestamp(ClockSnapshot::at(8, 5, 9));
/// assert_eq!(ts.as_str(), "08:05:09 ");
/// ```
pub fn format_timestamp(clock: ClockSnapshot) -> Timestamp {
    let mut ts = Timestamp::new();
    push_two_digits(&mut ts, clock.hour);
    push_char(&mut ts, ':');
    push_two_digits(&mut ts, clock.minute);
    push_char(&mut ts, ':');
    push_two_digits(&mut ts, clock.second);
    push_char(&mut ts, ' ');
    ts
}

fn push_two_digits(ts: &mut Timestamp, value: u8) {
    push_char(ts, char::from(b'0' + value / 10 % 10));
    push_char(ts, char::from(b'0' + value % 10));
}

// Die Kapazität passt exakt zum Layout, push kann hier nicht fehlschlagen
fn push_char(ts: &mut Timestamp, c: char) {
    let _ = ts.push(c);
}
