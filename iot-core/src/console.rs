//! Konsolen-Ein-/Ausgabe über einen seriellen Byte-Strom
//!
//! `SerialLineSource` und `ConsoleWriter` adaptieren `embedded_io`-Geräte
//! (z.B. UART) an `LineSource` bzw. `core::fmt::Write`.

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::stamp::{StampTag, info_stamp};
use crate::traits::{InputError, LineSource};
use crate::types::ClockSnapshot;

/// Maximale Länge einer Eingabezeile, längere Eingaben werden abgeschnitten
pub const INPUT_LINE_LEN: usize = 80;

/// Wartezeit zwischen zwei Abfragen der Eingabe
pub const INPUT_POLL_MS: u32 = 100;

pub type InputLine = String<INPUT_LINE_LEN>;

const MODULE: &str = "wait_for_user_input:";
const DEFAULT_PROMPT: &str = "Enter text to proceed ";
const ECHO_HEADER: &str = "Input stream: ";

// ============================================================================
// Serielle Adapter
// ============================================================================

/// Sammelt Bytes bis zum Zeilenende (`\n`)
///
/// `\r` wird verworfen, Bytes jenseits von [`INPUT_LINE_LEN`] ebenfalls.
/// Die Zeile wird als UTF-8 gelesen, ein ungültiger Rest (z.B. ein beim
/// Abschneiden halbiertes Zeichen) fällt weg.
pub struct SerialLineSource<R> {
    reader: R,
    line: Vec<u8, INPUT_LINE_LEN>,
}

impl<R> SerialLineSource<R>
where
    R: embedded_io::Read + embedded_io::ReadReady,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> LineSource for SerialLineSource<R>
where
    R: embedded_io::Read + embedded_io::ReadReady,
{
    fn poll_line(&mut self) -> Result<Option<InputLine>, InputError> {
        let mut byte = [0u8; 1];
        while self.reader.read_ready().map_err(|_| InputError::ReadFailed)? {
            let n = self
                .reader
                .read(&mut byte)
                .map_err(|_| InputError::ReadFailed)?;
            if n == 0 {
                break;
            }
            match byte[0] {
                b'\n' => {
                    let line = utf8_line(&self.line);
                    self.line.clear();
                    return Ok(Some(line));
                }
                b'\r' => {}
                b => {
                    // Überlange Zeilen werden still abgeschnitten
                    let _ = self.line.push(b);
                }
            }
        }
        Ok(None)
    }
}

/// Gültiger UTF-8-Anfang der gesammelten Bytes
fn utf8_line(bytes: &[u8]) -> InputLine {
    let valid = match core::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    };
    // passt immer: höchstens INPUT_LINE_LEN Bytes
    InputLine::try_from(valid).unwrap_or_default()
}

/// `core::fmt::Write` über einem `embedded_io::Write`-Gerät
pub struct ConsoleWriter<W> {
    writer: W,
}

impl<W: embedded_io::Write> ConsoleWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> Write for ConsoleWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writer.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

// ============================================================================
// Benutzer-Eingabe
// ============================================================================

/// Eingabeaufforderung, `msg` ersetzt den Standardtext
pub fn write_input_prompt<W: Write>(
    out: &mut W,
    clock: ClockSnapshot,
    msg: Option<&str>,
) -> fmt::Result {
    let prompt = msg.unwrap_or(DEFAULT_PROMPT);
    info_stamp(out, clock, MODULE, Some(prompt), StampTag::Ack, true)
}

/// Echo der empfangenen Zeile
pub fn write_input_echo<W: Write>(out: &mut W, clock: ClockSnapshot, line: &str) -> fmt::Result {
    info_stamp(out, clock, MODULE, Some(ECHO_HEADER), StampTag::Ack, false)?;
    out.write_str(line)?;
    out.write_str(" - END\n")
}

/// Wartet (blockierend) auf eine Eingabezeile
///
/// Fragt `source` alle [`INPUT_POLL_MS`] ms ab, bis eine Zeile vorliegt,
/// und gibt sie als Echo aus. Für Embassy-Tasks gibt es eine async Variante
/// in der Firmware.
pub fn wait_for_user_input<W, S, D>(
    out: &mut W,
    clock: ClockSnapshot,
    source: &mut S,
    delay: &mut D,
    msg: Option<&str>,
) -> Result<InputLine, InputError>
where
    W: Write,
    S: LineSource,
    D: DelayNs,
{
    write_input_prompt(out, clock, msg)?;
    loop {
        if let Some(line) = source.poll_line()? {
            write_input_echo(out, clock, &line)?;
            return Ok(line);
        }
        delay.delay_ms(INPUT_POLL_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_input_prompt_default() {
        let mut out: String<96> = String::new();
        write_input_prompt(&mut out, ClockSnapshot::at(9, 0, 1), None).unwrap();
        assert_eq!(
            out.as_str(),
            "ACK 09:00:01 wait_for_user_input: Enter text to proceed  -END\n"
        );
    }

    #[test]
    fn test_write_input_prompt_custom() {
        let mut out: String<96> = String::new();
        write_input_prompt(&mut out, ClockSnapshot::at(9, 0, 1), Some("SSID?")).unwrap();
        assert_eq!(out.as_str(), "ACK 09:00:01 wait_for_user_input: SSID? -END\n");
    }

    #[test]
    fn test_write_input_echo() {
        let mut out: String<96> = String::new();
        write_input_echo(&mut out, ClockSnapshot::at(9, 0, 2), "hello").unwrap();
        assert_eq!(
            out.as_str(),
            "ACK 09:00:02 wait_for_user_input: Input stream:  hello - END\n"
        );
    }
}
