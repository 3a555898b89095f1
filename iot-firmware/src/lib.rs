// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod clock;
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von iot-core
pub use iot_core::{BlinkPattern, ClockSnapshot, ConsoleWriter, HeapProbe, LedIndicator};

// Embassy Channel- und Mutex-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::mutex::Mutex;

use crate::hal::ConsoleTx;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Receiver<'static, NoopRawMutex, BlinkPattern, 1>
// Nutze:  PatternReceiver

/// Channel für Blinkmuster (Anwendung → Indicator Task)
/// - 1: Nachrichten-Kapazität (nur das jeweils neueste Muster zählt)
pub type PatternChannel = Channel<NoopRawMutex, BlinkPattern, 1>;

/// Sender für Blinkmuster
pub type PatternSender = Sender<'static, NoopRawMutex, BlinkPattern, 1>;

/// Receiver für Blinkmuster (Indicator Task empfängt)
pub type PatternReceiver = Receiver<'static, NoopRawMutex, BlinkPattern, 1>;

/// Gemeinsame Konsole: Heartbeat Task und Eingabe schreiben auf denselben UART
pub type SharedConsole = Mutex<NoopRawMutex, ConsoleWriter<ConsoleTx>>;
