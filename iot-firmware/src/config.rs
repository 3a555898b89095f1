// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use iot_core::BlinkPattern;

// ============================================================================
// Gerät
// ============================================================================

/// Gerätename für Start-Meldungen
/// Wird zur Build-Zeit aus der Environment Variable DEVICE_NAME geladen
/// (siehe build.rs), sonst "iot-node"
pub const DEVICE_NAME: &str = match option_env!("DEVICE_NAME") {
    Some(name) => name,
    None => "iot-node",
};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin der Status-LED (low-aktiv)
pub const LED_GPIO_PIN: u8 = 8;

/// Dauer eines Schritts im Blinkmuster in Millisekunden
/// 16 Schritte × 125 ms = 2 s pro Zyklus
pub const BLINK_TICK_MS: u64 = 125;

/// Muster nach dem Start, bis die Anwendung ein anderes setzt
pub const STARTUP_PATTERN: BlinkPattern = BlinkPattern::WifiSearch;

/// Muster im Normalbetrieb
pub const RUNNING_PATTERN: BlinkPattern = BlinkPattern::ShadesOk;

// ============================================================================
// Konsole (UART0)
// ============================================================================

/// Baudrate der seriellen Konsole
pub const CONSOLE_BAUD: u32 = 115_200;

/// Eingabeaufforderung beim Start
pub const STARTUP_PROMPT: &str = "Press Enter to start ";

// ============================================================================
// Diagnose
// ============================================================================

/// Intervall des Heartbeat-Tasks in Millisekunden
/// Muss 1 s sein, sonst werden Sekunden-Flanken übersprungen
pub const HEARTBEAT_INTERVAL_MS: u64 = 1000;

/// Heartbeat-Zeichen und Watchdog-Meldungen ausgeben
pub const HEARTBEAT_ENABLED: bool = true;

/// Heap-Größe (Bytes)
pub const HEAP_SIZE: usize = 65536; // 64 KB
