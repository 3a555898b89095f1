// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die Traits aus iot-core mit der ESP32-Hardware.
// Die LED braucht keinen Wrapper: esp_hal::gpio::Output implementiert
// embedded_hal::digital::OutputPin direkt.

pub mod heap_probe;

pub use heap_probe::EspHeapProbe;

use esp_hal::Blocking;
use esp_hal::uart::{UartRx, UartTx};
use iot_core::SerialLineSource;

/// Sende-Hälfte des Konsolen-UART
pub type ConsoleTx = UartTx<'static, Blocking>;

/// Empfangs-Hälfte des Konsolen-UART, zeilenweise gelesen
pub type ConsoleInput = SerialLineSource<UartRx<'static, Blocking>>;
