// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::{error, info};

// Projekt-Module und Konfiguration
use iot_firmware::clock::UptimeClock;
use iot_firmware::config::{
    CONSOLE_BAUD, DEVICE_NAME, HEAP_SIZE, RUNNING_PATTERN, STARTUP_PROMPT,
};
use iot_firmware::hal::{ConsoleInput, EspHeapProbe};
use iot_firmware::tasks::{heartbeat_task, indicator_task, wait_for_user_input};
use iot_firmware::{ConsoleWriter, PatternChannel, SharedConsole};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Wartet dann auf eine Eingabe über die Konsole und schaltet die LED
/// in den Normalbetrieb.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (Quelle für die Heap-Diagnose)
    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("{} starting, iot-core v{}", DEVICE_NAME, iot_core::version());

    // Status-LED: low-aktiv, also mit HIGH (= aus) starten
    let led = Output::new(peripherals.GPIO8, Level::High, OutputConfig::default());

    // Konsole auf UART0 (TX = GPIO16, RX = GPIO17)
    let uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(CONSOLE_BAUD),
    )
    .expect("Failed to initialize console UART")
    .with_tx(peripherals.GPIO16)
    .with_rx(peripherals.GPIO17);
    let (uart_rx, uart_tx) = uart.split();

    // Konsole muss 'static sein für Tasks
    static CONSOLE: static_cell::StaticCell<SharedConsole> = static_cell::StaticCell::new();
    let console = &*CONSOLE.init(SharedConsole::new(ConsoleWriter::new(uart_tx)));

    // Pattern-Channel erstellen (main → LED Task)
    static PATTERN_CHANNEL: static_cell::StaticCell<PatternChannel> =
        static_cell::StaticCell::new();
    let pattern_channel = &*PATTERN_CHANNEL.init(PatternChannel::new());

    // Spawn Tasks
    spawner
        .spawn(indicator_task(led, pattern_channel.receiver()))
        .unwrap();
    spawner.spawn(heartbeat_task(console)).unwrap();

    // Speicherbericht nach der Initialisierung
    {
        let mut out = console.lock().await;
        if iot_core::report_mem_usage(
            &mut *out,
            UptimeClock::new().now(),
            "main:",
            Some(DEVICE_NAME),
            &EspHeapProbe,
        )
        .is_err()
        {
            error!("Console: write failed");
        }
    }

    // Auf Benutzer warten, danach Normalbetrieb
    let mut input = ConsoleInput::new(uart_rx);
    match wait_for_user_input(console, &mut input, Some(STARTUP_PROMPT)).await {
        Ok(_) => pattern_channel.send(RUNNING_PATTERN).await,
        Err(e) => error!("Console: input failed: {}", e),
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
