//! IoT Core - Platform-agnostic Utility Routines
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Hardware kommt nur über Traits herein (`embedded_hal::digital::OutputPin`,
//! `embedded_hal::delay::DelayNs`, `embedded_io`, [`HeapProbe`]).
//! Alle Ausgaben landen in `heapless`-Puffern fester Größe oder in einem
//! `core::fmt::Write` des Aufrufers, nie auf dem Heap.

#![no_std]

pub mod checksum;
pub mod console;
pub mod diagnostics;
pub mod email;
pub mod flash;
pub mod heartbeat;
pub mod indicator;
pub mod numtext;
pub mod parse;
pub mod stamp;
pub mod timestamp;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use checksum::{xor8, xor16};
pub use console::{
    ConsoleWriter, InputLine, SerialLineSource, wait_for_user_input, write_input_echo,
    write_input_prompt,
};
pub use diagnostics::{report_heap_quarter, report_mem_usage};
pub use email::render_email_body;
pub use flash::bounded_c_str_len;
pub use heartbeat::Heartbeat;
pub use indicator::{LedIndicator, is_lit};
pub use numtext::{format_bounded, parse_u16_digits, u16_to_digits};
pub use parse::string_to_bool;
pub use stamp::{StampTag, info_stamp};
pub use timestamp::format_timestamp;
pub use traits::{HeapProbe, InputError, LedError, LineSource};
pub use types::{BlinkPattern, ClockSnapshot, HeapStats, UnknownPattern};

/// Version dieser Bibliothek
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
