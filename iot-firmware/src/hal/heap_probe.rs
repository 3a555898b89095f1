// Heap-Statistik über esp-alloc
//
// esp-alloc liefert nur freie und belegte Bytes. Fragmentierung und
// größter freier Block bleiben deshalb leer und werden als "-" ausgegeben.

use iot_core::{HeapProbe, HeapStats};

/// Real Hardware Heap Probe
///
/// Liest den globalen Allocator `esp_alloc::HEAP`, der in main.rs
/// mit `heap_allocator!` eingerichtet wird.
#[derive(Clone, Copy, Default)]
pub struct EspHeapProbe;

impl HeapProbe for EspHeapProbe {
    fn stats(&self) -> HeapStats {
        HeapStats {
            free_bytes: esp_alloc::HEAP.free(),
            fragmentation_pct: None,
            max_free_block: None,
        }
    }
}
