//! Heap-Diagnose auf der Konsole

use core::fmt::{self, Write};

use crate::stamp::{END_MARKER, StampTag, info_stamp};
use crate::traits::HeapProbe;
use crate::types::{ClockSnapshot, OrDash};

/// Sekunden, zu denen `report_heap_quarter` ausgibt (alle 15 s)
pub const QUARTER_MINUTE_TICKS: [u8; 4] = [4, 19, 34, 49];

const QUARTER_MODULE: &str = "report_heap_quarter:";
const QUARTER_HEADER: &str = "Free Heap (15 sec tick)";
// Endet mit Leerzeichen, info_stamp hängt ein weiteres an
const MEM_USAGE_HEADER: &str = "Free heap: ";

/// Gibt den freien Heap viermal pro Minute aus
///
/// Nur bei gesetztem `sec_edge` und einer Sekunde aus
/// [`QUARTER_MINUTE_TICKS`]. Gibt zurück, ob eine Zeile geschrieben wurde.
pub fn report_heap_quarter<W: Write, H: HeapProbe>(
    out: &mut W,
    clock: ClockSnapshot,
    probe: &H,
) -> Result<bool, fmt::Error> {
    if !clock.sec_edge || !QUARTER_MINUTE_TICKS.contains(&clock.second) {
        return Ok(false);
    }

    info_stamp(out, clock, QUARTER_MODULE, Some(QUARTER_HEADER), StampTag::Dbg, false)?;
    write!(out, "{}{}", probe.stats().free_bytes, END_MARKER)?;
    Ok(true)
}

/// Gibt freien Heap, Fragmentierung und größten freien Block aus
///
/// `module` ist der Name des Aufrufers, `msg` ein optionaler Zusatz. Das
/// Trennzeichen vor `msg` wird immer geschrieben, ohne Zusatz endet die
/// Zeile also mit `"  -END"`.
pub fn report_mem_usage<W: Write, H: HeapProbe>(
    out: &mut W,
    clock: ClockSnapshot,
    module: &str,
    msg: Option<&str>,
    probe: &H,
) -> fmt::Result {
    let stats = probe.stats();
    info_stamp(out, clock, module, Some(MEM_USAGE_HEADER), StampTag::Ack, false)?;
    write!(
        out,
        "{}. Heap fragmentation: {}%. Max Free Block Size: {}",
        stats.free_bytes,
        OrDash(stats.fragmentation_pct),
        OrDash(stats.max_free_block),
    )?;
    write!(out, " {}{}", msg.unwrap_or(""), END_MARKER)
}
