//! Display formatting for file metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;

/// Human-readable byte size: `512 B`, `12.3 KB`, `4.0 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Caption under the file input describing the current selection.
pub fn selection_caption(name: &str, size: u64) -> String {
    format!("{name} ({})", format_size(size))
}
