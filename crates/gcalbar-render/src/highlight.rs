//! Conky display markers.
//!
//! Emphasis is expressed with `${colorN}…${color0}` wrappers that conky
//! resolves at render time; the wrapped text itself is left untouched so the
//! visible column widths stay predictable.

/// Wrap `text` in a conky color marker for palette slot `color`.
///
/// The closing `${color0}` resets to the default palette slot, so markers
/// never nest or leak into following cells.
pub fn highlight(color: u8, text: &str) -> String {
    format!("${{color{color}}}{text}${{color0}}")
}

/// Escape `#` as `\#` for conky, which treats `#` as a comment character.
///
/// Applied at the compositor boundary, immediately before a line is handed
/// to the output sink. Formatter output is kept unescaped.
pub fn escape_hashes(line: &str) -> String {
    line.replace('#', "\\#")
}
