//! Whitespace normalization for extracted document text

/// Normalize linearized page text into one phrase per line.
///
/// Each line is trimmed, then split again on runs of two or more spaces,
/// which is where extracted markup tends to join unrelated inline phrases.
/// Empty fragments are dropped and the survivors joined with `\n`.
pub fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
