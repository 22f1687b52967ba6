//! Block letter banner font for the atelier page loader.

/// Height of every glyph in rows.
pub const HEIGHT: usize = 5;

/// Width of a letter glyph in columns.
pub const LETTER_WIDTH: usize = 5;

/// Block letters A-Z (5 lines tall, 5 chars wide)
const LETTERS: [[&str; HEIGHT]; 26] = [
    // A
    [" ███ ", "█   █", "█████", "█   █", "█   █"],
    // B
    ["████ ", "█   █", "████ ", "█   █", "████ "],
    // C
    [" ████", "█    ", "█    ", "█    ", " ████"],
    // D
    ["████ ", "█   █", "█   █", "█   █", "████ "],
    // E
    ["█████", "█    ", "████ ", "█    ", "█████"],
    // F
    ["█████", "█    ", "████ ", "█    ", "█    "],
    // G
    [" ████", "█    ", "█  ██", "█   █", " ████"],
    // H
    ["█   █", "█   █", "█████", "█   █", "█   █"],
    // I
    ["█████", "  █  ", "  █  ", "  █  ", "█████"],
    // J
    ["█████", "   █ ", "   █ ", "█  █ ", " ██  "],
    // K
    ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
    // L
    ["█    ", "█    ", "█    ", "█    ", "█████"],
    // M
    ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
    // N
    ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
    // O
    [" ███ ", "█   █", "█   █", "█   █", " ███ "],
    // P
    ["████ ", "█   █", "████ ", "█    ", "█    "],
    // Q
    [" ███ ", "█   █", "█ █ █", "█  █ ", " ██ █"],
    // R
    ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
    // S
    [" ████", "█    ", " ███ ", "    █", "████ "],
    // T
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    // U
    ["█   █", "█   █", "█   █", "█   █", " ███ "],
    // V
    ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
    // W
    ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
    // X
    ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
    // Y
    ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
    // Z
    ["█████", "   █ ", "  █  ", " █   ", "█████"],
];

/// Word gap (5 lines tall, 3 chars wide)
const SPACE: [&str; HEIGHT] = ["   "; HEIGHT];

/// Placeholder for characters the font does not cover.
const BLANK: [&str; HEIGHT] = ["     "; HEIGHT];

/// Look up the glyph for a character. Letters are case-insensitive.
pub fn glyph(c: char) -> &'static [&'static str; HEIGHT] {
    match c.to_ascii_uppercase() {
        ' ' => &SPACE,
        upper @ 'A'..='Z' => &LETTERS[(upper as u8 - b'A') as usize],
        _ => &BLANK,
    }
}

/// Build a block letter banner.
///
/// # Arguments
/// * `text` - The text to render; characters outside A-Z render blank
///
/// # Returns
/// A vector of [`HEIGHT`] strings, each representing one line of the banner.
/// Glyphs are separated by a single column.
pub fn build_banner(text: &str) -> Vec<String> {
    (0..HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Width of the banner for `text` in columns.
pub fn banner_width(text: &str) -> usize {
    let glyphs = text.chars().count();
    let body: usize = text.chars().map(|c| glyph(c)[0].chars().count()).sum();
    body + glyphs.saturating_sub(1)
}
