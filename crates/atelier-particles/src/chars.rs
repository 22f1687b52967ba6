//! Glyphs used to draw particles into terminal cells.

/// Particle glyphs from smallest to largest radius.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '●'];

/// Pick a glyph for a particle radius in virtual pixels.
pub fn particle_char(radius: f32) -> char {
    if radius < 1.8 {
        PARTICLE_CHARS[0]
    } else if radius < 2.7 {
        PARTICLE_CHARS[1]
    } else {
        PARTICLE_CHARS[2]
    }
}
