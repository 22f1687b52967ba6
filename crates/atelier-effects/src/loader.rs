//! Splash screen timing.

use crate::easing::{ease_in_out, window};

/// How long the splash stays up.
pub const LOADER_DURATION_MS: u64 = 1900;
const BAR_START_MS: u64 = 350;
const BAR_DURATION_MS: u64 = 700;
const TITLE_FADE_MS: u64 = 500;

/// Timing of the page loader splash.
#[derive(Debug, Clone, Default)]
pub struct PageLoader {
    dismissed: bool,
}

impl PageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the splash still covers the page.
    pub fn is_loading(&self, elapsed_ms: u64) -> bool {
        !self.dismissed && elapsed_ms < LOADER_DURATION_MS
    }

    /// Hide the splash early.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Fill of the loading bar, 0.0-1.0.
    pub fn bar_progress(&self, elapsed_ms: u64) -> f32 {
        ease_in_out(window(elapsed_ms, BAR_START_MS, BAR_DURATION_MS))
    }

    /// Opacity of a title line whose entrance is delayed by `delay_ms`.
    pub fn title_opacity(&self, elapsed_ms: u64, delay_ms: u64) -> f32 {
        window(elapsed_ms, delay_ms, TITLE_FADE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_timeline() {
        let loader = PageLoader::new();
        assert!(loader.is_loading(0));
        assert!(loader.is_loading(1899));
        assert!(!loader.is_loading(1900));
        assert_eq!(loader.bar_progress(0), 0.0);
        assert_eq!(loader.bar_progress(700), 0.5);
        assert_eq!(loader.bar_progress(1050), 1.0);
        assert_eq!(loader.title_opacity(100, 100), 0.0);
        assert_eq!(loader.title_opacity(600, 100), 1.0);
    }

    #[test]
    fn test_dismiss() {
        let mut loader = PageLoader::new();
        loader.dismiss();
        assert!(!loader.is_loading(10));
    }
}
