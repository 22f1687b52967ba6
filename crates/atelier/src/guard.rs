//! Input guards that swallow inspection and clipboard shortcuts.
//!
//! A cosmetic deterrent; anyone at the terminal can get around it.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Stateless filter over terminal events.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputGuard {
    enabled: bool,
}

impl InputGuard {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether `event` should be dropped before the page sees it.
    pub fn blocks(&self, event: &Event) -> bool {
        if !self.enabled {
            return false;
        }
        match event {
            Event::Key(key) => is_guarded_key(key),
            Event::Paste(_) => true,
            _ => false,
        }
    }
}

fn is_guarded_key(key: &KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::F(12) => true,
        KeyCode::Char(c) if ctrl && shift => matches!(c.to_ascii_lowercase(), 'i' | 'j' | 'c'),
        KeyCode::Char(c) if ctrl => matches!(c, 'u' | 's' | 'p'),
        _ => false,
    }
}
