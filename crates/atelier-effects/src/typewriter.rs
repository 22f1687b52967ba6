//! Line-by-line typewriter reveal.

/// Pause after a line finishes typing before it is committed.
pub const LINE_PAUSE_MS: u64 = 400;
/// How long the cursor keeps showing after the last character.
pub const CURSOR_LINGER_MS: u64 = 1500;

/// Types `lines` one character at a time, committing each finished line
/// before starting the next.
#[derive(Debug, Clone)]
pub struct TypeWriter {
    lines: Vec<String>,
    delay_ms: u64,
    speed_ms: u64,
}

/// Snapshot of a [`TypeWriter`] at some instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeWriterState<'a> {
    /// Lines already committed.
    pub completed: &'a [String],
    /// The partially typed line.
    pub current: &'a str,
    /// Typing has begun.
    pub started: bool,
    /// Typing and the cursor linger are both over.
    pub done: bool,
}

impl TypeWriterState<'_> {
    pub fn cursor_visible(&self) -> bool {
        self.started && !self.done
    }
}

impl TypeWriter {
    /// An empty `lines` types a single empty line.
    pub fn new<I, S>(lines: I, delay_ms: u64, speed_ms: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            delay_ms,
            speed_ms: speed_ms.max(1),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// State `elapsed_ms` after mounting.
    pub fn state_at(&self, elapsed_ms: u64) -> TypeWriterState<'_> {
        let mut state = TypeWriterState {
            completed: &[],
            current: "",
            started: elapsed_ms >= self.delay_ms,
            done: false,
        };
        if !state.started {
            return state;
        }

        let mut line_start = self.delay_ms;
        for (i, line) in self.lines.iter().enumerate() {
            state.completed = &self.lines[..i];
            let typed_end = line_start + self.typing_ms(line);

            if elapsed_ms < typed_end {
                let chars = ((elapsed_ms - line_start) / self.speed_ms) as usize;
                state.current = prefix(line, chars);
                return state;
            }

            state.current = line;
            if i + 1 == self.lines.len() {
                state.done = elapsed_ms >= typed_end + CURSOR_LINGER_MS;
                return state;
            }

            let commit = typed_end + LINE_PAUSE_MS;
            if elapsed_ms < commit {
                return state;
            }
            line_start = commit;
        }
        state
    }

    /// Time from mount until the cursor disappears.
    pub fn total_duration_ms(&self) -> u64 {
        let typing: u64 = self.lines.iter().map(|l| self.typing_ms(l)).sum();
        let pauses = (self.lines.len() as u64 - 1) * LINE_PAUSE_MS;
        self.delay_ms + typing + pauses + CURSOR_LINGER_MS
    }

    fn typing_ms(&self, line: &str) -> u64 {
        line.chars().count() as u64 * self.speed_ms
    }
}

/// The first `chars` characters of `s`.
fn prefix(s: &str, chars: usize) -> &str {
    s.char_indices().nth(chars).map_or(s, |(i, _)| &s[..i])
}
