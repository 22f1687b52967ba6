//! Count-up statistic.

const COUNT_DURATION_MS: u64 = 2000;
const COUNT_STEPS: u64 = 60;

/// A statistic that counts up from zero once revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedCounter {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl AnimatedCounter {
    pub const fn new(target: u32, suffix: &'static str, label: &'static str) -> Self {
        Self {
            target,
            suffix,
            label,
        }
    }

    /// Value shown `since_reveal_ms` after the counter came into view, in
    /// 60 even steps over two seconds. Zero while unrevealed.
    pub fn value_at(&self, since_reveal_ms: Option<u64>) -> u32 {
        let Some(elapsed) = since_reveal_ms else {
            return 0;
        };
        if elapsed >= COUNT_DURATION_MS {
            return self.target;
        }
        let step = elapsed * COUNT_STEPS / COUNT_DURATION_MS;
        (u64::from(self.target) * step / COUNT_STEPS) as u32
    }

    /// Value with its suffix, e.g. `500+`.
    pub fn display(&self, since_reveal_ms: Option<u64>) -> String {
        format!("{}{}", self.value_at(since_reveal_ms), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_up_in_steps() {
        let counter = AnimatedCounter::new(500, "+", "Projects Done");
        assert_eq!(counter.value_at(None), 0);
        assert_eq!(counter.value_at(Some(0)), 0);
        assert_eq!(counter.value_at(Some(1000)), 250);
        assert_eq!(counter.value_at(Some(1999)), 491);
        assert_eq!(counter.value_at(Some(2000)), 500);
        assert_eq!(counter.display(Some(60_000)), "500+");
    }

    #[test]
    fn test_small_target() {
        let counter = AnimatedCounter::new(2, "M+", "Followers");
        assert_eq!(counter.value_at(Some(900)), 0);
        assert_eq!(counter.value_at(Some(1000)), 1);
        assert_eq!(counter.display(Some(2000)), "2M+");
    }

    #[test]
    fn test_long_after_reveal_holds_target() {
        let counter = AnimatedCounter::new(500, "+", "Projects Done");
        assert_eq!(counter.value_at(Some(u64::MAX)), 500);
        assert_eq!(counter.value_at(Some(u64::MAX / 2)), 500);
    }
}
