//! Rotating tagline word.

use std::time::{Duration, Instant};

/// Default time each word stays on screen.
pub const DEFAULT_ROTATION_MS: u64 = 2500;

/// Cycles through a list of words on a fixed interval.
#[derive(Debug, Clone)]
pub struct RotatingText {
    words: Vec<String>,
    index: usize,
    interval: Duration,
    last_change: Instant,
}

impl RotatingText {
    pub fn new(words: Vec<String>, interval: Duration) -> Self {
        Self {
            words,
            index: 0,
            interval,
            last_change: Instant::now(),
        }
    }

    /// The word currently shown, or `""` when there are no words.
    pub fn current(&self) -> &str {
        self.words.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// Advance to the next word if the interval has passed.
    ///
    /// Returns true if the word changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.words.len() < 2 || now.duration_since(self.last_change) < self.interval {
            return false;
        }
        self.index = (self.index + 1) % self.words.len();
        self.last_change = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        vec!["websites".into(), "brands".into(), "products".into()]
    }

    #[test]
    fn test_rotates_after_interval() {
        let mut text = RotatingText::new(words(), Duration::from_millis(100));
        let start = text.last_change;
        assert_eq!(text.current(), "websites");

        assert!(!text.tick(start + Duration::from_millis(50)));
        assert!(text.tick(start + Duration::from_millis(100)));
        assert_eq!(text.current(), "brands");
    }

    #[test]
    fn test_wraps_around() {
        let mut text = RotatingText::new(words(), Duration::from_millis(10));
        let mut now = text.last_change;
        for _ in 0..3 {
            now += Duration::from_millis(10);
            text.tick(now);
        }
        assert_eq!(text.current(), "websites");
    }

    #[test]
    fn test_single_or_no_words() {
        let mut text = RotatingText::new(vec!["only".into()], Duration::ZERO);
        assert!(!text.tick(Instant::now()));
        assert_eq!(text.current(), "only");

        let empty = RotatingText::new(Vec::new(), Duration::ZERO);
        assert_eq!(empty.current(), "");
    }
}
