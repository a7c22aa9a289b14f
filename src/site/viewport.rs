//! Vertical scroll position of the page view.

/// Scroll offset of the current page, in lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u16,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Scroll by `delta` lines, keeping the offset within `0..=max`.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = (self.offset as i32 + delta).clamp(0, max as i32);
        self.offset = next as u16;
    }

    /// Jump back to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(-3, 10);
        assert_eq!(viewport.offset(), 0);

        viewport.scroll_by(4, 10);
        assert_eq!(viewport.offset(), 4);

        viewport.scroll_by(50, 10);
        assert_eq!(viewport.offset(), 10);
    }

    #[test]
    fn test_scroll_to_top() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(7, 20);
        assert_eq!(viewport.offset(), 7);

        viewport.scroll_to_top();
        assert_eq!(viewport.offset(), 0);
    }
}
