//! Selection state of the tab strip, kept free of any DOM concerns so the
//! movement rules are testable on the host target.

/// Where `advance` moves the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Single-selection cursor over a fixed, non-empty list of tabs.
///
/// The tab list itself lives in the component; the strip only knows how many
/// tabs exist and which one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStrip {
    len: usize,
    current: usize,
}

impl TabStrip {
    /// Starts at the first tab. `len` must be at least 1; the page always
    /// declares the stack-trace tab.
    pub fn new(len: usize) -> Self {
        assert!(len >= 1, "tab strip needs at least one tab");
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Jump to `index`. Out-of-range values are ignored; the UI only offers
    /// buttons for valid indices, so this is purely defensive.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Move the selection by one tab, wrapping around at both ends.
    pub fn advance(&mut self, direction: Direction) {
        self.current = match direction {
            Direction::Previous => {
                if self.current == 0 {
                    self.len - 1
                } else {
                    self.current - 1
                }
            }
            Direction::Next => {
                if self.current + 1 == self.len {
                    0
                } else {
                    self.current + 1
                }
            }
        };
    }
}
