/// The vertical write position for one render pass.
///
/// Starts at the top margin of page 0 and only ever moves down the page, or on
/// to the top of the next one. The footer's floor is computed by
/// [`LayoutCursor::clamped_below`] without touching the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    y: f32,
    page: usize,
}

impl LayoutCursor {
    pub fn new(start: f32) -> Self {
        Self { y: start, page: 0 }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the page being written.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Moves to `start` on the following page.
    pub fn next_page(&mut self, start: f32) {
        self.page += 1;
        self.y = start;
    }

    /// Moves the cursor down by `amount`. Negative amounts are ignored.
    pub fn advance(&mut self, amount: f32) {
        if amount > 0.0 {
            self.y -= amount;
        } else if amount < 0.0 {
            log::debug!("Ignoring upward cursor move of {:.2}pt", amount);
        }
    }

    /// `gap` below the cursor, but never lower than `floor`.
    pub fn clamped_below(&self, gap: f32, floor: f32) -> f32 {
        (self.y - gap).max(floor)
    }
}
