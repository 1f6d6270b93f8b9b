use serde::{Deserialize, Serialize};

/// The pagination half of a query descriptor: absolute offset plus the number
/// of records requested for one round trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub rows: usize,
}

impl PageWindow {
    pub fn first(rows: usize) -> Self {
        PageWindow { start: 0, rows }
    }

    /// Window for the page after this one. The offset moves by the requested
    /// row count, not by how many records actually came back.
    pub fn advance(self) -> Self {
        PageWindow {
            start: self.start + self.rows,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_requested_rows() {
        let window = PageWindow::first(100);
        assert_eq!(window.start, 0);
        let next = window.advance();
        assert_eq!(next, PageWindow { start: 100, rows: 100 });
        assert_eq!(next.advance().start, 200);
    }
}
