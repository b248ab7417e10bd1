use crate::error::{Error, Result};
use serde::Serialize;

/// Requested slice of a playlist, before the playlist size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: Option<usize>,
}

impl Selection {
    /// The whole playlist.
    pub fn full() -> Self {
        Self { start: 1, end: None }
    }

    /// Resolve against the playlist size. Positions are 1-based and
    /// inclusive; a start below 1 clamps up to 1 and `end` clamps down to the
    /// playlist length, while a `start` past the end is refused outright.
    pub fn resolve(&self, total: usize) -> Result<SelectionRange> {
        let start = self.start.max(1);

        if let Some(end) = self.end {
            if end < start {
                return Err(Error::Validation(format!(
                    "range end {end} comes before start {start}"
                )));
            }
        }
        if total == 0 {
            return Err(Error::Validation(
                "no videos found (the playlist may be empty or private)".into(),
            ));
        }
        if start > total {
            return Err(Error::Validation(format!(
                "start position {start} is past the end of the playlist ({total} videos)"
            )));
        }

        Ok(SelectionRange {
            start,
            end: self.end.unwrap_or(total).min(total),
        })
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::full()
    }
}

/// A selection resolved against a concrete playlist: both bounds are
/// 1-based, inclusive and within the playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start - 1..self.end]
    }
}
