//! Display sink capability.
//!
//! The renderer never talks to a terminal or a file directly; it hands
//! finished figures to an injected `DisplaySink`. Tests and the JSON
//! export path use `RecordingSink`; the TUI crate provides a terminal
//! implementation.

use crate::figure::Figure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("display backend error: {0}")]
    Backend(String),
}

/// Something that can show (or otherwise consume) a finished figure.
pub trait DisplaySink {
    fn display(&mut self, figure: Figure) -> Result<(), SinkError>;
}

/// Sink that stores every figure it receives, in display order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub figures: Vec<Figure>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently displayed figure.
    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl DisplaySink for RecordingSink {
    fn display(&mut self, figure: Figure) -> Result<(), SinkError> {
        self.figures.push(figure);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Axis, Figure};

    #[test]
    fn recording_sink_keeps_display_order() {
        let mut sink = RecordingSink::new();
        sink.display(Figure::new("first", Axis::new("Time"), Axis::new("Price")))
            .unwrap();
        sink.display(Figure::new("second", Axis::new("Time"), Axis::new("PnL")))
            .unwrap();

        assert_eq!(sink.figures.len(), 2);
        assert_eq!(sink.figures[0].title, "first");
        assert_eq!(sink.last().unwrap().title, "second");
    }
}
