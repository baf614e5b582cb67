//! Render sink interface
//!
//! The orchestrator hands one `Frame` per step to a `RenderSink`. Drawing is
//! entirely the sink's business; `hud` provides a text implementation.

pub mod hud;

use std::time::Duration;

use crate::sim::Session;

pub use hud::{HudRenderer, format_clock, hud_lines};

/// What the current screen needs drawn
#[derive(Debug, Clone, Copy)]
pub enum Frame<'a> {
    Start,
    Instructions,
    Running(&'a Session),
    GameOver { elapsed: Duration, score: u64 },
}

pub trait RenderSink {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Sink that draws nothing (headless tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {}
}
