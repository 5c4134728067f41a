//! Rendering contract of the slide deck.
//!
//! Slides are stacked at a vertical offset proportional to their distance
//! from the active slide, with reduced opacity and scale when inactive. At
//! the footer every slide sits above the viewport (the footer counts as
//! position `N`).

use super::{Navigator, Position, Settings};

#[derive(Debug, Clone, PartialEq)]
pub struct SlideStyle {
    pub index: usize,
    /// `translateY` in percent of the slide height.
    pub offset_percent: f64,
    pub opacity: f64,
    pub scale: f64,
    pub active: bool,
}

impl SlideStyle {
    pub fn compute(index: usize, position: Position, len: usize, settings: &Settings) -> Self {
        let anchor = match position {
            Position::Slide(i) => i,
            Position::Footer => len,
        };
        let active = position == Position::Slide(index);
        Self {
            index,
            offset_percent: (index as f64 - anchor as f64) * 100.0,
            opacity: if active { 1.0 } else { settings.inactive_opacity },
            scale: if active { 1.0 } else { settings.inactive_scale },
            active,
        }
    }

    /// Inline `style` attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateY({}%) scale({}); opacity: {};",
            self.offset_percent, self.scale, self.opacity
        )
    }
}

/// Everything the deck chrome shows for one navigator state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckView {
    pub position: Position,
    pub slides: Vec<SlideStyle>,
    /// Fill fraction of the progress bar, `0.0..=1.0`.
    pub progress: f64,
    pub counter: String,
    pub at_footer: bool,
}

impl DeckView {
    /// Progress bar width as a CSS percentage.
    pub fn progress_css(&self) -> String {
        format!("{:.2}%", self.progress * 100.0)
    }
}

pub fn progress(position: Position, len: usize) -> f64 {
    match position {
        Position::Footer => 1.0,
        Position::Slide(_) if len == 0 => 0.0,
        Position::Slide(i) => (i + 1) as f64 / len as f64,
    }
}

pub fn counter_label(position: Position, len: usize) -> String {
    match position {
        Position::Footer => "Footer".to_string(),
        Position::Slide(i) => format!("{} / {}", i + 1, len),
    }
}

impl Navigator {
    pub fn view(&self) -> DeckView {
        let position = self.position();
        DeckView {
            position,
            slides: (0..self.len)
                .map(|i| SlideStyle::compute(i, position, self.len, &self.settings))
                .collect(),
            progress: progress(position, self.len),
            counter: counter_label(position, self.len),
            at_footer: position == Position::Footer,
        }
    }
}
