//! Raw input events and the trackers that turn them into directions.

use super::Position;
use std::time::Duration;

/// One raw event, as forwarded by the host's listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// `wheel` event. `scroll_top` is the page scroll offset at the time.
    Wheel { delta_y: f64, scroll_top: f64 },
    /// `keydown`, with the page scroll offset at the time.
    Key { key: Key, scroll_top: f64 },
    /// `touchstart`; `touches` is the number of active touch points.
    TouchStart { y: f64, touches: usize },
    TouchEnd { y: f64, scroll_top: f64 },
    /// Click on an indicator dot.
    Dot(Position),
    Scroll { scroll_top: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Down the page: next slide, then the footer.
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Space,
    Home,
    End,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            " " | "Spacebar" => Key::Space,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }

    pub fn intent(self) -> Option<super::Intent> {
        use super::Intent;
        match self {
            Key::ArrowDown | Key::Space => Some(Intent::Advance),
            Key::ArrowUp => Some(Intent::Retreat),
            Key::Home => Some(Intent::Home),
            Key::End => Some(Intent::End),
            Key::Other => None,
        }
    }
}

/// Sums wheel deltas until their magnitude passes a threshold.
///
/// A pause longer than `debounce` between two events starts a fresh sum, so
/// small unrelated nudges never add up to a slide change.
#[derive(Debug, Clone)]
pub struct WheelAccumulator {
    threshold: f64,
    debounce: Duration,
    total: f64,
    last_event: Option<Duration>,
}

impl WheelAccumulator {
    pub fn new(threshold: f64, debounce: Duration) -> Self {
        Self {
            threshold,
            debounce,
            total: 0.0,
            last_event: None,
        }
    }

    /// Add one delta. Fires at most once per threshold crossing.
    pub fn push(&mut self, delta_y: f64, now: Duration) -> Option<Direction> {
        if let Some(last) = self.last_event
            && now.saturating_sub(last) > self.debounce
        {
            self.total = 0.0;
        }
        self.last_event = Some(now);
        self.total += delta_y;

        if self.total.abs() <= self.threshold {
            return None;
        }
        let direction = if self.total > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.total = 0.0;
        Some(direction)
    }

    pub fn reset(&mut self) {
        self.total = 0.0;
        self.last_event = None;
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Single-finger vertical swipe recognizer.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    threshold: f64,
    start_y: Option<f64>,
}

impl TouchTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    /// Remember the start point; multi-touch gestures are not swipes.
    pub fn start(&mut self, y: f64, touches: usize) {
        self.start_y = (touches == 1).then_some(y);
    }

    /// Finish the gesture. A finger moving up the screen means "forward".
    pub fn end(&mut self, y: f64) -> Option<Direction> {
        let start = self.start_y.take()?;
        let delta = start - y;
        if delta.abs() <= self.threshold {
            return None;
        }
        Some(if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }
}
