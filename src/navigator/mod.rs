//! Scroll-driven slide navigator.
//!
//! The home page presents its featured articles as fixed, full-viewport
//! slides. One discrete "scroll intent" (a wheel gesture, a key press, a
//! swipe, or a click on an indicator dot) moves exactly one step. This module
//! is the authoritative model of that behavior: the generate stage renders
//! its initial [`DeckView`](view::DeckView), and `static/slides.js` mirrors
//! the same state machine in the browser.
//!
//! Outside the generate stage nothing in the crate drives the model at
//! runtime. It serves as the executable reference for `slides.js`: the unit
//! tests here pin the behavior, and the `browser_slides` integration test
//! replays one key sequence through both and compares the results.
//!
//! # State Machine
//!
//! ```text
//!             advance / jump / home / end
//!   Idle(i) ───────────────────────────────► Transitioning { from, to }
//!      ▲                                              │
//!      │ settle delay elapsed, to = Slide(j)          │ settle delay elapsed,
//!      └──────────────────────────────────────────────┤ to = Footer
//!                                                     ▼
//!   AtFooter ◄────────────────────────────────────────┘
//!      │
//!      └── retreat ──► Transitioning { Footer → Slide(N-1) }
//! ```
//!
//! - While `Transitioning`, every intent is dropped. Nothing is queued.
//! - The active position switches to the target as soon as a transition
//!   starts, so the UI reflects the intent before the scroll lands.
//! - The footer is its own [`Position`] variant, never an index `N`.
//! - Wheel, key and swipe input is only handled while the page scroll offset
//!   lies within the deck. At the footer, forward input is left to the
//!   browser so the page keeps scrolling into the content below.
//!
//! # Time
//!
//! The model reads no clock. Every entry point takes `now`, a monotonic
//! [`Duration`] since mount (a DOM event's `timeStamp` in the browser). The
//! transition lock is released lazily: the first call at or after
//! `settles_at` finishes the transition.
//!
//! The lock is a fixed delay matched to the browser's smooth-scroll duration,
//! not an animation-completion signal. A slow scroll can therefore still be
//! moving when the lock opens.

pub mod input;
pub mod listeners;
pub mod view;

use crate::config::NavigatorConfig;
use input::{Direction, Input, TouchTracker, WheelAccumulator};
use std::time::Duration;
use tracing::{debug, trace};

/// Where the navigator is resting or heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Slide(usize),
    /// The trailing region after the last slide.
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle(usize),
    Transitioning {
        from: Position,
        to: Position,
        settles_at: Duration,
    },
    AtFooter,
}

/// A normalized navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    /// Direct jump; out-of-range targets are clamped to the last slide.
    Jump(usize),
    /// The distinguished footer indicator dot.
    Footer,
    Home,
    End,
}

/// Vertical layout of the navigator inside the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Document offset of the navigator's top edge.
    pub origin: f64,
    pub viewport_height: f64,
}

/// Sub-pixel slack for scroll positions reported by browsers.
const EDGE_TOLERANCE: f64 = 1.0;

impl Geometry {
    /// Absolute scroll offset that shows `position`.
    pub fn offset_of(&self, position: Position, len: usize) -> f64 {
        let steps = match position {
            Position::Slide(i) => i,
            Position::Footer => len,
        };
        self.origin + steps as f64 * self.viewport_height
    }

    /// Whether `scroll_top` lies within the navigator, footer start included.
    pub fn contains(&self, scroll_top: f64, len: usize) -> bool {
        scroll_top >= self.origin - EDGE_TOLERANCE
            && scroll_top <= self.offset_of(Position::Footer, len) + EDGE_TOLERANCE
    }

    /// Position nearest to `scroll_top`; anything past the last slide's
    /// midpoint into the trailing region counts as the footer.
    pub fn nearest(&self, scroll_top: f64, len: usize) -> Position {
        if self.viewport_height <= 0.0 {
            return Position::Slide(0);
        }
        let steps = ((scroll_top - self.origin) / self.viewport_height).round();
        if steps <= 0.0 {
            Position::Slide(0)
        } else if steps as usize >= len {
            Position::Footer
        } else {
            Position::Slide(steps as usize)
        }
    }
}

/// Tuning values, usually built from `[navigator]` in `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub wheel_threshold: f64,
    pub wheel_debounce: Duration,
    pub touch_threshold: f64,
    pub settle_delay: Duration,
    pub inactive_opacity: f64,
    pub inactive_scale: f64,
}

impl From<&NavigatorConfig> for Settings {
    fn from(config: &NavigatorConfig) -> Self {
        Self {
            wheel_threshold: config.wheel_threshold,
            wheel_debounce: Duration::from_millis(config.wheel_debounce_ms),
            touch_threshold: config.touch_threshold_px,
            settle_delay: Duration::from_millis(config.settle_ms),
            inactive_opacity: config.inactive_opacity,
            inactive_scale: config.inactive_scale,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&NavigatorConfig::default())
    }
}

/// A transition that was just started; the host issues the smooth scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Position,
    pub to: Position,
    /// Absolute offset for `scrollTo({ top, behavior: "smooth" })`.
    pub scroll_to: f64,
}

/// What the host should do with the raw event that was handled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Response {
    /// Call `preventDefault()` on the event.
    pub consumed: bool,
    pub transition: Option<Transition>,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed(transition: Option<Transition>) -> Self {
        Self {
            consumed: true,
            transition,
        }
    }

    pub fn scroll_to(&self) -> Option<f64> {
        self.transition.map(|t| t.scroll_to)
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    len: usize,
    state: State,
    geometry: Geometry,
    settings: Settings,
    wheel: WheelAccumulator,
    touch: TouchTracker,
}

impl Navigator {
    /// Mount a navigator over `len` slides, resting on the first one.
    ///
    /// Returns `None` for an empty slide list: there is nothing to navigate
    /// and the page renders an empty-state message instead.
    pub fn new(len: usize, geometry: Geometry, settings: Settings) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            state: State::Idle(0),
            geometry,
            settings,
            wheel: WheelAccumulator::new(settings.wheel_threshold, settings.wheel_debounce),
            touch: TouchTracker::new(settings.touch_threshold),
        })
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Update layout after a resize. In-flight transitions keep their target.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// The active position. During a transition this is already the target.
    pub fn position(&self) -> Position {
        match self.state {
            State::Idle(i) => Position::Slide(i),
            State::AtFooter => Position::Footer,
            State::Transitioning { to, .. } => to,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        match self.position() {
            Position::Slide(i) => Some(i),
            Position::Footer => None,
        }
    }

    pub fn at_footer(&self) -> bool {
        self.position() == Position::Footer
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, State::Transitioning { .. })
    }

    /// Release the transition lock once its settle delay has elapsed.
    pub fn settle(&mut self, now: Duration) {
        if let State::Transitioning { to, settles_at, .. } = self.state
            && now >= settles_at
        {
            self.state = resting(to);
            trace!(?to, "transition settled");
        }
    }

    /// Run one intent. Returns the started transition, or `None` when the
    /// intent was dropped (lock held) or had nowhere to go.
    pub fn apply(&mut self, intent: Intent, now: Duration) -> Option<Transition> {
        self.settle(now);
        if self.is_transitioning() {
            debug!(?intent, "intent dropped, transition in flight");
            return None;
        }

        let from = self.position();
        let to = self.target(from, intent)?;
        if to == from {
            return None;
        }

        self.state = State::Transitioning {
            from,
            to,
            settles_at: now + self.settings.settle_delay,
        };
        let transition = Transition {
            from,
            to,
            scroll_to: self.geometry.offset_of(to, self.len),
        };
        debug!(?from, ?to, scroll_to = transition.scroll_to, "transition started");
        Some(transition)
    }

    /// Resolve an intent against a resting position.
    fn target(&self, from: Position, intent: Intent) -> Option<Position> {
        let last = self.len - 1;
        match (intent, from) {
            (Intent::Advance, Position::Slide(i)) if i < last => Some(Position::Slide(i + 1)),
            (Intent::Advance, Position::Slide(_)) => Some(Position::Footer),
            (Intent::Advance, Position::Footer) => None,
            (Intent::Retreat, Position::Slide(0)) => None,
            (Intent::Retreat, Position::Slide(i)) => Some(Position::Slide(i - 1)),
            (Intent::Retreat, Position::Footer) => Some(Position::Slide(last)),
            (Intent::Jump(k), _) => Some(Position::Slide(k.min(last))),
            (Intent::Home, _) => Some(Position::Slide(0)),
            (Intent::Footer | Intent::End, _) => Some(Position::Footer),
        }
    }

    /// Map one raw input event to at most one intent and run it.
    pub fn handle(&mut self, input: Input, now: Duration) -> Response {
        match input {
            Input::Wheel {
                delta_y,
                scroll_top,
            } => {
                if !self.geometry.contains(scroll_top, self.len) {
                    self.wheel.reset();
                    return Response::ignored();
                }
                self.settle(now);
                if self.is_transitioning() {
                    // Inertial deltas must not pile up behind the lock.
                    self.wheel.reset();
                    return Response::consumed(None);
                }
                if self.at_footer() && delta_y > 0.0 {
                    self.wheel.reset();
                    return Response::ignored();
                }
                let transition = self
                    .wheel
                    .push(delta_y, now)
                    .and_then(|dir| self.apply(dir.intent(), now));
                Response::consumed(transition)
            }
            Input::Key { key, scroll_top } => match key.intent() {
                Some(intent) if self.geometry.contains(scroll_top, self.len) => {
                    self.discrete(intent, now)
                }
                _ => Response::ignored(),
            },
            Input::TouchStart { y, touches } => {
                self.touch.start(y, touches);
                Response::ignored()
            }
            Input::TouchEnd { y, scroll_top } => match self.touch.end(y) {
                Some(dir) if self.geometry.contains(scroll_top, self.len) => {
                    self.discrete(dir.intent(), now)
                }
                _ => Response::ignored(),
            },
            Input::Dot(position) => {
                let intent = match position {
                    Position::Slide(i) => Intent::Jump(i),
                    Position::Footer => Intent::Footer,
                };
                Response::consumed(self.apply(intent, now))
            }
            Input::Scroll { scroll_top } => {
                self.sync_to_scroll(scroll_top, now);
                Response::ignored()
            }
        }
    }

    /// Run a key or swipe intent. Forward intents at the footer are not
    /// consumed: the browser scrolls on past the deck.
    fn discrete(&mut self, intent: Intent, now: Duration) -> Response {
        self.settle(now);
        if !self.is_transitioning()
            && self.at_footer()
            && matches!(intent, Intent::Advance | Intent::End)
        {
            return Response::ignored();
        }
        Response::consumed(self.apply(intent, now))
    }

    /// Passive resync from the scroll position, for scrolling no intent
    /// handler saw. Never runs while a transition is in flight.
    fn sync_to_scroll(&mut self, scroll_top: f64, now: Duration) {
        self.settle(now);
        if self.is_transitioning() {
            return;
        }
        let nearest = self.geometry.nearest(scroll_top, self.len);
        if nearest != self.position() {
            trace!(?nearest, scroll_top, "resynced from scroll position");
            self.state = resting(nearest);
        }
    }
}

fn resting(position: Position) -> State {
    match position {
        Position::Slide(i) => State::Idle(i),
        Position::Footer => State::AtFooter,
    }
}

impl Direction {
    fn intent(self) -> Intent {
        match self {
            Direction::Forward => Intent::Advance,
            Direction::Backward => Intent::Retreat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::input::Key;
    use super::*;

    const VH: f64 = 800.0;

    fn geometry() -> Geometry {
        Geometry {
            origin: 0.0,
            viewport_height: VH,
        }
    }

    fn navigator(len: usize) -> Navigator {
        Navigator::new(len, geometry(), Settings::default()).unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Apply and wait long enough for the lock to open again.
    fn step(nav: &mut Navigator, intent: Intent, now: &mut Duration) -> Option<Transition> {
        let t = nav.apply(intent, *now);
        *now += ms(1000);
        nav.settle(*now);
        t
    }

    /// Key press while the page rests on the active position.
    fn press(nav: &mut Navigator, key: Key, now: &mut Duration) -> Response {
        let scroll_top = nav.geometry().offset_of(nav.position(), nav.slide_count());
        let r = nav.handle(Input::Key { key, scroll_top }, *now);
        *now += ms(1000);
        nav.settle(*now);
        r
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn empty_list_has_no_navigator() {
        assert!(Navigator::new(0, geometry(), Settings::default()).is_none());
    }

    #[test]
    fn starts_idle_on_first_slide() {
        let nav = navigator(3);
        assert_eq!(nav.state(), State::Idle(0));
        assert_eq!(nav.active_index(), Some(0));
        assert!(!nav.at_footer());
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    #[test]
    fn advance_moves_one_slide() {
        let mut now = ms(0);
        let mut nav = navigator(3);
        for i in 0..2 {
            let t = step(&mut nav, Intent::Advance, &mut now).unwrap();
            assert_eq!(t.to, Position::Slide(i + 1));
            assert_eq!(nav.state(), State::Idle(i + 1));
        }
    }

    #[test]
    fn advance_from_last_goes_to_footer() {
        let mut now = ms(0);
        let mut nav = navigator(2);
        step(&mut nav, Intent::Advance, &mut now);
        let t = step(&mut nav, Intent::Advance, &mut now).unwrap();
        assert_eq!(t.to, Position::Footer);
        assert_eq!(t.scroll_to, 2.0 * VH);
        assert_eq!(nav.state(), State::AtFooter);
    }

    #[test]
    fn advance_at_footer_is_noop() {
        let mut now = ms(0);
        let mut nav = navigator(1);
        step(&mut nav, Intent::End, &mut now);
        assert!(step(&mut nav, Intent::Advance, &mut now).is_none());
        assert_eq!(nav.state(), State::AtFooter);
    }

    #[test]
    fn retreat_from_footer_returns_to_last_slide() {
        let mut now = ms(0);
        let mut nav = navigator(4);
        step(&mut nav, Intent::End, &mut now);
        let t = step(&mut nav, Intent::Retreat, &mut now).unwrap();
        assert_eq!(t.from, Position::Footer);
        assert_eq!(t.to, Position::Slide(3));
        assert_eq!(nav.state(), State::Idle(3));
    }

    #[test]
    fn retreat_moves_back_one() {
        let mut now = ms(0);
        let mut nav = navigator(4);
        step(&mut nav, Intent::Jump(2), &mut now);
        step(&mut nav, Intent::Retreat, &mut now);
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn retreat_at_first_slide_is_noop() {
        let mut nav = navigator(3);
        assert!(nav.apply(Intent::Retreat, ms(0)).is_none());
        assert_eq!(nav.state(), State::Idle(0));
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn jump_sets_exact_index_regardless_of_prior() {
        let n = 6;
        for prior in 0..n {
            for k in 0..n {
                let mut now = ms(0);
                let mut nav = navigator(n);
                step(&mut nav, Intent::Jump(prior), &mut now);
                step(&mut nav, Intent::Jump(k), &mut now);
                assert_eq!(nav.active_index(), Some(k), "prior={prior} k={k}");
            }
        }
    }

    #[test]
    fn jump_out_of_range_clamps_to_last() {
        let mut nav = navigator(3);
        let t = nav.apply(Intent::Jump(99), ms(0)).unwrap();
        assert_eq!(t.to, Position::Slide(2));
        assert_eq!(t.scroll_to, 2.0 * VH);
    }

    #[test]
    fn jump_to_active_slide_starts_nothing() {
        let mut nav = navigator(3);
        assert!(nav.apply(Intent::Jump(0), ms(0)).is_none());
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn home_returns_to_first_slide() {
        let mut now = ms(0);
        let mut nav = navigator(5);
        step(&mut nav, Intent::End, &mut now);
        step(&mut nav, Intent::Home, &mut now);
        assert_eq!(nav.state(), State::Idle(0));
    }

    #[test]
    fn scroll_offset_includes_origin() {
        let mut nav = Navigator::new(
            3,
            Geometry {
                origin: 120.0,
                viewport_height: 700.0,
            },
            Settings::default(),
        )
        .unwrap();
        let t = nav.apply(Intent::Jump(2), ms(0)).unwrap();
        assert_eq!(t.scroll_to, 120.0 + 2.0 * 700.0);
    }

    // =========================================================================
    // Transition lock
    // =========================================================================

    #[test]
    fn active_position_updates_before_settle() {
        let mut nav = navigator(3);
        nav.apply(Intent::Advance, ms(0));
        assert!(nav.is_transitioning());
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn intents_during_transition_are_dropped() {
        let intents = [
            Intent::Advance,
            Intent::Retreat,
            Intent::Jump(0),
            Intent::Jump(2),
            Intent::Footer,
            Intent::Home,
            Intent::End,
        ];
        for intent in intents {
            let mut nav = navigator(4);
            nav.apply(Intent::Advance, ms(0)).unwrap();
            assert!(nav.apply(intent, ms(10)).is_none(), "{intent:?}");
            assert_eq!(nav.position(), Position::Slide(1), "{intent:?}");
        }
    }

    #[test]
    fn rapid_input_is_not_queued() {
        let mut nav = navigator(5);
        nav.apply(Intent::Advance, ms(0));
        for t in (50..800).step_by(50) {
            assert!(nav.apply(Intent::Advance, ms(t)).is_none());
        }
        nav.settle(ms(800));
        assert_eq!(nav.state(), State::Idle(1));
    }

    #[test]
    fn lock_releases_after_settle_delay() {
        let mut nav = navigator(3);
        nav.apply(Intent::Advance, ms(0));
        nav.settle(ms(799));
        assert!(nav.is_transitioning());
        let t = nav.apply(Intent::Advance, ms(800)).unwrap();
        assert_eq!(t.from, Position::Slide(1));
        assert_eq!(t.to, Position::Slide(2));
    }

    #[test]
    fn custom_settle_delay_is_honored() {
        let settings = Settings {
            settle_delay: ms(300),
            ..Settings::default()
        };
        let mut nav = Navigator::new(3, geometry(), settings).unwrap();
        nav.apply(Intent::Advance, ms(0));
        assert!(nav.apply(Intent::Advance, ms(299)).is_none());
        assert!(nav.apply(Intent::Advance, ms(300)).is_some());
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    #[test]
    fn three_slides_down_down_down_up() {
        let mut now = ms(0);
        let mut nav = navigator(3);
        press(&mut nav, Key::ArrowDown, &mut now);
        press(&mut nav, Key::ArrowDown, &mut now);
        assert_eq!(nav.state(), State::Idle(2));
        press(&mut nav, Key::ArrowDown, &mut now);
        assert_eq!(nav.state(), State::AtFooter);
        press(&mut nav, Key::ArrowUp, &mut now);
        assert_eq!(nav.state(), State::Idle(2));
    }

    #[test]
    fn single_slide_end_goes_straight_to_footer() {
        let mut nav = navigator(1);
        let r = nav.handle(
            Input::Key {
                key: Key::End,
                scroll_top: 0.0,
            },
            ms(0),
        );
        let t = r.transition.unwrap();
        assert_eq!(t.from, Position::Slide(0));
        assert_eq!(t.to, Position::Footer);
        nav.settle(ms(800));
        assert_eq!(nav.state(), State::AtFooter);
    }

    #[test]
    fn single_slide_advance_goes_to_footer() {
        let mut nav = navigator(1);
        let t = nav.apply(Intent::Advance, ms(0)).unwrap();
        assert_eq!(t.to, Position::Footer);
    }

    // =========================================================================
    // Input mapping
    // =========================================================================

    #[test]
    fn keys_map_to_intents() {
        let mut now = ms(0);
        let mut nav = navigator(5);
        press(&mut nav, Key::Space, &mut now);
        assert_eq!(nav.active_index(), Some(1));
        press(&mut nav, Key::End, &mut now);
        assert!(nav.at_footer());
        press(&mut nav, Key::Home, &mut now);
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn unmapped_keys_are_not_consumed() {
        let mut nav = navigator(3);
        let r = nav.handle(
            Input::Key {
                key: Key::Other,
                scroll_top: 0.0,
            },
            ms(0),
        );
        assert!(!r.consumed);
        assert!(r.transition.is_none());
    }

    #[test]
    fn mapped_key_is_consumed_even_when_locked() {
        let mut nav = navigator(3);
        nav.apply(Intent::Advance, ms(0));
        let r = nav.handle(
            Input::Key {
                key: Key::ArrowDown,
                scroll_top: 0.0,
            },
            ms(100),
        );
        assert!(r.consumed);
        assert!(r.transition.is_none());
    }

    #[test]
    fn wheel_accumulates_to_threshold() {
        let mut nav = navigator(3);
        let wheel = |delta_y| Input::Wheel {
            delta_y,
            scroll_top: 0.0,
        };
        assert!(nav.handle(wheel(20.0), ms(0)).transition.is_none());
        assert!(nav.handle(wheel(20.0), ms(30)).transition.is_none());
        let r = nav.handle(wheel(20.0), ms(60));
        assert!(r.consumed);
        assert_eq!(r.transition.unwrap().to, Position::Slide(1));
    }

    #[test]
    fn wheel_debounce_gap_resets_accumulator() {
        let mut nav = navigator(3);
        let wheel = |delta_y| Input::Wheel {
            delta_y,
            scroll_top: 0.0,
        };
        nav.handle(wheel(40.0), ms(0));
        // 200ms gap > 150ms debounce: the 40 is forgotten
        assert!(nav.handle(wheel(40.0), ms(200)).transition.is_none());
        assert!(nav.handle(wheel(40.0), ms(250)).transition.is_some());
    }

    #[test]
    fn wheel_up_retreats() {
        let mut now = ms(0);
        let mut nav = navigator(3);
        step(&mut nav, Intent::Jump(2), &mut now);
        let r = nav.handle(
            Input::Wheel {
                delta_y: -120.0,
                scroll_top: 2.0 * VH,
            },
            now,
        );
        assert_eq!(r.transition.unwrap().to, Position::Slide(1));
    }

    #[test]
    fn wheel_outside_extent_passes_through() {
        let mut nav = Navigator::new(
            3,
            Geometry {
                origin: 500.0,
                viewport_height: VH,
            },
            Settings::default(),
        )
        .unwrap();
        let above = nav.handle(
            Input::Wheel {
                delta_y: 200.0,
                scroll_top: 100.0,
            },
            ms(0),
        );
        assert!(!above.consumed);
        let below = nav.handle(
            Input::Wheel {
                delta_y: -200.0,
                scroll_top: 500.0 + 3.0 * VH + 400.0,
            },
            ms(10),
        );
        assert!(!below.consumed);
        assert_eq!(nav.state(), State::Idle(0));
    }

    #[test]
    fn wheel_during_transition_is_consumed_and_dropped() {
        let mut nav = navigator(3);
        nav.apply(Intent::Advance, ms(0));
        let r = nav.handle(
            Input::Wheel {
                delta_y: 500.0,
                scroll_top: 300.0,
            },
            ms(100),
        );
        assert!(r.consumed);
        assert!(r.transition.is_none());
        // Inertia during the lock does not fire once it opens
        let r = nav.handle(
            Input::Wheel {
                delta_y: 10.0,
                scroll_top: VH,
            },
            ms(810),
        );
        assert!(r.transition.is_none());
    }

    #[test]
    fn swipe_up_advances_and_down_retreats() {
        let mut now = ms(0);
        let mut nav = navigator(3);
        nav.handle(Input::TouchStart { y: 600.0, touches: 1 }, now);
        let r = nav.handle(
            Input::TouchEnd {
                y: 400.0,
                scroll_top: 0.0,
            },
            now,
        );
        assert_eq!(r.transition.unwrap().to, Position::Slide(1));

        now += ms(1000);
        nav.handle(Input::TouchStart { y: 300.0, touches: 1 }, now);
        let r = nav.handle(
            Input::TouchEnd {
                y: 500.0,
                scroll_top: VH,
            },
            now,
        );
        assert_eq!(r.transition.unwrap().to, Position::Slide(0));
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut nav = navigator(3);
        nav.handle(Input::TouchStart { y: 300.0, touches: 1 }, ms(0));
        let r = nav.handle(
            Input::TouchEnd {
                y: 270.0,
                scroll_top: 0.0,
            },
            ms(50),
        );
        assert!(!r.consumed);
        assert_eq!(nav.state(), State::Idle(0));
    }

    #[test]
    fn multi_touch_is_ignored() {
        let mut nav = navigator(3);
        nav.handle(Input::TouchStart { y: 600.0, touches: 2 }, ms(0));
        let r = nav.handle(
            Input::TouchEnd {
                y: 100.0,
                scroll_top: 0.0,
            },
            ms(50),
        );
        assert!(r.transition.is_none());
    }

    #[test]
    fn swipe_below_deck_is_ignored() {
        let mut nav = navigator(3);
        nav.handle(Input::TouchStart { y: 300.0, touches: 1 }, ms(0));
        let r = nav.handle(
            Input::TouchEnd {
                y: 600.0,
                scroll_top: 3.0 * VH + 500.0,
            },
            ms(50),
        );
        assert!(r.transition.is_none());
        assert_eq!(nav.state(), State::Idle(0));
    }

    // =========================================================================
    // Deck extent and footer pass-through
    // =========================================================================

    #[test]
    fn wheel_down_at_footer_is_left_to_the_page() {
        let mut now = ms(0);
        let mut nav = navigator(3);
        step(&mut nav, Intent::End, &mut now);
        for _ in 0..20 {
            let r = nav.handle(
                Input::Wheel {
                    delta_y: 120.0,
                    scroll_top: 3.0 * VH,
                },
                now,
            );
            assert!(!r.consumed);
            assert!(r.transition.is_none());
            now += ms(30);
        }
        assert_eq!(nav.state(), State::AtFooter);

        // Wheel up from the footer still returns to the last slide
        let r = nav.handle(
            Input::Wheel {
                delta_y: -120.0,
                scroll_top: 3.0 * VH,
            },
            now,
        );
        assert!(r.consumed);
        assert_eq!(r.transition.unwrap().to, Position::Slide(2));
    }

    #[test]
    fn forward_keys_at_footer_are_left_to_the_page() {
        let mut now = ms(0);
        let mut nav = navigator(3);
        step(&mut nav, Intent::Footer, &mut now);
        for key in [Key::Space, Key::ArrowDown, Key::End] {
            let r = press(&mut nav, key, &mut now);
            assert!(!r.consumed, "{key:?}");
            assert_eq!(nav.state(), State::AtFooter, "{key:?}");
        }
        let r = press(&mut nav, Key::ArrowUp, &mut now);
        assert!(r.consumed);
        assert_eq!(nav.state(), State::Idle(2));
    }

    #[test]
    fn keys_below_deck_are_ignored() {
        let mut nav = navigator(3);
        let below = 3.0 * VH + 600.0;
        nav.handle(Input::Scroll { scroll_top: below }, ms(0));
        assert_eq!(nav.state(), State::AtFooter);
        for key in [Key::ArrowUp, Key::Home, Key::ArrowDown] {
            let r = nav.handle(
                Input::Key {
                    key,
                    scroll_top: below,
                },
                ms(10),
            );
            assert!(!r.consumed, "{key:?}");
            assert!(r.transition.is_none(), "{key:?}");
        }
        assert_eq!(nav.state(), State::AtFooter);
    }

    #[test]
    fn keys_above_deck_are_ignored() {
        let mut nav = Navigator::new(
            3,
            Geometry {
                origin: 500.0,
                viewport_height: VH,
            },
            Settings::default(),
        )
        .unwrap();
        let r = nav.handle(
            Input::Key {
                key: Key::ArrowDown,
                scroll_top: 100.0,
            },
            ms(0),
        );
        assert!(!r.consumed);
        assert_eq!(nav.state(), State::Idle(0));
    }

    #[test]
    fn dots_jump_and_footer_dot_goes_to_footer() {
        let mut now = ms(0);
        let mut nav = navigator(4);
        let r = nav.handle(Input::Dot(Position::Slide(3)), now);
        assert_eq!(r.transition.unwrap().to, Position::Slide(3));
        now += ms(1000);
        let r = nav.handle(Input::Dot(Position::Footer), now);
        assert_eq!(r.scroll_to(), Some(4.0 * VH));
    }

    // =========================================================================
    // Passive scroll sync
    // =========================================================================

    #[test]
    fn scroll_resyncs_when_idle() {
        let mut nav = navigator(4);
        nav.handle(Input::Scroll { scroll_top: 2.0 * VH + 100.0 }, ms(0));
        assert_eq!(nav.state(), State::Idle(2));
        nav.handle(Input::Scroll { scroll_top: 3.6 * VH }, ms(10));
        assert_eq!(nav.state(), State::AtFooter);
        nav.handle(Input::Scroll { scroll_top: -50.0 }, ms(20));
        assert_eq!(nav.state(), State::Idle(0));
    }

    #[test]
    fn scroll_never_overrides_in_flight_transition() {
        let mut nav = navigator(4);
        nav.apply(Intent::Jump(3), ms(0));
        // Smooth scroll passes through slides 1 and 2 on the way
        nav.handle(Input::Scroll { scroll_top: VH }, ms(200));
        nav.handle(Input::Scroll { scroll_top: 2.0 * VH }, ms(400));
        assert_eq!(nav.position(), Position::Slide(3));
        assert!(nav.is_transitioning());
    }

    #[test]
    fn nearest_handles_degenerate_viewport() {
        let g = Geometry {
            origin: 0.0,
            viewport_height: 0.0,
        };
        assert_eq!(g.nearest(500.0, 3), Position::Slide(0));
    }

    #[test]
    fn settings_follow_config() {
        let config = NavigatorConfig {
            settle_ms: 450,
            wheel_debounce_ms: 90,
            ..NavigatorConfig::default()
        };
        let settings = Settings::from(&config);
        assert_eq!(settings.settle_delay, ms(450));
        assert_eq!(settings.wheel_debounce, ms(90));
    }
}
