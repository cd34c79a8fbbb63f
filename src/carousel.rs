// Testimonials slider state. The component owns one of these through
// use_reducer; everything here is a pure projection so the wraparound
// rules stay testable off the DOM.

use std::rc::Rc;
use yew::Reducible;

use crate::config;

/// Card width (% of the track) for a given viewport width. Three cards
/// per row above the mobile breakpoint, one otherwise.
pub fn card_width_percent(viewport_width: f64) -> f64 {
    if viewport_width > config::MOBILE_BREAKPOINT {
        config::DESKTOP_CARD_WIDTH
    } else {
        100.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub index: usize,
    pub count: usize,
    pub card_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CarouselAction {
    Next,
    Prev,
    JumpTo(usize),
    SetCardWidth(f64),
}

impl CarouselState {
    pub fn new(count: usize, viewport_width: f64) -> Self {
        Self {
            index: 0,
            count,
            card_width: card_width_percent(viewport_width),
        }
    }

    /// False for 0 or 1 items: nothing to slide to, so prev/next and the
    /// dots are disabled rather than cycling in place.
    pub fn can_navigate(&self) -> bool {
        self.count > 1
    }

    /// Horizontal track offset in percent. Index 0 sits at 0, each step
    /// shifts the track left by one card width.
    pub fn offset_percent(&self) -> f64 {
        self.index as f64 * -self.card_width
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            CarouselAction::Next => {
                if new.can_navigate() {
                    new.index = (new.index + 1) % new.count;
                }
            }
            CarouselAction::Prev => {
                if new.can_navigate() {
                    new.index = (new.index + new.count - 1) % new.count;
                }
            }
            CarouselAction::JumpTo(i) => {
                if i < new.count {
                    new.index = i;
                }
            }
            CarouselAction::SetCardWidth(w) => {
                new.card_width = w;
            }
        }
        new.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(count: usize) -> Rc<CarouselState> {
        Rc::new(CarouselState::new(count, 1280.0))
    }

    fn apply(s: Rc<CarouselState>, a: CarouselAction) -> Rc<CarouselState> {
        s.reduce(a)
    }

    #[test]
    fn next_cycles_back_to_start() {
        for count in 2..=6 {
            let mut s = state(count);
            for _ in 0..count {
                s = apply(s, CarouselAction::Next);
            }
            assert_eq!(s.index, 0, "count = {}", count);
        }
    }

    #[test]
    fn prev_wraps_from_zero() {
        let s = apply(state(4), CarouselAction::Prev);
        assert_eq!(s.index, 3);
    }

    #[test]
    fn next_then_prev_is_identity() {
        let s = apply(apply(state(3), CarouselAction::Next), CarouselAction::Prev);
        assert_eq!(s.index, 0);
    }

    #[test]
    fn jump_to_sets_index_regardless_of_prior_state() {
        let mut s = state(5);
        s = apply(s, CarouselAction::Next);
        s = apply(s, CarouselAction::Next);
        s = apply(s, CarouselAction::JumpTo(4));
        assert_eq!(s.index, 4);
        s = apply(s, CarouselAction::JumpTo(0));
        assert_eq!(s.index, 0);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let s = apply(state(3), CarouselAction::JumpTo(7));
        assert_eq!(s.index, 0);
    }

    #[test]
    fn empty_and_single_item_carousels_are_inert() {
        for count in [0, 1] {
            let s = state(count);
            assert!(!s.can_navigate());
            let s = apply(s, CarouselAction::Next);
            assert_eq!(s.index, 0);
            let s = apply(s, CarouselAction::Prev);
            assert_eq!(s.index, 0);
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut s = state(3);
        for _ in 0..10 {
            s = apply(s, CarouselAction::Next);
            assert!(s.index < 3);
        }
        for _ in 0..10 {
            s = apply(s, CarouselAction::Prev);
            assert!(s.index < 3);
        }
    }

    #[test]
    fn card_width_follows_breakpoint() {
        assert_eq!(card_width_percent(769.0), 33.33);
        assert_eq!(card_width_percent(1920.0), 33.33);
        assert_eq!(card_width_percent(768.0), 100.0);
        assert_eq!(card_width_percent(375.0), 100.0);
    }

    #[test]
    fn offset_tracks_index_and_card_width() {
        let mut s = state(3);
        assert_eq!(s.offset_percent(), 0.0);
        s = apply(s, CarouselAction::Next);
        assert_eq!(s.offset_percent(), -33.33);
        s = apply(s, CarouselAction::SetCardWidth(100.0));
        assert_eq!(s.offset_percent(), -100.0);
    }
}
