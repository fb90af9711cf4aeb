use tracing::{debug, warn};

use crate::animation::{Animate, DEFAULT_DURATION_MS, Transition};

pub const SCROLL_THRESHOLD: f64 = 0.1;
pub const SEARCH_ICON_OFFSET: f64 = -185.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    AtTop,
    Scrolled,
}

impl NavState {
    pub fn from_progress(progress: f64) -> Self {
        if progress < SCROLL_THRESHOLD {
            Self::AtTop
        } else {
            Self::Scrolled
        }
    }

    pub fn background_alpha(self) -> f64 {
        match self {
            Self::AtTop => 0.0,
            Self::Scrolled => 1.0,
        }
    }
}

// nav bar background, driven by scroll progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavBackground {
    state: NavState,
}

impl NavBackground {
    pub fn state(&self) -> NavState {
        self.state
    }

    // only a change of bucket issues a transition; the returned state is the
    // one that was entered, if any
    pub fn observe(&mut self, progress: f64, background: &mut impl Animate) -> Option<NavState> {
        let next = NavState::from_progress(progress);
        if next == self.state {
            return None;
        }

        debug!(?next, progress, "nav background transition");
        if let Err(err) = background.start(next.background_alpha(), Transition::default()) {
            warn!("nav background animation rejected: {err}");
        }

        self.state = next;
        Some(next)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Closed,
    Open,
}

impl SearchState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn icon_offset(self) -> f64 {
        match self {
            Self::Closed => 0.0,
            Self::Open => SEARCH_ICON_OFFSET,
        }
    }

    pub fn field_scale(self) -> f64 {
        match self {
            Self::Closed => 0.0,
            Self::Open => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchToggle {
    state: SearchState,
}

impl SearchToggle {
    pub fn state(&self) -> SearchState {
        self.state
    }

    // the toggle commits even when the engine refuses, the next toggle
    // issues fresh targets and brings the visuals back in line
    pub fn toggle(&mut self, icon: &mut impl Animate, field: &mut impl Animate) -> SearchState {
        let next = self.state.toggled();
        let transition = Transition::linear(DEFAULT_DURATION_MS);

        debug!(?next, "search toggled");
        if let Err(err) = icon.start(next.icon_offset(), transition) {
            warn!("search icon animation rejected: {err}");
        }
        if let Err(err) = field.start(next.field_scale(), transition) {
            warn!("search field animation rejected: {err}");
        }

        self.state = next;
        next
    }
}
