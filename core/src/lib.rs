pub mod guard;
pub mod nav;

pub use guard::{
    ControlChange, ControlLabel, ControlState, SubmissionGuard, SubmitOutcome,
    DEFAULT_UNLOCK_DELAY_MS,
};
pub use nav::{NavMenu, NAV_ACTIVE_CLASS};
