pub const NAV_ACTIVE_CLASS: &str = "active";

/// Menu visibility as explicit state; the DOM class is forced to match it
/// instead of being re-read on every click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    active: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}
