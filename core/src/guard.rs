pub const DEFAULT_UNLOCK_DELAY_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlState {
    Enabled,
    Locked,
    PermanentlyDisabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlLabel {
    Idle,
    Updating,
    Finished,
}

impl ControlLabel {
    pub fn text(self) -> &'static str {
        match self {
            ControlLabel::Idle => "Score",
            ControlLabel::Updating => "Обновление...",
            ControlLabel::Finished => "Матч завершен",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlChange {
    pub control: usize,
    pub enabled: bool,
    pub label: Option<ControlLabel>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed { changes: Vec<ControlChange> },
    Rejected,
}

/// Page-wide submission lock shared by every score form. While held, no form
/// may successfully submit.
#[derive(Clone, Debug)]
pub struct SubmissionGuard {
    unlock_delay_ms: u32,
    lock_held: bool,
    controls: Vec<ControlState>,
}

impl SubmissionGuard {
    pub fn new(control_count: usize) -> Self {
        Self::with_unlock_delay(control_count, DEFAULT_UNLOCK_DELAY_MS)
    }

    pub fn with_unlock_delay(control_count: usize, unlock_delay_ms: u32) -> Self {
        Self {
            unlock_delay_ms,
            lock_held: false,
            controls: vec![ControlState::Enabled; control_count],
        }
    }

    pub fn unlock_delay_ms(&self) -> u32 {
        self.unlock_delay_ms
    }

    pub fn is_held(&self) -> bool {
        self.lock_held
    }

    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    pub fn state(&self, control: usize) -> Option<ControlState> {
        self.controls.get(control).copied()
    }

    /// Submit event on `origin`. Rejected while the lock is held or the
    /// origin control is anything but enabled; the caller must then cancel
    /// the native submission.
    pub fn try_acquire(&mut self, origin: usize) -> SubmitOutcome {
        if self.lock_held || self.state(origin) != Some(ControlState::Enabled) {
            return SubmitOutcome::Rejected;
        }
        self.lock_held = true;
        let mut changes = Vec::with_capacity(self.controls.len());
        for (idx, state) in self.controls.iter_mut().enumerate() {
            if *state == ControlState::Enabled {
                *state = ControlState::Locked;
            }
            changes.push(ControlChange {
                control: idx,
                enabled: false,
                label: (idx == origin).then_some(ControlLabel::Updating),
            });
        }
        SubmitOutcome::Proceed { changes }
    }

    // Timed recovery. Unconditional: the guard never learns whether the
    // submission it covered succeeded.
    pub fn release(&mut self) -> Vec<ControlChange> {
        self.lock_held = false;
        let mut changes = Vec::new();
        for (idx, state) in self.controls.iter_mut().enumerate() {
            if *state == ControlState::PermanentlyDisabled {
                continue;
            }
            *state = ControlState::Enabled;
            changes.push(ControlChange {
                control: idx,
                enabled: true,
                label: Some(ControlLabel::Idle),
            });
        }
        changes
    }

    // One-way: a finished control is immune to `release`.
    pub fn finish_match(&mut self) -> Vec<ControlChange> {
        let mut changes = Vec::with_capacity(self.controls.len());
        for (idx, state) in self.controls.iter_mut().enumerate() {
            *state = ControlState::PermanentlyDisabled;
            changes.push(ControlChange {
                control: idx,
                enabled: false,
                label: Some(ControlLabel::Finished),
            });
        }
        changes
    }
}
