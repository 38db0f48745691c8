#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Inactive,
    Active,
}

impl SessionState {
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, SessionState::Active)
    }
}

/// Session status as reported by the platform.
///
/// Only "session started" means the viewer is in AR; every other status,
/// including ones this crate has never heard of, means it is not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArStatus {
    SessionStarted,
    Other(String),
}

impl ArStatus {
    /// Parse a `<model-viewer>` `ar-status` value.
    pub fn from_model_viewer(status: &str) -> Self {
        match status.trim() {
            "session-started" => ArStatus::SessionStarted,
            other => ArStatus::Other(other.to_owned()),
        }
    }

    #[inline]
    pub fn in_ar(&self) -> bool {
        matches!(self, ArStatus::SessionStarted)
    }

    #[inline]
    pub fn session_state(&self) -> SessionState {
        if self.in_ar() {
            SessionState::Active
        } else {
            SessionState::Inactive
        }
    }
}
