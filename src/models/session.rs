use serde::{Deserialize, Serialize};

/// Slot state for one appointment conversation.
///
/// Slots are first-write-wins: a populated slot is never overwritten, and
/// partial state persists across turns until a reset point (cancellation or
/// confirmed completion) clears all three together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub facility: Option<String>,
    pub department: Option<String>,
    pub datetime: Option<String>,
}

impl Session {
    /// True once any slot has been captured; a flow in progress continues
    /// even without a fresh qualifying intent.
    pub fn has_any(&self) -> bool {
        self.facility.is_some() || self.department.is_some() || self.datetime.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.facility.is_some() && self.department.is_some() && self.datetime.is_some()
    }

    pub fn clear(&mut self) {
        self.facility = None;
        self.department = None;
        self.datetime = None;
    }
}
