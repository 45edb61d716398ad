use std::collections::BTreeSet;

/// Lifecycle of an action button. `Committed` is terminal: a control that
/// confirmed its action never accepts another press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPhase {
    Idle,
    Pending,
    Committed,
}

/// Presentation of an action button at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
    pub markers: BTreeSet<String>,
}

impl ControlState {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            label: label.into(),
            markers: BTreeSet::new(),
        }
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }
}

/// An action button plus the snapshot needed to undo an optimistic update.
///
/// `begin` stores the pre-dispatch state and locks the button in the same
/// update step that spawns the request, so a second press can never slip in
/// between the click and the lock. `rollback` restores the snapshot exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionControl {
    baseline: ControlState,
    current: ControlState,
    phase: ControlPhase,
}

impl ActionControl {
    pub fn new(idle_label: impl Into<String>) -> Self {
        let state = ControlState::idle(idle_label);
        Self {
            baseline: state.clone(),
            current: state,
            phase: ControlPhase::Idle,
        }
    }

    pub fn phase(&self) -> ControlPhase {
        self.phase
    }

    pub fn state(&self) -> &ControlState {
        &self.current
    }

    /// Locks the control for one in-flight request. Returns false when the
    /// control is not idle, in which case nothing changes and the caller must
    /// not dispatch.
    pub fn begin(&mut self, pending_label: &str) -> bool {
        if self.phase != ControlPhase::Idle {
            return false;
        }
        self.baseline = self.current.clone();
        self.current.enabled = false;
        self.current.label = pending_label.to_string();
        self.phase = ControlPhase::Pending;
        true
    }

    /// Confirms the action. The control stays disabled under its settled
    /// label, optionally tagged with a marker the view can style on.
    pub fn commit(&mut self, label: &str, marker: Option<&str>) {
        self.current.enabled = false;
        self.current.label = label.to_string();
        if let Some(marker) = marker {
            self.current.markers.insert(marker.to_string());
        }
        self.phase = ControlPhase::Committed;
    }

    /// Undoes the optimistic update, restoring the exact pre-dispatch state.
    pub fn rollback(&mut self) {
        self.current = self.baseline.clone();
        self.phase = ControlPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_disables_and_relabels() {
        let mut control = ActionControl::new("Connect");
        assert!(control.begin("Sending..."));

        assert_eq!(control.phase(), ControlPhase::Pending);
        assert!(!control.state().enabled);
        assert_eq!(control.state().label, "Sending...");
    }

    #[test]
    fn begin_refuses_while_pending() {
        let mut control = ActionControl::new("Connect");
        assert!(control.begin("Sending..."));

        assert!(!control.begin("Sending..."));
        assert_eq!(control.phase(), ControlPhase::Pending);
        assert_eq!(control.state().label, "Sending...");
    }

    #[test]
    fn begin_refuses_after_commit() {
        let mut control = ActionControl::new("Connect");
        control.begin("Sending...");
        control.commit("Request Sent", Some("sent"));

        assert!(!control.begin("Sending..."));
        assert_eq!(control.phase(), ControlPhase::Committed);
    }

    #[test]
    fn commit_keeps_control_disabled_with_marker() {
        let mut control = ActionControl::new("Connect");
        control.begin("Sending...");
        control.commit("Request Sent", Some("sent"));

        assert!(!control.state().enabled);
        assert_eq!(control.state().label, "Request Sent");
        assert!(control.state().has_marker("sent"));
    }

    #[test]
    fn rollback_restores_exact_pre_dispatch_state() {
        let mut control = ActionControl::new("Connect");
        let before = control.state().clone();
        control.begin("Sending...");
        control.rollback();

        assert_eq!(control.phase(), ControlPhase::Idle);
        assert_eq!(control.state(), &before);
        assert!(control.state().markers.is_empty());
    }

    #[test]
    fn control_is_reusable_after_rollback() {
        let mut control = ActionControl::new("Join Community");
        control.begin("Joining...");
        control.rollback();

        assert!(control.begin("Joining..."));
        assert_eq!(control.phase(), ControlPhase::Pending);
    }
}
