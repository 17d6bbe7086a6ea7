//! Lifecycle transitions: Inactive → Active → Defeated.
//!
//! There is no way back out of Defeated and no pause from Active. Each
//! transition reports whether it actually happened, so hooks fire once.

use serde::{Deserialize, Serialize};

use aether_core::enums::LifecycleState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == LifecycleState::Active
    }

    pub fn is_defeated(&self) -> bool {
        self.state == LifecycleState::Defeated
    }

    /// Inactive → Active. Returns false (and changes nothing) otherwise.
    pub fn activate(&mut self) -> bool {
        if self.state != LifecycleState::Inactive {
            return false;
        }
        self.state = LifecycleState::Active;
        true
    }

    /// Any live state → Defeated. Returns false if already defeated.
    ///
    /// A dormant boss can be killed too: health zero must always mean Defeated.
    pub fn defeat(&mut self) -> bool {
        if self.state == LifecycleState::Defeated {
            return false;
        }
        self.state = LifecycleState::Defeated;
        true
    }

    pub(crate) fn restore(state: LifecycleState) -> Self {
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_only_from_inactive() {
        let mut lc = Lifecycle::default();
        assert!(lc.activate());
        assert!(!lc.activate());
        assert!(lc.is_active());
    }

    #[test]
    fn test_defeat_is_terminal() {
        let mut lc = Lifecycle::default();
        lc.activate();
        assert!(lc.defeat());
        assert!(!lc.defeat());
        assert!(!lc.activate());
        assert_eq!(lc.state(), LifecycleState::Defeated);
    }
}
