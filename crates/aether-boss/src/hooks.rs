//! Presentation hooks invoked by the combat core.
//!
//! Every method has an empty default so a host implements only what it
//! reacts to.

/// Callbacks a boss fires as its state changes.
pub trait BossHooks {
    /// Inactive → Active, e.g. show the boss alert.
    fn on_activate(&mut self) {}

    /// Health reached zero. Fires exactly once per boss.
    fn on_defeat(&mut self) {}

    /// One attack executed; `variant_index` selects the named attack.
    fn on_attack(&mut self, _variant_index: usize) {}

    /// Damage landed; `delta` is the amount actually subtracted (> 0).
    fn on_damage_feedback(&mut self, _delta: u32) {}
}

/// Ignores every hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl BossHooks for NoHooks {}

/// One recorded hook invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCall {
    Activate,
    Defeat,
    Attack(usize),
    DamageFeedback(u32),
}

/// Records every hook call in order. Handy for replays and tests.
#[derive(Debug, Clone, Default)]
pub struct HookLog {
    pub calls: Vec<HookCall>,
}

impl HookLog {
    pub fn count(&self, call: HookCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Variant indices of every attack, in firing order.
    pub fn attacks(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HookCall::Attack(i) => Some(*i),
                _ => None,
            })
            .collect()
    }
}

impl BossHooks for HookLog {
    fn on_activate(&mut self) {
        self.calls.push(HookCall::Activate);
    }

    fn on_defeat(&mut self) {
        self.calls.push(HookCall::Defeat);
    }

    fn on_attack(&mut self, variant_index: usize) {
        self.calls.push(HookCall::Attack(variant_index));
    }

    fn on_damage_feedback(&mut self, delta: u32) {
        self.calls.push(HookCall::DamageFeedback(delta));
    }
}
