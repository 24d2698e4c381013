use std::collections::BTreeMap;

use crate::foundation::core::Millis;

/// Handle of a repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Owner of repeating timers, as seen by the timeline controller.
pub trait Scheduler {
    /// Current virtual time.
    fn now(&self) -> Millis;

    /// Start a repeating timer firing every `period`, first at `now + period`.
    fn set_interval(&mut self, period: Millis) -> TimerId;

    /// Cancel a timer. Unknown or already cancelled ids are ignored.
    fn clear_interval(&mut self, id: TimerId);

    /// Number of timers currently scheduled.
    fn active_timers(&self) -> usize;
}

#[derive(Clone, Copy, Debug)]
struct Interval {
    period: Millis,
    next_fire: Millis,
}

/// Deterministic single-threaded clock.
///
/// Time only moves when the owner drains due timers with [`VirtualClock::next_due`] and then
/// calls [`VirtualClock::advance_to`]. Each fired timer is handled completely by the caller before
/// the next one is popped, so handlers never interleave.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Millis,
    next_id: u64,
    timers: BTreeMap<TimerId, Interval>,
}

impl VirtualClock {
    /// A clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` if `id` is still scheduled.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Moves `now` to the fire time and schedules the next repetition. Ties fire in creation
    /// order.
    pub fn next_due(&mut self, until: Millis) -> Option<TimerId> {
        let (id, _) = self
            .timers
            .iter()
            .filter(|(_, t)| t.next_fire <= until)
            .min_by_key(|(id, t)| (t.next_fire, **id))
            .map(|(id, t)| (*id, *t))?;

        let timer = self.timers.get_mut(&id)?;
        self.now = self.now.max(timer.next_fire);
        timer.next_fire = timer.next_fire.saturating_add(timer.period);
        Some(id)
    }

    /// Move time forward to `until`. Time never moves backwards.
    pub fn advance_to(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for VirtualClock {
    fn now(&self) -> Millis {
        self.now
    }

    fn set_interval(&mut self, period: Millis) -> TimerId {
        // Intervals shorter than a tick would never let time advance.
        let period = period.max(Millis(1));
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(
            id,
            Interval {
                period,
                next_fire: self.now.saturating_add(period),
            },
        );
        tracing::trace!(?id, period = period.0, "set interval");
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            tracing::trace!(?id, "clear interval");
        }
    }

    fn active_timers(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/clock.rs"]
mod tests;
