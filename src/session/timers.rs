//! Host-driven timer set.
//!
//! The session never reads a clock. The host calls `advance` with the
//! elapsed time and every task that became due fires in due-time order,
//! ties broken by scheduling order.
//!
//! A repeating task that fell more than `MAX_CATCH_UP` periods behind skips
//! the older missed ticks, so a host resuming after a long pause does not
//! replay hours of them.

use alloc::vec::Vec;

/// Missed ticks of one repeating task replayed by a single advance.
pub const MAX_CATCH_UP: u64 = 64;

/// Handle to a scheduled task.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    due: u64,
    period: Option<u64>,
    task: T,
}

/// Cancellable one-shot and repeating tasks.
#[derive(Debug, Clone)]
pub struct Timers<T> {
    now: u64,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Timers<T> {
    /// Create an empty timer set at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of scheduled tasks.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over scheduled tasks in scheduling order.
    pub fn tasks(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.task)
    }

    /// Run `task` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TimerId {
        self.schedule(delay_ms, None, task)
    }

    /// Run `task` every `period_ms`, first after one period.
    ///
    /// A zero period is treated as one millisecond.
    pub fn schedule_every(&mut self, period_ms: u64, task: T) -> TimerId {
        let period = period_ms.max(1);
        self.schedule(period, Some(period), task)
    }

    fn schedule(&mut self, delay_ms: u64, period: Option<u64>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now.saturating_add(delay_ms),
            period,
            task,
        });
        id
    }

    /// Cancel one task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Cancel every task.
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            tracing::trace!(count = self.entries.len(), "cancelled timers");
        }
        self.entries.clear();
    }

    /// Pop the earliest task due at or before `target`.
    ///
    /// Moves the clock to that task's due time. Repeating tasks are
    /// rescheduled one period later; one whose next due time would overflow
    /// the clock is dropped. Returns `None` (and moves the clock to `target`)
    /// when nothing else is due.
    pub fn next_due(&mut self, target: u64) -> Option<T> {
        self.skip_missed(target);

        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position);

        let Some(position) = position else {
            self.now = self.now.max(target);
            return None;
        };

        let entry = &mut self.entries[position];
        self.now = self.now.max(entry.due);
        match entry.period.and_then(|period| entry.due.checked_add(period)) {
            Some(due) => {
                entry.due = due;
                // Rescheduling counts as a new scheduling for tie-breaks.
                entry.id = TimerId(self.next_id);
                self.next_id += 1;
                Some(entry.task.clone())
            }
            None => {
                if entry.period.is_some() {
                    tracing::trace!("repeating timer reached the end of the clock");
                }
                Some(self.entries.remove(position).task)
            }
        }
    }

    /// Move repeating tasks that are more than `MAX_CATCH_UP` periods
    /// behind `target` forward by whole periods.
    fn skip_missed(&mut self, target: u64) {
        for entry in &mut self.entries {
            let Some(period) = entry.period else {
                continue;
            };
            let behind = target.saturating_sub(entry.due) / period;
            if behind > MAX_CATCH_UP {
                let skipped = behind - MAX_CATCH_UP;
                // due + behind * period <= target, so this cannot overflow.
                entry.due += skipped * period;
                tracing::trace!(skipped, "skipped missed timer ticks");
            }
        }
    }

    /// Fire everything due up to `target`, collecting the tasks in order.
    #[cfg(test)]
    fn settle(&mut self, target: u64) -> Vec<T> {
        let mut fired = Vec::new();
        while let Some(task) = self.next_due(target) {
            fired.push(task);
        }
        fired
    }
}
