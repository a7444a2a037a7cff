use std::time::Instant;

/// A cancellable task that becomes due at an instant.
///
/// The task does not run by itself, its owner takes it out when it is due and performs it.
#[derive(Debug, Clone)]
pub struct Scheduled<T> {
    pending: Option<(Instant, T)>,
}

impl<T> Default for Scheduled<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Scheduled<T> {
    /// Schedule `task` at `due`, replacing any task that is pending.
    pub fn schedule(&mut self, due: Instant, task: T) {
        self.pending = Some((due, task));
    }

    /// Cancel the pending task and return it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, task)| task)
    }

    /// Takes the task out if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((due, _)) if due <= now => self.cancel(),
            _ => None,
        }
    }

    pub fn due(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(due, _)| *due)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn task_is_taken_once_when_due() {
        let now = Instant::now();
        let mut scheduled = Scheduled::default();
        scheduled.schedule(now + Duration::from_millis(10), "tap");
        assert_eq!(scheduled.take_due(now), None);
        assert_eq!(scheduled.take_due(now + Duration::from_millis(10)), Some("tap"));
        assert_eq!(scheduled.take_due(now + Duration::from_millis(20)), None);
        assert_eq!(scheduled.due(), None);
    }

    #[test]
    fn cancelled_task_never_becomes_due() {
        let now = Instant::now();
        let mut scheduled = Scheduled::default();
        scheduled.schedule(now, 1);
        assert_eq!(scheduled.cancel(), Some(1));
        assert_eq!(scheduled.cancel(), None);
        assert_eq!(scheduled.take_due(now), None);
        assert_eq!(scheduled.due(), None);
    }
}
