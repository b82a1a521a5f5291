use gloo_timers::callback::Timeout;

/// One-shot timers provided by the host.
///
/// Dropping the returned handle cancels the callback if it has not fired yet,
/// which is how owners guarantee nothing runs after they are gone.
pub trait TimerService {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers through `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTimers;

impl TimerService for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

#[cfg(test)]
pub mod manual {
    use super::TimerService;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Entry {
        id: u64,
        due: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
    }

    /// Virtual clock. Nothing fires until the test advances time.
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().entries.retain(|entry| entry.id != self.id);
            }
        }
    }

    impl TimerService for ManualTimers {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.entries.push(Entry { id, due, callback });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    impl ManualTimers {
        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        /// Fires the earliest pending callback, moving the clock to its due time.
        /// Returns false when nothing is pending.
        pub fn fire_next(&self) -> bool {
            let entry = {
                let mut queue = self.queue.borrow_mut();
                let Some(pos) = queue
                    .entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(pos, _)| pos)
                else {
                    return false;
                };
                let entry = queue.entries.remove(pos);
                queue.now = queue.now.max(entry.due);
                entry
            };
            (entry.callback)();
            true
        }

        /// Fires everything that comes due within the next `ms` milliseconds,
        /// including callbacks scheduled by callbacks.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next_due = self.queue.borrow().entries.iter().map(|entry| entry.due).min();
                match next_due {
                    Some(due) if due <= target => {
                        self.fire_next();
                    }
                    _ => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn fires_in_due_order() {
            let timers = ManualTimers::default();
            let log = Rc::new(RefCell::new(Vec::new()));
            let a = {
                let log = log.clone();
                timers.schedule(20, Box::new(move || log.borrow_mut().push("late")))
            };
            let b = {
                let log = log.clone();
                timers.schedule(10, Box::new(move || log.borrow_mut().push("early")))
            };

            timers.advance(25);
            assert_eq!(*log.borrow(), vec!["early", "late"]);
            assert_eq!(timers.now(), 25);
            drop((a, b));
        }

        #[test]
        fn dropping_handle_cancels() {
            let timers = ManualTimers::default();
            let fired = Rc::new(Cell::new(false));
            let handle = {
                let fired = fired.clone();
                timers.schedule(5, Box::new(move || fired.set(true)))
            };
            drop(handle);

            timers.advance(100);
            assert!(!fired.get());
            assert_eq!(timers.pending(), 0);
        }
    }
}
