use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::error::HostError;
use crate::motion::visibility::{IntersectionVisibility, RegionObservation, VisibilityService};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepTrackerState {
    pub active_index: usize,
    /// Vertical centre of the active step inside the timeline container, in pixels.
    pub indicator_offset: f64,
}

/// Tracks which timeline step is in view.
///
/// Observations are applied in arrival order. When several steps enter within
/// one batch, the last one processed wins.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTracker {
    step_count: usize,
    threshold: f64,
    state: StepTrackerState,
}

impl StepTracker {
    pub fn new(step_count: usize, threshold: f64) -> Self {
        Self {
            step_count,
            threshold: threshold.clamp(0.0, 1.0),
            state: StepTrackerState {
                active_index: 0,
                indicator_offset: 0.0,
            },
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> StepTrackerState {
        self.state
    }

    /// Applies one batch of observations. Returns true if the state changed.
    pub fn observe_batch<I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = RegionObservation>,
    {
        let before = self.state;
        for observation in batch {
            if observation.index >= self.step_count {
                debug!("ignoring observation for unknown step {}", observation.index);
                continue;
            }
            if observation.entered(self.threshold) {
                self.state = StepTrackerState {
                    active_index: observation.index,
                    indicator_offset: observation.midpoint(),
                };
            }
        }
        if self.state != before {
            debug!("active step is now {}", self.state.active_index);
            true
        } else {
            false
        }
    }
}

/// Feeds a host's visibility batches into a [`StepTracker`]. Observation stops
/// when the driver is dropped.
pub struct StepTrackerDriver<S> {
    _subscription: S,
}

impl<S> StepTrackerDriver<S> {
    pub fn attach<V>(
        service: &V,
        regions: Vec<V::Region>,
        mut tracker: StepTracker,
        on_change: impl Fn(StepTrackerState) + 'static,
    ) -> Result<Self, HostError>
    where
        V: VisibilityService<Subscription = S>,
    {
        let threshold = tracker.threshold();
        let subscription = service.observe(
            regions,
            threshold,
            Box::new(move |batch: Vec<RegionObservation>| {
                if tracker.observe_batch(batch) {
                    on_change(tracker.state());
                }
            }),
        )?;
        Ok(Self {
            _subscription: subscription,
        })
    }
}

fn step_regions(container: &NodeRef) -> Result<Vec<Element>, HostError> {
    let container = container.cast::<Element>().ok_or(HostError::Unmounted)?;
    let nodes = container
        .query_selector_all("[data-index]")
        .map_err(|err| HostError::js("querySelectorAll", err))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Observes every `[data-index]` child of `container` while mounted.
#[hook]
pub fn use_step_tracker(container: NodeRef, step_count: usize, threshold: f64) -> StepTrackerState {
    let tracker = StepTracker::new(step_count, threshold);
    let state = use_state_eq(|| tracker.state());

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |_| {
                let driver = step_regions(&container).and_then(|regions| {
                    debug!("observing {} process steps", regions.len());
                    StepTrackerDriver::attach(&IntersectionVisibility, regions, tracker, move |next| {
                        setter.set(next)
                    })
                });
                let driver = match driver {
                    Ok(driver) => Some(driver),
                    Err(err) => {
                        warn!("step tracking disabled: {}", err);
                        None
                    }
                };
                move || drop(driver)
            },
            (step_count, threshold.to_bits()),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::visibility::fake::{entering, FakeVisibility};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn leaving(index: usize) -> RegionObservation {
        RegionObservation {
            index,
            intersecting: true,
            ratio: 0.3,
            top: 0.0,
            height: 200.0,
        }
    }

    #[test]
    fn starts_on_first_step() {
        let tracker = StepTracker::new(4, 0.6);
        assert_eq!(tracker.state(), StepTrackerState {
            active_index: 0,
            indicator_offset: 0.0,
        });
    }

    #[test]
    fn follows_steps_in_event_order() {
        let mut tracker = StepTracker::new(3, 0.6);

        assert!(tracker.observe_batch([entering(1, 300.0, 200.0)]));
        assert_eq!(tracker.state().active_index, 1);
        assert_eq!(tracker.state().indicator_offset, 400.0);

        assert!(tracker.observe_batch([entering(2, 600.0, 200.0)]));
        assert_eq!(tracker.state().active_index, 2);
        assert_eq!(tracker.state().indicator_offset, 700.0);
    }

    #[test]
    fn last_entry_in_a_batch_wins() {
        let mut tracker = StepTracker::new(4, 0.6);
        tracker.observe_batch([entering(3, 900.0, 200.0), entering(1, 300.0, 200.0)]);
        assert_eq!(tracker.state().active_index, 1);

        tracker.observe_batch([entering(0, 0.0, 200.0), entering(2, 600.0, 200.0)]);
        assert_eq!(tracker.state().active_index, 2);
    }

    #[test]
    fn below_threshold_does_not_activate() {
        let mut tracker = StepTracker::new(3, 0.6);
        tracker.observe_batch([entering(2, 600.0, 200.0)]);

        assert!(!tracker.observe_batch([leaving(1)]));
        assert_eq!(tracker.state().active_index, 2);
    }

    #[test]
    fn ratio_rounded_below_threshold_activates_step() {
        let mut tracker = StepTracker::new(3, 0.6);
        let observation = RegionObservation {
            ratio: 0.5995,
            ..entering(2, 600.0, 200.0)
        };
        assert!(tracker.observe_batch([observation]));
        assert_eq!(tracker.state().active_index, 2);
    }

    #[test]
    fn unknown_steps_are_ignored() {
        let mut tracker = StepTracker::new(2, 0.6);
        assert!(!tracker.observe_batch([entering(5, 10.0, 10.0)]));
        assert_eq!(tracker.state().active_index, 0);
    }

    #[test]
    fn same_step_again_reports_no_change() {
        let mut tracker = StepTracker::new(3, 0.6);
        assert!(tracker.observe_batch([entering(1, 300.0, 200.0)]));
        assert!(!tracker.observe_batch([entering(1, 300.0, 200.0)]));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(StepTracker::new(1, 4.0).threshold(), 1.0);
        assert_eq!(StepTracker::new(1, -1.0).threshold(), 0.0);
    }

    #[test]
    fn driver_reports_changes_from_the_host() {
        let host = FakeVisibility::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _driver = StepTrackerDriver::attach(&host, vec![0, 1, 2], StepTracker::new(3, 0.6), move |state| {
            sink.borrow_mut().push(state.active_index)
        })
        .unwrap();

        assert_eq!(host.observed(), 3);
        assert_eq!(host.threshold(), 0.6);

        host.deliver(vec![entering(1, 300.0, 200.0)]);
        host.deliver(vec![leaving(0)]);
        host.deliver(vec![entering(2, 600.0, 200.0)]);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn dropping_driver_detaches_observer() {
        let host = FakeVisibility::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let driver = StepTrackerDriver::attach(&host, vec![0, 1, 2], StepTracker::new(3, 0.6), move |state| {
            sink.borrow_mut().push(state.active_index)
        })
        .unwrap();
        assert!(host.is_attached());

        drop(driver);
        assert!(!host.is_attached());
        assert!(!host.deliver(vec![entering(1, 300.0, 200.0)]));
        assert!(seen.borrow().is_empty());
    }
}
