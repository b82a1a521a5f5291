use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::HostError;

/// One region's visibility as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionObservation {
    /// Stable index taken from the region's `data-index` attribute.
    pub index: usize,
    pub intersecting: bool,
    /// Visible fraction of the region, 0.0 to 1.0.
    pub ratio: f64,
    /// Offset of the region's top edge inside its container, in pixels.
    pub top: f64,
    pub height: f64,
}

/// Browsers may report a ratio slightly under the threshold that fired the callback.
const RATIO_TOLERANCE: f64 = 1e-3;

impl RegionObservation {
    pub fn entered(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

pub type BatchListener = Box<dyn FnMut(Vec<RegionObservation>)>;

/// Visibility notifications provided by the host. Batches are delivered in
/// the order the host produced them; dropping the subscription stops them.
pub trait VisibilityService {
    type Region;
    type Subscription;

    fn observe(
        &self,
        regions: Vec<Self::Region>,
        threshold: f64,
        on_batch: BatchListener,
    ) -> Result<Self::Subscription, HostError>;
}

/// `IntersectionObserver` backed visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionVisibility;

pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    targets: Vec<Element>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        for target in &self.targets {
            self.observer.unobserve(target);
        }
        self.observer.disconnect();
    }
}

fn observation_from_entry(entry: &IntersectionObserverEntry) -> RegionObservation {
    let target = entry.target();
    let index = target
        .get_attribute("data-index")
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let top = target
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_top()))
        .unwrap_or(0.0);
    RegionObservation {
        index,
        intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
        top,
        height: f64::from(target.client_height()),
    }
}

impl VisibilityService for IntersectionVisibility {
    type Region = Element;
    type Subscription = IntersectionSubscription;

    fn observe(
        &self,
        regions: Vec<Element>,
        threshold: f64,
        mut on_batch: BatchListener,
    ) -> Result<IntersectionSubscription, HostError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .map(|value| observation_from_entry(value.unchecked_ref::<IntersectionObserverEntry>()))
                .collect();
            on_batch(batch);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| HostError::js("IntersectionObserver", err))?;

        for region in &regions {
            observer.observe(region);
        }

        Ok(IntersectionSubscription {
            observer,
            targets: regions,
            _callback: callback,
        })
    }
}

/// Latches to true the first time `amount` of the node is on screen.
#[hook]
pub fn use_reveal(node: NodeRef, amount: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = revealed.setter();
                        IntersectionVisibility
                            .observe(
                                vec![element],
                                amount,
                                Box::new(move |batch: Vec<RegionObservation>| {
                                    if batch.iter().any(|obs| obs.entered(amount)) {
                                        setter.set(true);
                                    }
                                }),
                            )
                            .map_err(|err| {
                                // Without an observer the content simply stays visible.
                                warn!("reveal disabled: {}", err);
                                revealed.set(true);
                            })
                            .ok()
                    }
                    None => {
                        revealed.set(true);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    *revealed
}
