use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::error::{self, HostError};

const SCROLL_BEHAVIOR: &str = "scroll-behavior";

/// Something whose CSS `scroll-behavior` can be read and written.
pub trait ScrollBehaviorTarget {
    fn scroll_behavior(&self) -> String;
    fn set_scroll_behavior(&self, value: &str);
}

/// The document's root element (`<html>`).
pub struct DocumentRoot(HtmlElement);

impl DocumentRoot {
    pub fn current() -> Result<Self, HostError> {
        let root = error::document()?
            .document_element()
            .ok_or(HostError::NoDocument)?;
        root.dyn_into::<HtmlElement>()
            .map(DocumentRoot)
            .map_err(|_| HostError::NoDocument)
    }
}

impl ScrollBehaviorTarget for DocumentRoot {
    fn scroll_behavior(&self) -> String {
        self.0
            .style()
            .get_property_value(SCROLL_BEHAVIOR)
            .unwrap_or_default()
    }

    fn set_scroll_behavior(&self, value: &str) {
        let style = self.0.style();
        let result = if value.is_empty() {
            style.remove_property(SCROLL_BEHAVIOR).map(|_| ())
        } else {
            style.set_property(SCROLL_BEHAVIOR, value)
        };
        if let Err(err) = result {
            warn!("could not set scroll-behavior: {}", HostError::js("CSSStyleDeclaration", err));
        }
    }
}

/// Holds the target in smooth-scroll mode. Whatever value was there before is
/// put back when the guard is dropped, including during unwinding.
pub struct SmoothScrollGuard<T: ScrollBehaviorTarget> {
    target: T,
    previous: String,
}

impl<T: ScrollBehaviorTarget> SmoothScrollGuard<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.scroll_behavior();
        target.set_scroll_behavior("smooth");
        Self { target, previous }
    }
}

impl<T: ScrollBehaviorTarget> Drop for SmoothScrollGuard<T> {
    fn drop(&mut self) {
        self.target.set_scroll_behavior(&self.previous);
    }
}

/// Keeps the page in smooth-scroll mode while the calling component is mounted.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        |_| {
            let guard = match DocumentRoot::current() {
                Ok(root) => Some(SmoothScrollGuard::acquire(root)),
                Err(err) => {
                    warn!("smooth scrolling unavailable: {}", err);
                    None
                }
            };
            move || drop(guard)
        },
        (),
    );
}

/// Smoothly scrolls the section with the given id to the top of the viewport.
pub fn scroll_to_section(id: &str) -> Result<(), HostError> {
    let element = error::document()?
        .get_element_by_id(id)
        .ok_or_else(|| HostError::MissingElement(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    debug!("scrolled to #{}", id);
    Ok(())
}
