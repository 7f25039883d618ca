//! UI interaction services (separate from domain logic): the one-way
//! scroll-reveal observer and the blocking failure notification.

use crate::domain::logging::{LogComponent, get_logger};
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a section that must enter the viewport before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Reveal state of one observed section. The transition is one-way:
/// once visible, a section never hides again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Visible,
}

impl RevealPhase {
    /// Apply one observer callback for this section.
    pub fn on_intersection(self, ratio: f64, is_intersecting: bool) -> Self {
        match self {
            Self::Visible => Self::Visible,
            Self::Hidden if is_intersecting && ratio >= REVEAL_THRESHOLD => Self::Visible,
            Self::Hidden => Self::Hidden,
        }
    }
}

/// Decision for one observer callback entry. The element's `visible`
/// class is the persisted phase, so the observer callback and this
/// function together form the full reveal state machine.
pub fn next_phase(has_visible_class: bool, ratio: f64, is_intersecting: bool) -> RevealPhase {
    let phase = if has_visible_class { RevealPhase::Visible } else { RevealPhase::Hidden };
    phase.on_intersection(ratio, is_intersecting)
}

/// Attach the reveal observer to every element matching `selector`.
/// Each element starts in the offset `reveal` state and permanently gains
/// `visible` the first time it crosses the threshold.
pub fn init_scroll_reveal(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        get_logger().warn(
            LogComponent::Infrastructure("ScrollReveal"),
            "Document not available, skipping scroll reveal",
        );
        return;
    };

    let Ok(sections) = document.query_selector_all(selector) else {
        get_logger().warn(
            LogComponent::Infrastructure("ScrollReveal"),
            &format!("Invalid reveal selector: {}", selector),
        );
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let class_list = entry.target().class_list();
                let phase = next_phase(
                    class_list.contains("visible"),
                    entry.intersection_ratio(),
                    entry.is_intersecting(),
                );
                if phase == RevealPhase::Visible {
                    let _ = class_list.add_1("visible");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(_) => {
            get_logger().warn(
                LogComponent::Infrastructure("ScrollReveal"),
                "IntersectionObserver unavailable, sections stay visible",
            );
            return;
        }
    };

    let mut observed = 0usize;
    for index in 0..sections.length() {
        let Some(node) = sections.item(index) else { continue };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else { continue };
        let _ = element.class_list().add_1("reveal");
        observer.observe(&element);
        observed += 1;
    }

    get_logger().debug(
        LogComponent::Infrastructure("ScrollReveal"),
        &format!("Observing {} sections for reveal", observed),
    );

    // The observer and its callback live for the page lifetime.
    callback.forget();
    std::mem::forget(observer);
}

/// Blocking failure notification and console record, one per failed cycle
pub fn notify_failure(message: &str) {
    get_logger().error(LogComponent::Infrastructure("UI"), message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(
            "Error: Predictive analysis failed. Please check the ticker and try again.",
        );
    }
}
