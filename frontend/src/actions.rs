use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, window, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("tracker call threw: {0}")]
    Call(String),
}

/// An advertising pixel the host page may or may not provide.
pub trait ConversionTracker {
    fn name(&self) -> &'static str;
    fn track(&self, event: &str) -> Result<(), TrackError>;
}

/// Meta Pixel, reached through the `fbq` function the pixel snippet defines on `window`.
pub struct MetaPixel {
    fbq: js_sys::Function,
}

impl MetaPixel {
    /// Looks for `window.fbq` once. `None` when the snippet isn't loaded or was blocked.
    pub fn detect() -> Option<Self> {
        let window = window()?;
        let fbq = js_sys::Reflect::get(&window, &JsValue::from_str("fbq")).ok()?;
        let fbq = fbq.dyn_into::<js_sys::Function>().ok()?;
        Some(Self { fbq })
    }
}

impl ConversionTracker for MetaPixel {
    fn name(&self) -> &'static str {
        "meta-pixel"
    }

    fn track(&self, event: &str) -> Result<(), TrackError> {
        self.fbq
            .call2(
                &JsValue::NULL,
                &JsValue::from_str("track"),
                &JsValue::from_str(event),
            )
            .map(|_| ())
            .map_err(|e| TrackError::Call(format!("{:?}", e)))
    }
}

/// What the "buy" buttons do: report the conversion if a tracker was injected,
/// then leave for the checkout page.
pub struct CheckoutAction {
    url: String,
    event: String,
    tracker: Option<Rc<dyn ConversionTracker>>,
}

impl CheckoutAction {
    pub fn new(config: &Config, tracker: Option<Rc<dyn ConversionTracker>>) -> Self {
        Self {
            url: config.checkout_url.clone(),
            event: config.tracking_event.clone(),
            tracker,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Tracks (best effort) and hands the checkout URL to `navigate`.
    pub fn initiate_with(&self, navigate: impl FnOnce(&str)) {
        match &self.tracker {
            Some(tracker) => {
                if let Err(e) = tracker.track(&self.event) {
                    warn!("{} failed to track {}: {}", tracker.name(), self.event, e);
                }
            }
            None => debug!("No conversion tracker, skipping {}", self.event),
        }
        navigate(&self.url);
    }

    pub fn initiate(&self) {
        info!("Redirecting to checkout at {}", self.url());
        self.initiate_with(|url| {
            if let Some(window) = window() {
                let _ = window.location().set_href(url);
            }
        });
    }
}

/// Smoothly scrolls to the element with `id`. Returns false, doing nothing,
/// when the page has no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        debug!("No #{} on the page, not scrolling", id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTracker {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ConversionTracker for RecordingTracker {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn track(&self, event: &str) -> Result<(), TrackError> {
            self.calls.borrow_mut().push(event.to_string());
            if self.fail {
                Err(TrackError::Call("blocked".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn injected(tracker: &Rc<RecordingTracker>) -> Option<Rc<dyn ConversionTracker>> {
        Some(tracker.clone() as Rc<dyn ConversionTracker>)
    }

    fn redirect_target(action: &CheckoutAction) -> Option<String> {
        let mut target = None;
        action.initiate_with(|url| target = Some(url.to_string()));
        target
    }

    #[test]
    fn tracks_once_then_redirects() {
        let tracker = Rc::new(RecordingTracker::default());
        let action = CheckoutAction::new(&Config::default(), injected(&tracker));

        let target = redirect_target(&action);

        assert_eq!(*tracker.calls.borrow(), vec!["InitiateCheckout".to_string()]);
        assert_eq!(target.as_deref(), Some("https://pay.kiwify.com.br/ZQnfEu4"));
    }

    #[test]
    fn redirects_without_tracker() {
        let action = CheckoutAction::new(&Config::default(), None);
        assert_eq!(redirect_target(&action).as_deref(), Some(action.url()));
    }

    #[test]
    fn failing_tracker_does_not_block_redirect() {
        let tracker = Rc::new(RecordingTracker {
            fail: true,
            ..Default::default()
        });
        let action = CheckoutAction::new(&Config::default(), injected(&tracker));

        assert!(redirect_target(&action).is_some());
        assert_eq!(tracker.calls.borrow().len(), 1);
    }

    #[test]
    fn uses_configured_url_and_event() {
        let config = Config {
            checkout_url: "https://example.com/pay".to_string(),
            tracking_event: "Purchase".to_string(),
            ..Config::default()
        };
        let tracker = Rc::new(RecordingTracker::default());
        let action = CheckoutAction::new(&config, injected(&tracker));

        assert_eq!(redirect_target(&action).as_deref(), Some("https://example.com/pay"));
        assert_eq!(*tracker.calls.borrow(), vec!["Purchase".to_string()]);
    }
}
