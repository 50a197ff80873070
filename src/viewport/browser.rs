use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::Callback;

use crate::sections::{Intersection, SectionId};
use crate::viewport::host::{ObserverError, SectionWatch, ViewportHost, Watch};

pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new() -> Result<Self, ObserverError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(ObserverError::NoWindow)
    }

    fn supports_intersection_observer(&self) -> bool {
        Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }
}

impl ViewportHost for BrowserHost {
    fn scroll_offset(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }

    fn watch_scroll(&self, on_scroll: Callback<Option<f64>>) -> Result<Watch, ObserverError> {
        let reader = self.window.clone();
        let listener = Closure::<dyn Fn()>::new(move || {
            on_scroll.emit(reader.scroll_y().ok());
        });

        self.window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())?;

        let window = self.window.clone();
        Ok(Watch::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("Failed to remove scroll listener: {:?}", err);
            }
            debug!("Scroll listener removed");
        }))
    }

    fn watch_sections(
        &self,
        targets: &[SectionId],
        threshold: f64,
        on_change: Callback<Vec<Intersection>>,
    ) -> Result<SectionWatch, ObserverError> {
        if !self.supports_intersection_observer() {
            return Err(ObserverError::Unsupported);
        }
        let document = self.window.document().ok_or(ObserverError::NoDocument)?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let changes: Vec<Intersection> = entries
                    .iter()
                    .filter_map(|entry| {
                        let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                        // Targets are only ever our own anchors, but ignore strays.
                        let section = entry.target().id().parse::<SectionId>().ok()?;
                        Some(Intersection {
                            section,
                            intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect();
                if !changes.is_empty() {
                    on_change.emit(changes);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let mut missing = Vec::new();
        for &section in targets {
            match document.get_element_by_id(section.anchor()) {
                Some(element) => observer.observe(&element),
                None => missing.push(section),
            }
        }
        debug!(
            "Observing {} of {} sections",
            targets.len() - missing.len(),
            targets.len()
        );

        Ok(SectionWatch {
            watch: Watch::new(move || {
                observer.disconnect();
                drop(callback);
                debug!("Intersection observer disconnected");
            }),
            missing,
        })
    }
}
