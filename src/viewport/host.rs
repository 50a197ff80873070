use wasm_bindgen::JsValue;
use yew::Callback;

use crate::sections::{Intersection, SectionId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObserverError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("IntersectionObserver is not supported by this browser")]
    Unsupported,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ObserverError {
    fn from(value: JsValue) -> Self {
        ObserverError::Js(format!("{:?}", value))
    }
}

/// Guard for a host subscription. Dropping it unsubscribes.
pub struct Watch {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Watch {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }
}

impl Drop for Watch {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

pub struct SectionWatch {
    pub watch: Watch,
    /// Targets with no matching element in the document.
    pub missing: Vec<SectionId>,
}

/// The environment the page is mounted in: where scroll offsets and
/// viewport intersections come from.
pub trait ViewportHost {
    fn scroll_offset(&self) -> Option<f64>;

    fn watch_scroll(&self, on_scroll: Callback<Option<f64>>) -> Result<Watch, ObserverError>;

    fn watch_sections(
        &self,
        targets: &[SectionId],
        threshold: f64,
        on_change: Callback<Vec<Intersection>>,
    ) -> Result<SectionWatch, ObserverError>;
}
