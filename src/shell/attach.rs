use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use yew::Callback;

use crate::config::REVEAL_THRESHOLD;
use crate::sections::{Intersection, SectionId};
use crate::shell::state::PageAction;
use crate::viewport::host::{ObserverError, ViewportHost, Watch};

/// Forwards actions to the page until closed. Host callbacks that are
/// already queued when the page unmounts land on a closed relay.
#[derive(Clone)]
struct Relay {
    sink: Callback<PageAction>,
    open: Rc<Cell<bool>>,
}

impl Relay {
    fn new(sink: Callback<PageAction>) -> Self {
        Self {
            sink,
            open: Rc::new(Cell::new(true)),
        }
    }

    fn emit(&self, action: PageAction) {
        if self.open.get() {
            self.sink.emit(action);
        }
    }

    fn close(&self) {
        self.open.set(false);
    }
}

/// Live observer subscriptions for one mounted page.
pub struct Attachment {
    relay: Relay,
    _scroll: Option<Watch>,
    _sections: Option<Watch>,
}

impl Drop for Attachment {
    fn drop(&mut self) {
        // Close before the watches are dropped so nothing dispatches mid-teardown.
        self.relay.close();
        debug!("Page observers detached");
    }
}

/// Subscribes the page reducer to the host's scroll and intersection
/// signals. Any signal the host cannot provide degrades to showing
/// everything rather than hiding content.
pub fn attach(host: &impl ViewportHost, sink: Callback<PageAction>) -> Attachment {
    let relay = Relay::new(sink);

    relay.emit(PageAction::Scrolled(host.scroll_offset()));

    let scroll = {
        let relay = relay.clone();
        match host.watch_scroll(Callback::from(move |offset: Option<f64>| {
            relay.emit(PageAction::Scrolled(offset))
        })) {
            Ok(watch) => Some(watch),
            Err(err) => {
                warn!("Scroll tracking unavailable: {}", err);
                None
            }
        }
    };

    let sections = {
        let on_change = {
            let relay = relay.clone();
            Callback::from(move |entries: Vec<Intersection>| relay.emit(PageAction::Intersected(entries)))
        };
        match host.watch_sections(&SectionId::ALL, REVEAL_THRESHOLD, on_change) {
            Ok(observed) => {
                if !observed.missing.is_empty() {
                    warn!("Section anchors not found, showing them now: {:?}", observed.missing);
                    relay.emit(PageAction::Reveal(observed.missing));
                }
                Some(observed.watch)
            }
            Err(ObserverError::Unsupported) => {
                warn!("IntersectionObserver unsupported, revealing all sections");
                relay.emit(PageAction::RevealAll);
                None
            }
            Err(err) => {
                warn!("Section tracking failed ({}), revealing all sections", err);
                relay.emit(PageAction::RevealAll);
                None
            }
        }
    };

    debug!("Page observers attached");
    Attachment {
        relay,
        _scroll: scroll,
        _sections: sections,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::shell::state::PageState;
    use crate::viewport::host::SectionWatch;

    #[derive(Default)]
    struct FakeHost {
        offset: Option<f64>,
        unsupported: bool,
        absent: Vec<SectionId>,
        on_scroll: RefCell<Option<Callback<Option<f64>>>>,
        on_change: RefCell<Option<Callback<Vec<Intersection>>>>,
        observed: RefCell<Vec<SectionId>>,
        threshold: Cell<f64>,
        disposed: Rc<Cell<usize>>,
    }

    impl FakeHost {
        fn scroll_to(&self, offset: f64) {
            let on_scroll = self.on_scroll.borrow().clone();
            if let Some(on_scroll) = on_scroll {
                on_scroll.emit(Some(offset));
            }
        }

        fn intersect(&self, section: SectionId, intersecting: bool) {
            let on_change = self.on_change.borrow().clone();
            if let Some(on_change) = on_change {
                on_change.emit(vec![Intersection { section, intersecting }]);
            }
        }

        fn watch(&self) -> Watch {
            let disposed = self.disposed.clone();
            Watch::new(move || disposed.set(disposed.get() + 1))
        }
    }

    impl ViewportHost for FakeHost {
        fn scroll_offset(&self) -> Option<f64> {
            self.offset
        }

        fn watch_scroll(&self, on_scroll: Callback<Option<f64>>) -> Result<Watch, ObserverError> {
            *self.on_scroll.borrow_mut() = Some(on_scroll);
            Ok(self.watch())
        }

        fn watch_sections(
            &self,
            targets: &[SectionId],
            threshold: f64,
            on_change: Callback<Vec<Intersection>>,
        ) -> Result<SectionWatch, ObserverError> {
            if self.unsupported {
                return Err(ObserverError::Unsupported);
            }
            *self.on_change.borrow_mut() = Some(on_change);
            self.threshold.set(threshold);
            let (missing, observed): (Vec<SectionId>, Vec<SectionId>) =
                targets.iter().copied().partition(|id| self.absent.contains(id));
            *self.observed.borrow_mut() = observed;
            Ok(SectionWatch {
                watch: self.watch(),
                missing,
            })
        }
    }

    /// Folds dispatched actions into a state, like the component reducer.
    fn recording_sink() -> (Callback<PageAction>, Rc<RefCell<PageState>>, Rc<Cell<usize>>) {
        let state = Rc::new(RefCell::new(PageState::default()));
        let dispatched = Rc::new(Cell::new(0));
        let sink = {
            let state = state.clone();
            let dispatched = dispatched.clone();
            Callback::from(move |action: PageAction| {
                dispatched.set(dispatched.get() + 1);
                let next = state.borrow().apply(&action);
                *state.borrow_mut() = next;
            })
        };
        (sink, state, dispatched)
    }

    #[test]
    fn observes_every_section_once_at_ten_percent() {
        let host = FakeHost::default();
        let (sink, state, _) = recording_sink();
        let _attached = attach(&host, sink);

        assert_eq!(*host.observed.borrow(), SectionId::ALL.to_vec());
        assert_eq!(host.threshold.get(), 0.1);
        assert_eq!(*state.borrow(), PageState::default());
    }

    #[test]
    fn samples_the_offset_at_mount() {
        let host = FakeHost {
            offset: Some(120.0),
            ..FakeHost::default()
        };
        let (sink, state, _) = recording_sink();
        let _attached = attach(&host, sink);
        assert!(state.borrow().scrolled);
        assert!(state.borrow().visible.is_empty());
    }

    #[test]
    fn scroll_and_intersection_events_reach_the_page() {
        let host = FakeHost::default();
        let (sink, state, _) = recording_sink();
        let _attached = attach(&host, sink);

        host.scroll_to(25.0);
        assert!(state.borrow().scrolled);
        assert!(state.borrow().visible.is_empty());

        host.intersect(SectionId::Pricing, true);
        host.intersect(SectionId::Pricing, false);
        host.scroll_to(3.0);
        let state = *state.borrow();
        assert!(!state.scrolled);
        assert_eq!(state.visible.iter().collect::<Vec<_>>(), vec![SectionId::Pricing]);
    }

    #[test]
    fn unsupported_host_shows_everything() {
        let host = FakeHost {
            unsupported: true,
            ..FakeHost::default()
        };
        let (sink, state, _) = recording_sink();
        let _attached = attach(&host, sink);
        assert_eq!(state.borrow().visible.len(), SectionId::ALL.len());
    }

    #[test]
    fn missing_anchor_is_revealed_immediately() {
        let host = FakeHost {
            absent: vec![SectionId::Audience],
            ..FakeHost::default()
        };
        let (sink, state, _) = recording_sink();
        let _attached = attach(&host, sink);

        assert!(!host.observed.borrow().contains(&SectionId::Audience));
        assert_eq!(
            state.borrow().visible.iter().collect::<Vec<_>>(),
            vec![SectionId::Audience]
        );
    }

    #[test]
    fn nothing_dispatches_after_detach() {
        let host = FakeHost::default();
        let (sink, state, dispatched) = recording_sink();
        let attached = attach(&host, sink);
        let before = dispatched.get();

        drop(attached);
        assert_eq!(host.disposed.get(), 2);

        host.scroll_to(500.0);
        host.intersect(SectionId::Problem, true);
        assert_eq!(dispatched.get(), before);
        assert_eq!(*state.borrow(), PageState::default());
    }
}
