use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD;
use crate::sections::{Intersection, SectionId, VisibleSections};

/// View state owned by the page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub scrolled: bool,
    pub visible: VisibleSections,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// A scroll offset sample; `None` when the host could not report one.
    Scrolled(Option<f64>),
    Intersected(Vec<Intersection>),
    /// Reveal without waiting for an intersection (missing anchors).
    Reveal(Vec<SectionId>),
    /// The host cannot report intersections at all.
    RevealAll,
}

pub fn scrolled_past(offset: Option<f64>) -> bool {
    let offset = offset.filter(|o| o.is_finite()).unwrap_or(0.0);
    offset > SCROLL_THRESHOLD
}

impl PageState {
    pub fn apply(self, action: &PageAction) -> PageState {
        match action {
            PageAction::Scrolled(offset) => PageState {
                scrolled: scrolled_past(*offset),
                ..self
            },
            PageAction::Intersected(entries) => PageState {
                visible: entries
                    .iter()
                    .filter(|entry| entry.intersecting)
                    .fold(self.visible, |set, entry| set.with(entry.section)),
                ..self
            },
            PageAction::Reveal(ids) => PageState {
                visible: ids.iter().fold(self.visible, |set, id| set.with(*id)),
                ..self
            },
            PageAction::RevealAll => PageState {
                visible: VisibleSections::all(),
                ..self
            },
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(&action);
        if next == *self {
            return self;
        }
        if next.visible != self.visible {
            debug!("{} of {} sections revealed", next.visible.len(), SectionId::ALL.len());
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seen(section: SectionId) -> Intersection {
        Intersection { section, intersecting: true }
    }

    fn left(section: SectionId) -> Intersection {
        Intersection { section, intersecting: false }
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!scrolled_past(Some(0.0)));
        assert!(!scrolled_past(Some(20.0)));
        assert!(scrolled_past(Some(20.5)));
        assert!(scrolled_past(Some(25.0)));
    }

    #[test]
    fn unreadable_offset_counts_as_top() {
        assert!(!scrolled_past(None));
        assert!(!scrolled_past(Some(f64::NAN)));
        assert!(!scrolled_past(Some(f64::INFINITY)));
    }

    #[test]
    fn fresh_mount_is_unscrolled_and_hidden() {
        let state = PageState::default().apply(&PageAction::Scrolled(Some(0.0)));
        assert!(!state.scrolled);
        assert!(state.visible.is_empty());
    }

    #[test]
    fn scrolling_leaves_sections_alone() {
        let state = PageState::default().apply(&PageAction::Scrolled(Some(25.0)));
        assert!(state.scrolled);
        assert!(state.visible.is_empty());
    }

    #[test]
    fn intersecting_pricing_reveals_only_pricing() {
        let state = PageState::default()
            .apply(&PageAction::Intersected(vec![seen(SectionId::Pricing), left(SectionId::Problem)]));
        assert_eq!(state.visible.iter().collect::<Vec<_>>(), vec![SectionId::Pricing]);
        assert!(!state.scrolled);
    }

    #[test]
    fn reveal_survives_leaving_the_viewport() {
        let state = PageState::default()
            .apply(&PageAction::Intersected(vec![seen(SectionId::Pricing)]))
            .apply(&PageAction::Scrolled(Some(0.0)))
            .apply(&PageAction::Intersected(vec![left(SectionId::Pricing)]));
        assert!(state.visible.contains(SectionId::Pricing));
    }

    #[test]
    fn reveal_all_marks_every_section() {
        let state = PageState::default().apply(&PageAction::RevealAll);
        assert_eq!(state.visible, VisibleSections::all());
    }

    #[test]
    fn unchanged_state_keeps_the_same_instance() {
        let state = Rc::new(PageState::default()).reduce(PageAction::Intersected(vec![seen(SectionId::Pricing)]));
        let again = state.clone().reduce(PageAction::Intersected(vec![seen(SectionId::Pricing)]));
        assert!(Rc::ptr_eq(&state, &again));

        let scrolled = again.clone().reduce(PageAction::Scrolled(Some(30.0)));
        let still = scrolled.clone().reduce(PageAction::Scrolled(Some(40.0)));
        assert!(!Rc::ptr_eq(&again, &scrolled));
        assert!(Rc::ptr_eq(&scrolled, &still));
    }

    fn section() -> impl Strategy<Value = SectionId> {
        prop::sample::select(SectionId::ALL.to_vec())
    }

    fn action() -> impl Strategy<Value = PageAction> {
        prop_oneof![
            4 => prop::option::of(-100.0f64..2000.0).prop_map(PageAction::Scrolled),
            4 => prop::collection::vec((section(), any::<bool>()), 0..8).prop_map(|entries| {
                PageAction::Intersected(
                    entries
                        .into_iter()
                        .map(|(section, intersecting)| Intersection { section, intersecting })
                        .collect(),
                )
            }),
            1 => prop::collection::vec(section(), 0..3).prop_map(PageAction::Reveal),
            1 => Just(PageAction::RevealAll),
        ]
    }

    proptest! {
        #[test]
        fn scrolled_tracks_the_latest_offset(offset in -1000.0f64..10_000.0) {
            let state = PageState::default().apply(&PageAction::Scrolled(Some(offset)));
            prop_assert_eq!(state.scrolled, offset > 20.0);
        }

        #[test]
        fn visible_sections_never_shrink(actions in prop::collection::vec(action(), 0..40)) {
            let mut state = PageState::default();
            for action in &actions {
                let next = state.apply(action);
                prop_assert!(state.visible.is_subset(next.visible));
                state = next;
            }
        }

        #[test]
        fn repeated_intersection_is_idempotent(ids in prop::collection::vec(section(), 1..7)) {
            let action = PageAction::Intersected(ids.iter().map(|id| seen(*id)).collect());
            let once = PageState::default().apply(&action);
            prop_assert_eq!(once.apply(&action), once);
        }
    }
}
