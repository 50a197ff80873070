//! Pure mapping from page state to presentation.

use crate::config::REVEAL_OFFSET_REM;
use crate::sections::{SectionId, VisibleSections};
use crate::shell::state::PageState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderLook {
    /// Transparent, floating over the hero.
    Top,
    /// Opaque, blurred background with a drop shadow.
    Solid,
}

impl HeaderLook {
    pub fn class(self) -> &'static str {
        match self {
            HeaderLook::Top => "site-header--top",
            HeaderLook::Solid => "site-header--solid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLook {
    pub opacity: f32,
    /// Downward displacement in rem; zero once revealed.
    pub offset_rem: f32,
}

impl SectionLook {
    pub const HIDDEN: SectionLook = SectionLook {
        opacity: 0.0,
        offset_rem: REVEAL_OFFSET_REM,
    };

    pub const SHOWN: SectionLook = SectionLook {
        opacity: 1.0,
        offset_rem: 0.0,
    };

    pub fn is_shown(&self) -> bool {
        *self == SectionLook::SHOWN
    }

    pub fn class(&self) -> &'static str {
        if self.is_shown() {
            "reveal--shown"
        } else {
            "reveal--hidden"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageLook {
    pub header: HeaderLook,
    sections: [(SectionId, SectionLook); 7],
}

impl PageLook {
    pub fn section(&self, id: SectionId) -> SectionLook {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, look)| *look)
            .unwrap_or(SectionLook::HIDDEN)
    }
}

pub fn header_look(scrolled: bool) -> HeaderLook {
    if scrolled {
        HeaderLook::Solid
    } else {
        HeaderLook::Top
    }
}

pub fn section_look(id: SectionId, visible: VisibleSections) -> SectionLook {
    if visible.contains(id) {
        SectionLook::SHOWN
    } else {
        SectionLook::HIDDEN
    }
}

pub fn render(state: &PageState) -> PageLook {
    PageLook {
        header: header_look(state.scrolled),
        sections: SectionId::ALL.map(|id| (id, section_look(id, state.visible))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_page_is_transparent_and_hidden() {
        let look = render(&PageState::default());
        assert_eq!(look.header, HeaderLook::Top);
        for id in SectionId::ALL {
            assert_eq!(look.section(id), SectionLook::HIDDEN);
            assert_eq!(look.section(id).offset_rem, 2.0);
        }
    }

    #[test]
    fn scrolled_header_is_solid() {
        let look = render(&PageState {
            scrolled: true,
            ..PageState::default()
        });
        assert_eq!(look.header, HeaderLook::Solid);
        assert_eq!(look.header.class(), "site-header--solid");
        assert!(SectionId::ALL.iter().all(|id| !look.section(*id).is_shown()));
    }

    #[test]
    fn only_revealed_sections_rest_in_place() {
        let state = PageState {
            scrolled: false,
            visible: VisibleSections::default().with(SectionId::Pricing),
        };
        let look = render(&state);
        assert_eq!(look.section(SectionId::Pricing), SectionLook::SHOWN);
        assert_eq!(look.section(SectionId::Pricing).class(), "reveal--shown");
        for id in SectionId::ALL.into_iter().filter(|id| *id != SectionId::Pricing) {
            assert_eq!(look.section(id).class(), "reveal--hidden");
        }
    }

    #[test]
    fn render_is_pure() {
        let state = PageState {
            scrolled: true,
            visible: [SectionId::Problem, SectionId::Audience].into_iter().collect(),
        };
        assert_eq!(render(&state), render(&state));
        assert_eq!(state, PageState {
            scrolled: true,
            visible: [SectionId::Audience, SectionId::Problem].into_iter().collect(),
        });
    }
}
