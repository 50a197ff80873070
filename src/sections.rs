use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The animated content blocks of the landing page, in page order.
///
/// Each one is rendered exactly once and observed exactly once; the
/// kebab-case name doubles as its DOM id and its key in the content manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Problem,
    Solution,
    AiFeature,
    Benefits,
    Audience,
    Process,
    Pricing,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Problem,
        SectionId::Solution,
        SectionId::AiFeature,
        SectionId::Benefits,
        SectionId::Audience,
        SectionId::Process,
        SectionId::Pricing,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Problem => "problem",
            SectionId::Solution => "solution",
            SectionId::AiFeature => "ai-feature",
            SectionId::Benefits => "benefits",
            SectionId::Audience => "audience",
            SectionId::Process => "process",
            SectionId::Pricing => "pricing",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// One intersection report from the viewport host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub section: SectionId,
    pub intersecting: bool,
}

/// Set of sections that have been revealed. Only ever grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleSections(u8);

impl VisibleSections {
    pub fn all() -> Self {
        SectionId::ALL.into_iter().fold(Self::default(), |set, id| set.with(id))
    }

    pub fn contains(self, id: SectionId) -> bool {
        self.0 & id.bit() != 0
    }

    /// Returns the set with `id` added; adding a present id is a no-op.
    pub fn with(self, id: SectionId) -> Self {
        Self(self.0 | id.bit())
    }

    pub fn is_subset(self, other: VisibleSections) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SectionId> {
        SectionId::ALL.into_iter().filter(move |id| self.contains(*id))
    }
}

impl FromIterator<SectionId> for VisibleSections {
    fn from_iter<I: IntoIterator<Item = SectionId>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |set, id| set.with(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_parse_back_to_their_section() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert_eq!(
            "demo".parse::<SectionId>(),
            Err(UnknownSection("demo".to_string()))
        );
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn manifest_keys_deserialize_as_kebab_case() {
        let id: SectionId = serde_json::from_str("\"ai-feature\"").unwrap();
        assert_eq!(id, SectionId::AiFeature);
    }

    #[test]
    fn adding_twice_is_a_no_op() {
        let once = VisibleSections::default().with(SectionId::Pricing);
        let twice = once.with(SectionId::Pricing);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
        assert!(twice.contains(SectionId::Pricing));
        assert!(!twice.contains(SectionId::Problem));
    }

    #[test]
    fn all_contains_every_section_in_page_order() {
        let all = VisibleSections::all();
        assert_eq!(all.iter().collect::<Vec<_>>(), SectionId::ALL.to_vec());
        assert!(VisibleSections::default().is_subset(all));
        assert!(!all.is_subset(VisibleSections::default()));
    }
}
