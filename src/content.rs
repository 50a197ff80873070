//! Page copy, pricing and contact details, loaded from the embedded manifest.

use serde::Deserialize;

use crate::sections::SectionId;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse content manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("section `{0}` is missing from the content manifest")]
    MissingSection(SectionId),
    #[error("section `{0}` appears more than once in the content manifest")]
    DuplicateSection(SectionId),
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Content {
    pub brand: Brand,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub sections: Vec<Section>,
    pub demo: Demo,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub header_cta: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub highlight: String,
    pub lead: String,
    pub proof: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Blue,
    Red,
    Purple,
    Emerald,
    Green,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Blue => "tone-blue",
            Tone::Red => "tone-red",
            Tone::Purple => "tone-purple",
            Tone::Emerald => "tone-emerald",
            Tone::Green => "tone-green",
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    #[default]
    Plain,
    BlueFade,
    PurpleFade,
    Gray,
    GrayFade,
}

impl Backdrop {
    pub fn class(self) -> &'static str {
        match self {
            Backdrop::Plain => "backdrop-plain",
            Backdrop::BlueFade => "backdrop-blue-fade",
            Backdrop::PurpleFade => "backdrop-purple-fade",
            Backdrop::Gray => "backdrop-gray",
            Backdrop::GrayFade => "backdrop-gray-fade",
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    BarChart,
    Calendar,
    Check,
    Clock,
    Cpu,
    Mail,
    MessageCircle,
    Phone,
    Shield,
    TrendingUp,
    Users,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub id: SectionId,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub backdrop: Backdrop,
    pub eyebrow: String,
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    pub body: SectionBody,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Cards { columns: u8, items: Vec<Card> },
    Checklist { items: Vec<String> },
    Audience { items: Vec<AudienceItem>, callout: String },
    Steps { items: Vec<Step> },
    Pricing(Plan),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub icon: Icon,
    #[serde(default)]
    pub title: Option<String>,
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AudienceItem {
    pub emoji: String,
    pub title: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub icon: Icon,
    pub title: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub badge: String,
    pub name: String,
    pub setup_price: String,
    pub setup_label: String,
    pub monthly_price: String,
    pub monthly_label: String,
    pub capacity: String,
    pub features: Vec<String>,
    pub terms: String,
    pub cta: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Demo {
    pub title: String,
    pub lead: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub assurances: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    pub demo_mailbox: String,
    pub demo_subject: String,
    pub email: String,
    pub phones: Vec<Phone>,
    pub whatsapp: WhatsApp,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Phone {
    pub display: String,
    pub dial: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct WhatsApp {
    pub label: String,
    pub number: String,
    pub message: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Footer {
    pub blurb: String,
    pub trust_title: String,
    pub trust: Vec<TrustItem>,
    pub contact_title: String,
    pub credit: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TrustItem {
    pub icon: Icon,
    pub text: String,
}

impl Content {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(crate::config::CONTENT_MANIFEST)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Every animated section must be described exactly once.
    pub fn validate(&self) -> Result<(), ContentError> {
        for id in SectionId::ALL {
            match self.sections.iter().filter(|section| section.id == id).count() {
                0 => return Err(ContentError::MissingSection(id)),
                1 => {}
                _ => return Err(ContentError::DuplicateSection(id)),
            }
        }
        Ok(())
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}
