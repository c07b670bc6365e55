//! Profile content documents
//!
//! Each content domain has its own JSON file under the content root. These
//! types are read-only projections of those files; nothing here is written
//! back.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A social profile link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,

    /// Font Awesome brand class, e.g. `fa-github`
    pub icon: String,
}

/// The `intro.json` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroData {
    pub name: String,

    /// `[tag line, location]`; the tag line is a `•`-separated list
    #[serde(default)]
    pub details: Vec<String>,

    #[serde(default)]
    pub description: Vec<String>,

    #[serde(default)]
    pub socials: Vec<Social>,
}

impl IntroData {
    /// Separator used in the tag line
    pub const TAG_SEPARATOR: char = '•';

    /// Splits the tag line into tags. Whitespace around tags is kept as is.
    pub fn tags(&self) -> Vec<&str> {
        match self.details.first() {
            Some(line) => line.split(Self::TAG_SEPARATOR).collect(),
            None => Vec::new(),
        }
    }

    pub fn location(&self) -> &str {
        self.details.get(1).map(String::as_str).unwrap_or_default()
    }

    /// The lead paragraph; later paragraphs are not shown on the page
    pub fn lead(&self) -> &str {
        self.description.first().map(String::as_str).unwrap_or_default()
    }
}

/// A single role held at a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub title: String,
    pub company: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub description: Vec<String>,

    /// Free-form period label; takes precedence over the date pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

impl Position {
    /// Returns the displayed period: `period` when set, else `start - end`
    pub fn display_period(&self) -> String {
        match self.period.as_deref().filter(|p| !p.is_empty()) {
            Some(period) => period.to_string(),
            None => format!(
                "{} - {}",
                self.start_date.as_deref().unwrap_or_default(),
                self.end_date.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// An entry of `experience.json`
///
/// Entries either describe one position directly or group several
/// positions held at the same employer. The shape is decided once, when
/// the document is parsed: an entry with a non-null `positions` key is a
/// group, anything else is a single position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExperienceEntry {
    Group { positions: Vec<Position> },
    Single(Position),
}

impl<'de> Deserialize<'de> for ExperienceEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;

        match value.get("positions").filter(|p| !p.is_null()) {
            Some(positions) => Ok(ExperienceEntry::Group {
                positions: Vec::<Position>::deserialize(positions)
                    .map_err(|e| <D::Error as de::Error>::custom(format!("positions: {}", e)))?,
            }),
            None => Position::deserialize(value)
                .map(ExperienceEntry::Single)
                .map_err(de::Error::custom),
        }
    }
}

impl ExperienceEntry {
    pub fn positions(&self) -> &[Position] {
        match self {
            ExperienceEntry::Group { positions } => positions,
            ExperienceEntry::Single(position) => std::slice::from_ref(position),
        }
    }
}

/// An entry of `education.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub title: String,
    pub institution: String,

    #[serde(default)]
    pub start_date: String,

    #[serde(default)]
    pub end_date: String,

    #[serde(default)]
    pub description: Vec<String>,
}

impl EducationEntry {
    pub fn lead(&self) -> &str {
        self.description.first().map(String::as_str).unwrap_or_default()
    }
}

/// An entry of `interests.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestEntry {
    /// Usually an emoji
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Publication year, written either as a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

/// An entry of `publications.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationEntry {
    pub title: String,
    pub link: String,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub conference: String,

    pub year: Year,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// The `contact.json` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactData {
    pub description: String,
    pub email: String,
    pub location: String,
    pub availability: String,
}
