//! Domain models for folio
//!
//! Plain data parsed from the content root, without any I/O concerns.

mod config;
mod profile;

pub use config::{SectionConfig, SiteConfig};
pub use profile::{
    ContactData, EducationEntry, ExperienceEntry, InterestEntry, IntroData, Position,
    PublicationEntry, Social, Year,
};
