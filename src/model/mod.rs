//! Data models for folio.
//!
//! - [`Portfolio`]: The whole content document
//! - [`Profile`], [`SkillSet`], [`EducationRecord`], [`ExperienceRecord`], [`Publication`]:
//!   the person-level sections
//! - [`Project`] and [`ProjectStatus`]: the project gallery
//! - [`ContactSubmission`]: one in-progress contact form entry

mod contact;
mod portfolio;
mod project;

pub use contact::{ContactSubmission, FormField};
pub use portfolio::{
    EducationRecord, ExperienceRecord, Portfolio, Profile, Publication, SkillCategory, SkillSet,
    SocialLinks,
};
pub use project::{Project, ProjectStatus};
