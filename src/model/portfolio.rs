use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::project::Project;

/// Platform name (e.g. `github`) to profile URL.
pub type SocialLinks = BTreeMap<String, String>;

/// The whole content document backing every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: Profile,
    pub skills: SkillSet,
    pub education: Vec<EducationRecord>,
    pub certifications: Vec<String>,
    pub experience: Vec<ExperienceRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: String,
    /// Kept as text so documents can say "5+" as well as 5.
    #[serde(default, deserialize_with = "string_or_number")]
    pub years_of_experience: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub technical: Vec<SkillCategory>,
    #[serde(default)]
    pub soft: Vec<String>,
}

impl SkillSet {
    pub fn category(&self, name: &str) -> Option<&SkillCategory> {
        self.technical.iter().find(|c| c.category == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    #[serde(rename = "school")]
    pub institution: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
}

/// Accepts `"2021"` and `2021` alike.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_numeric_years() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","yearsOfExperience":7}"#,
        )
        .unwrap();
        assert_eq!(profile.years_of_experience, "7");
        assert!(profile.title.is_none());
        assert_eq!(profile.location, "");
    }

    #[test]
    fn test_profile_accepts_text_years() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","yearsOfExperience":"5+"}"#,
        )
        .unwrap();
        assert_eq!(profile.years_of_experience, "5+");
    }

    #[test]
    fn test_education_reads_school_as_institution() {
        let edu: EducationRecord = serde_json::from_str(
            r#"{"degree":"BSc","school":"State University","year":2015}"#,
        )
        .unwrap();
        assert_eq!(edu.institution, "State University");
        assert_eq!(edu.year, "2015");
    }

    #[test]
    fn test_skill_category_lookup() {
        let skills = SkillSet {
            technical: vec![SkillCategory {
                category: "Languages".to_string(),
                items: vec!["Rust".to_string()],
            }],
            soft: vec![],
        };
        assert!(skills.category("Languages").is_some());
        assert!(skills.category("Cooking").is_none());
    }
}
