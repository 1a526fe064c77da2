use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

use super::portfolio::string_or_number;

/// Lifecycle tag shown on a project card.
///
/// Labels outside the known set are kept verbatim in [`ProjectStatus::Other`]
/// and rendered with the default treatment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    OpenSource,
    Production,
    ClientProject,
    Other(String),
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::OpenSource => "Open Source",
            ProjectStatus::Production => "Production",
            ProjectStatus::ClientProject => "Client Project",
            ProjectStatus::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProjectStatus::Other(_))
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "open source" => ProjectStatus::OpenSource,
            "production" => ProjectStatus::Production,
            "client project" => ProjectStatus::ClientProject,
            _ => ProjectStatus::Other(s.to_string()),
        })
    }
}

impl From<String> for ProjectStatus {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Source repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Live demo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

impl Project {
    /// Outbound links in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(ref github) = self.github {
            links.push(("Code", github.as_str()));
        }
        if let Some(ref demo) = self.demo {
            links.push(("Demo", demo.as_str()));
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            "open source".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::OpenSource
        );
        assert_eq!(
            "PRODUCTION".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Production
        );
        assert_eq!(
            "Client Project".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::ClientProject
        );
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let status: ProjectStatus = "Research Prototype".parse().unwrap();
        assert_eq!(status, ProjectStatus::Other("Research Prototype".to_string()));
        assert!(!status.is_known());
        assert_eq!(status.to_string(), "Research Prototype");
    }

    #[test]
    fn test_project_links_order() {
        let project: Project = serde_json::from_str(
            r#"{"id":1,"title":"T","status":"Production","github":"https://g","demo":"https://d"}"#,
        )
        .unwrap();
        assert_eq!(project.id, "1");
        assert_eq!(project.links(), vec![("Code", "https://g"), ("Demo", "https://d")]);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&ProjectStatus::ClientProject).unwrap();
        assert_eq!(json, "\"Client Project\"");
    }
}
