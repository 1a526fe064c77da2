use crate::{
    error::{FolioError, Result},
    model::{
        EducationRecord, ExperienceRecord, Portfolio, Profile, Project, Publication, SkillSet,
        SocialLinks,
    },
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Top-level keys every content document must carry.
pub const REQUIRED_KEYS: [&str; 7] = [
    "personal",
    "skills",
    "education",
    "certifications",
    "experience",
    "projects",
    "social",
];

/// Read-only view over a validated portfolio document.
#[derive(Debug, Clone)]
pub struct ContentStore {
    portfolio: Portfolio,
    project_index: HashMap<String, usize>,
    experience_index: HashMap<String, usize>,
}

impl ContentStore {
    /// Load and validate the document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::ContentNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            projects = store.portfolio.projects.len(),
            experience = store.portfolio.experience.len(),
            "loaded content"
        );
        Ok(store)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(content)?;
        check_required(&raw)?;
        let portfolio: Portfolio = serde_json::from_value(raw)?;
        Self::from_portfolio(portfolio)
    }

    pub fn from_portfolio(portfolio: Portfolio) -> Result<Self> {
        if portfolio.personal.email.trim().is_empty() {
            return Err(FolioError::MissingField("personal.email".to_string()));
        }

        let project_index = index_unique(
            "project",
            portfolio.projects.iter().map(|p| p.id.as_str()),
        )?;
        let experience_index = index_unique(
            "experience",
            portfolio.experience.iter().map(|e| e.id.as_str()),
        )?;
        index_unique(
            "skill category",
            portfolio.skills.technical.iter().map(|c| c.category.as_str()),
        )?;

        for (platform, link) in &portfolio.social {
            if url::Url::parse(link).is_err() {
                tracing::warn!(platform = %platform, link = %link, "social link is not a valid URL");
            }
        }

        Ok(Self {
            portfolio,
            project_index,
            experience_index,
        })
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn profile(&self) -> &Profile {
        &self.portfolio.personal
    }

    pub fn skills(&self) -> &SkillSet {
        &self.portfolio.skills
    }

    pub fn education(&self) -> &[EducationRecord] {
        &self.portfolio.education
    }

    pub fn certifications(&self) -> &[String] {
        &self.portfolio.certifications
    }

    pub fn experience(&self) -> &[ExperienceRecord] {
        &self.portfolio.experience
    }

    pub fn publications(&self) -> &[Publication] {
        &self.portfolio.publications
    }

    pub fn projects(&self) -> &[Project] {
        &self.portfolio.projects
    }

    pub fn social(&self) -> &SocialLinks {
        &self.portfolio.social
    }

    /// Project ids in document order.
    pub fn project_ids(&self) -> Vec<&str> {
        self.portfolio.projects.iter().map(|p| p.id.as_str()).collect()
    }

    /// Experience ids in document order.
    pub fn experience_ids(&self) -> Vec<&str> {
        self.portfolio
            .experience
            .iter()
            .map(|e| e.id.as_str())
            .collect()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.project_index
            .get(id)
            .map(|&i| &self.portfolio.projects[i])
    }

    pub fn experience_record(&self, id: &str) -> Option<&ExperienceRecord> {
        self.experience_index
            .get(id)
            .map(|&i| &self.portfolio.experience[i])
    }
}

fn check_required(raw: &Value) -> Result<()> {
    let object = raw
        .as_object()
        .ok_or_else(|| FolioError::InvalidContent("document root must be an object".to_string()))?;

    for key in REQUIRED_KEYS {
        match object.get(key) {
            None | Some(Value::Null) => return Err(FolioError::MissingField(key.to_string())),
            Some(_) => {}
        }
    }

    let has_email = object
        .get("personal")
        .and_then(|p| p.get("email"))
        .and_then(Value::as_str)
        .is_some_and(|email| !email.trim().is_empty());
    if !has_email {
        return Err(FolioError::MissingField("personal.email".to_string()));
    }

    Ok(())
}

fn index_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>> {
    let mut seen = HashSet::new();
    let mut index = HashMap::new();
    for (i, id) in ids.enumerate() {
        if !seen.insert(id) {
            return Err(FolioError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
        index.insert(id.to_string(), i);
    }
    Ok(index)
}
