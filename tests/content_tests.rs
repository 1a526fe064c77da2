use folio::error::FolioError;
use folio::model::ProjectStatus;
use folio::storage::{ContentStore, REQUIRED_KEYS, SAMPLE_CONTENT};
use std::fs;
use tempfile::TempDir;

fn write_content(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("content.json");
    fs::write(&path, content).unwrap();
    path
}

fn sample_value() -> serde_json::Value {
    serde_json::from_str(SAMPLE_CONTENT).unwrap()
}

#[test]
fn test_load_sample_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_content(&dir, SAMPLE_CONTENT);

    let store = ContentStore::load(&path).unwrap();
    assert_eq!(store.profile().email, "alex@example.com");
    assert_eq!(store.project_ids(), vec!["proj-1", "proj-2", "proj-3"]);
    assert_eq!(store.experience_ids(), vec!["exp-1", "exp-2"]);
    assert!(!store.skills().technical.is_empty());
    assert!(!store.social().is_empty());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ContentStore::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, FolioError::ContentNotFound(_)));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write_content(&dir, "{ not json");
    let err = ContentStore::load(&path).unwrap_err();
    assert!(matches!(err, FolioError::Json(_)));
}

#[test]
fn test_every_required_key_is_enforced() {
    for key in REQUIRED_KEYS {
        let mut value = sample_value();
        value.as_object_mut().unwrap().remove(key);
        let err = ContentStore::from_json(&value.to_string()).unwrap_err();
        match err {
            FolioError::MissingField(field) => assert_eq!(field, key),
            other => panic!("expected missing {} but got {:?}", key, other),
        }
    }
}

#[test]
fn test_null_section_is_missing() {
    let mut value = sample_value();
    value["experience"] = serde_json::Value::Null;
    let err = ContentStore::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, FolioError::MissingField(ref f) if f == "experience"));
}

#[test]
fn test_missing_owner_email() {
    let mut value = sample_value();
    value["personal"].as_object_mut().unwrap().remove("email");
    let err = ContentStore::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, FolioError::MissingField(ref f) if f == "personal.email"));

    value["personal"]["email"] = serde_json::json!("  ");
    let err = ContentStore::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, FolioError::MissingField(ref f) if f == "personal.email"));
}

#[test]
fn test_duplicate_project_ids_rejected() {
    let mut value = sample_value();
    value["projects"][1]["id"] = serde_json::json!("proj-1");
    let err = ContentStore::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, FolioError::DuplicateId { kind: "project", .. }));
}

#[test]
fn test_ids_kept_as_written() {
    let mut value = sample_value();
    value["projects"][0]["id"] = serde_json::json!("Zeta");
    value["projects"][1]["id"] = serde_json::json!("alpha");
    let store = ContentStore::from_json(&value.to_string()).unwrap();
    assert_eq!(store.project_ids(), vec!["Zeta", "alpha", "proj-3"]);
    assert!(store.project("alpha").is_some());
    assert!(store.project("ALPHA").is_none());
}

#[test]
fn test_unknown_status_and_missing_links() {
    let mut value = sample_value();
    value["projects"][2]["status"] = serde_json::json!("Archived");
    let store = ContentStore::from_json(&value.to_string()).unwrap();

    let project = store.project("proj-3").unwrap();
    assert_eq!(project.status, ProjectStatus::Other("Archived".to_string()));
    assert_eq!(project.status.to_string(), "Archived");
    assert!(project.github.is_none());
    assert!(project.demo.is_none());
    assert!(project.links().is_empty());
}

#[test]
fn test_publications_optional() {
    let mut value = sample_value();
    value.as_object_mut().unwrap().remove("publications");
    let store = ContentStore::from_json(&value.to_string()).unwrap();
    assert!(store.publications().is_empty());
}
