use crate::sections::Section;
use anyhow::Result;

use super::CommandContext;
use super::utils::{
    print_about, print_contact, print_experience, print_hero, print_project, print_projects,
};

pub fn handle_show(ctx: &CommandContext, section: Option<Section>, json: bool) -> Result<()> {
    let store = ctx.load_store()?;

    if json {
        let value = match section {
            None => serde_json::to_value(store.portfolio())?,
            Some(Section::Hero) => serde_json::to_value(store.profile())?,
            Some(Section::About) => serde_json::json!({
                "skills": store.skills(),
                "education": store.education(),
                "certifications": store.certifications(),
            }),
            Some(Section::Experience) => serde_json::json!({
                "experience": store.experience(),
                "publications": store.publications(),
            }),
            Some(Section::Projects) => serde_json::to_value(store.projects())?,
            Some(Section::Contact) => serde_json::json!({
                "email": store.profile().email,
                "location": store.profile().location,
                "social": store.social(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let sections = match section {
        Some(s) => vec![s],
        None => Section::ALL.to_vec(),
    };
    for section in sections {
        match section {
            Section::Hero => print_hero(&store),
            Section::About => print_about(&store),
            Section::Experience => print_experience(&store),
            Section::Projects => print_projects(&store),
            Section::Contact => print_contact(&store),
        }
    }
    Ok(())
}

pub fn handle_project(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let store = ctx.load_store()?;
    let project = store
        .project(&id)
        .ok_or_else(|| anyhow::anyhow!("Project not found: {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(project)?);
    } else {
        print_project(project);
    }
    Ok(())
}
