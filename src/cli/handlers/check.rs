use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_check(ctx: &CommandContext) -> Result<()> {
    let store = ctx.load_store()?;

    println!(
        "{} {}",
        "Content OK".green(),
        ctx.content_path.display().to_string().dimmed()
    );
    println!("  Name:           {}", store.profile().name);
    println!("  Email:          {}", store.profile().email);
    println!("  Skill groups:   {}", store.skills().technical.len());
    println!("  Education:      {}", store.education().len());
    println!("  Certifications: {}", store.certifications().len());
    println!("  Experience:     {}", store.experience().len());
    println!("  Publications:   {}", store.publications().len());
    println!("  Projects:       {}", store.projects().len());
    println!("  Social links:   {}", store.social().len());
    Ok(())
}
