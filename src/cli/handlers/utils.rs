use crate::model::{ExperienceRecord, Project, ProjectStatus};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::storage::ContentStore;
use colored::Colorize;

/// Prints notifications: successes to stdout, errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => println!("{} {}", "✓".green(), notification.message),
            NotificationKind::Error => eprintln!("{} {}", "✗".red(), notification.message.red()),
        }
    }
}

pub fn format_status(status: &ProjectStatus) -> colored::ColoredString {
    match status {
        ProjectStatus::OpenSource => status.label().green(),
        ProjectStatus::Production => status.label().blue(),
        ProjectStatus::ClientProject => status.label().magenta(),
        ProjectStatus::Other(label) => label.as_str().dimmed(),
    }
}

pub fn print_heading(title: &str) {
    println!("\n{}", title.bold().underline());
}

pub fn print_hero(store: &ContentStore) {
    let profile = store.profile();
    println!("{}", profile.name.bold());
    if let Some(ref title) = profile.title {
        println!("{}", title.cyan());
    }
    if !profile.bio.is_empty() {
        println!("\n{}", profile.bio);
    }
    println!(
        "\n{} years experience  {} projects",
        profile.years_of_experience.bold(),
        store.projects().len().to_string().bold()
    );
}

pub fn print_about(store: &ContentStore) {
    print_heading("Skills");
    for category in &store.skills().technical {
        println!("  {}: {}", category.category.cyan(), category.items.join(", "));
    }
    if !store.skills().soft.is_empty() {
        println!("  {}: {}", "Soft skills".cyan(), store.skills().soft.join(", "));
    }

    print_heading("Education");
    for edu in store.education() {
        println!("  {} - {} ({})", edu.degree.bold(), edu.institution, edu.year);
        if !edu.description.is_empty() {
            println!("    {}", edu.description.dimmed());
        }
    }

    if !store.certifications().is_empty() {
        print_heading("Certifications");
        for cert in store.certifications() {
            println!("  • {}", cert);
        }
    }
}

pub fn print_experience_record(exp: &ExperienceRecord) {
    println!(
        "{} {} at {}",
        exp.id.cyan(),
        exp.position.bold(),
        exp.company
    );
    println!("  {}  {}", exp.duration.dimmed(), exp.location.dimmed());
    if !exp.description.is_empty() {
        println!("  {}", exp.description);
    }
    for achievement in &exp.achievements {
        println!("  ✓ {}", achievement);
    }
    if !exp.technologies.is_empty() {
        println!("  {}", exp.technologies.join(" · ").magenta());
    }
}

pub fn print_experience(store: &ContentStore) {
    print_heading("Experience");
    for exp in store.experience() {
        print_experience_record(exp);
        println!();
    }

    if !store.publications().is_empty() {
        print_heading("Publications");
        for publication in store.publications() {
            println!(
                "  {} - {} {}",
                publication.title.bold(),
                publication.journal,
                publication.year.dimmed()
            );
        }
    }
}

pub fn print_project(project: &Project) {
    println!(
        "{} {} [{}]",
        project.id.cyan(),
        project.title.bold(),
        format_status(&project.status)
    );
    if !project.description.is_empty() {
        println!("  {}", project.description);
    }
    for feature in &project.features {
        println!("  • {}", feature);
    }
    if !project.technologies.is_empty() {
        println!("  {}", project.technologies.join(" · ").magenta());
    }
    for (label, link) in project.links() {
        println!("  {}: {}", label, link.underline());
    }
}

pub fn print_projects(store: &ContentStore) {
    print_heading("Projects");
    for project in store.projects() {
        print_project(project);
        println!();
    }
}

pub fn print_contact(store: &ContentStore) {
    let profile = store.profile();
    print_heading("Contact");
    println!("  Email:    {}", profile.email.cyan());
    if !profile.location.is_empty() {
        println!("  Location: {}", profile.location);
    }
    for (platform, link) in store.social() {
        println!("  {:<9} {}", format!("{}:", platform), link.underline());
    }
}
