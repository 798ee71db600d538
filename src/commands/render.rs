//! Terminal rendering for resources.

use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use colored::Colorize;

use crate::models::{LearningPlan, Notification, ProgressUpdate};

pub(crate) fn relative(timestamp: DateTime<Utc>) -> String {
    HumanTime::from(timestamp).to_string()
}

fn yours(mutable: bool) -> &'static str {
    if mutable { "  (yours)" } else { "" }
}

pub(crate) fn plan_row(plan: &LearningPlan, mutable: bool) {
    println!(
        "{}  {}  {} · {}  {:.0}%{}",
        plan.id.bold(),
        plan.title,
        plan.category.dimmed(),
        plan.skill_level.to_lowercase().dimmed(),
        plan.completion_percentage,
        yours(mutable).cyan()
    );
}

pub(crate) fn plan_detail(plan: &LearningPlan, mutable: bool) {
    println!("{}{}", plan.title.bold(), yours(mutable).cyan());
    println!(
        "{} · {} · {:.0}h estimated · {:.0}% complete",
        plan.category,
        plan.skill_level.to_lowercase(),
        plan.estimated_hours,
        plan.completion_percentage
    );
    println!(
        "by {} (@{}) · created {}",
        plan.owner.display_name(),
        plan.owner.username,
        relative(plan.created_at)
    );
    if !plan.public {
        println!("{}", "private".yellow());
    }
    println!();
    println!("{}", plan.description);

    if !plan.learning_units.is_empty() {
        println!();
        println!("{}", "Units".bold());
        for unit in &plan.learning_units {
            let marker = if unit.completed { "[x]" } else { "[ ]" };
            println!("  {marker} {}  {:.0}h", unit.title, unit.estimated_hours);
            for objective in &unit.objectives {
                println!("        - {objective}");
            }
        }
    }

    if !plan.tags.is_empty() {
        println!();
        println!("tags: {}", plan.tags.join(", ").dimmed());
    }
    if !plan.resources.is_empty() {
        println!();
        println!("{}", "Resources".bold());
        for resource in &plan.resources {
            println!("  {resource}");
        }
    }
    println!();
    println!(
        "{} views · {} forks",
        plan.view_count, plan.fork_count
    );
}

pub(crate) fn progress_row(update: &ProgressUpdate, mutable: bool) {
    println!(
        "{}  {}  [{}] by @{} {}{}",
        update.id.bold(),
        update.title,
        update.update_type.as_str().dimmed(),
        update.user.username,
        relative(update.created_at).dimmed(),
        yours(mutable).cyan()
    );
}

pub(crate) fn progress_detail(update: &ProgressUpdate, mutable: bool) {
    println!("{}{}", update.title.bold(), yours(mutable).cyan());
    println!(
        "[{}] by {} (@{}) · {}",
        update.update_type,
        update.user.display_name(),
        update.user.username,
        relative(update.created_at)
    );
    println!(
        "{:.1}h spent · feeling {}",
        update.hours_spent, update.sentiment
    );
    if let Some(rating) = update.rating {
        println!("rated {rating}/5");
    }
    println!();
    println!("{}", update.content);

    if !update.challenges.is_empty() {
        println!();
        println!("{}", "Challenges".bold());
        for challenge in &update.challenges {
            println!("  - {challenge}");
        }
    }
    if !update.achievements.is_empty() {
        println!();
        println!("{}", "Achievements".bold());
        for achievement in &update.achievements {
            println!("  - {achievement}");
        }
    }
}

pub(crate) fn notification_row(notification: &Notification) {
    let bullet = if notification.read {
        "·".dimmed()
    } else {
        "●".blue().bold()
    };
    let message = if notification.read {
        notification.message.dimmed()
    } else {
        notification.message.normal()
    };
    println!(
        "{bullet} {}  {message}  {}",
        notification.id.bold(),
        relative(notification.created_at).dimmed()
    );
}
