//! `plans` subcommands.

use colored::Colorize;

use crate::api::{PlanClient, ResourceClient};
use crate::cli::{GlobalArgs, PlanCommand};
use crate::confirm::Confirmation;
use crate::controller::{DeleteOutcome, DetailController, DetailStatus, ListController, ListStatus};
use crate::models::PlanDraft;
use crate::notify::{Notifier, TermNotifier};

use super::render;

pub async fn run(args: &GlobalArgs, command: PlanCommand) -> bool {
    let client = super::api_client(args).plans();
    let user = super::current_user(args);
    match command {
        PlanCommand::List { filter } => list(client, user, filter).await,
        PlanCommand::Show { id } => show(client, user, &id).await,
        PlanCommand::Create { file } => create(client, &file).await,
        PlanCommand::Edit { id, file } => edit(client, user, &id, &file).await,
        PlanCommand::Delete { id } => {
            delete(client, user, &id, super::confirmer(args).as_ref()).await
        }
        PlanCommand::Schema => super::print_schema::<PlanDraft>(),
    }
}

async fn list(client: PlanClient, user: Option<String>, filter: Option<String>) -> bool {
    let mut controller = ListController::new(client, TermNotifier, user).with_filter(filter);
    controller.load_all().await;
    if controller.status() != ListStatus::Ready {
        return false;
    }
    if controller.items().is_empty() {
        println!("No learning plans yet.");
        return true;
    }
    for plan in controller.items() {
        render::plan_row(plan, controller.can_mutate(plan));
    }
    true
}

async fn show(client: PlanClient, user: Option<String>, id: &str) -> bool {
    let mut controller = DetailController::new(client, TermNotifier, user);
    controller.load(id).await;
    match controller.status() {
        DetailStatus::Ready => {
            if let Some(plan) = controller.resource() {
                render::plan_detail(plan, controller.can_mutate());
            }
            true
        }
        DetailStatus::NotFound(message) => {
            println!("{}", message.yellow());
            false
        }
        DetailStatus::Error(message) => {
            println!("{}", message.red());
            false
        }
        DetailStatus::Loading | DetailStatus::Gone => false,
    }
}

async fn create(client: PlanClient, file: &str) -> bool {
    let draft: PlanDraft = match super::read_draft(file) {
        Ok(draft) => draft,
        Err(err) => {
            TermNotifier.error(&format!("Could not read plan draft: {err}"));
            return false;
        }
    };
    match client.create(&draft).await {
        Ok(plan) => {
            TermNotifier.success(&format!("Created learning plan {}", plan.id));
            true
        }
        Err(err) => {
            TermNotifier.error(&format!("Failed to create learning plan: {err}"));
            false
        }
    }
}

async fn edit(client: PlanClient, user: Option<String>, id: &str, file: &str) -> bool {
    let draft: PlanDraft = match super::read_draft(file) {
        Ok(draft) => draft,
        Err(err) => {
            TermNotifier.error(&format!("Could not read plan draft: {err}"));
            return false;
        }
    };
    match client.update(id, &draft).await {
        Ok(_) => {
            TermNotifier.success(&format!("Updated learning plan {id}"));
            // Edit hands control back to the detail view, which re-syncs
            // from the server instead of trusting the local draft.
            let mut controller = DetailController::new(client, TermNotifier, user);
            controller.reload_after_edit(id).await;
            if let Some(plan) = controller.resource() {
                render::plan_detail(plan, controller.can_mutate());
            }
            true
        }
        Err(err) => {
            TermNotifier.error(&format!("Failed to update learning plan: {err}"));
            false
        }
    }
}

async fn delete(
    client: PlanClient,
    user: Option<String>,
    id: &str,
    confirm: &dyn Confirmation,
) -> bool {
    let mut controller = DetailController::new(client, TermNotifier, user);
    controller.load(id).await;
    match controller.status() {
        DetailStatus::Ready => {}
        DetailStatus::NotFound(message) => {
            println!("{}", message.yellow());
            return false;
        }
        DetailStatus::Error(message) => {
            println!("{}", message.red());
            return false;
        }
        DetailStatus::Loading | DetailStatus::Gone => return false,
    }
    matches!(
        controller.delete(confirm).await,
        DeleteOutcome::Deleted | DeleteOutcome::Declined
    )
}
