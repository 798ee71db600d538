//! `progress` subcommands.

use colored::Colorize;

use crate::api::{ProgressClient, ResourceClient};
use crate::cli::{GlobalArgs, ProgressCommand};
use crate::confirm::Confirmation;
use crate::controller::{DeleteOutcome, DetailController, DetailStatus, ListController, ListStatus};
use crate::models::ProgressDraft;
use crate::notify::{Notifier, TermNotifier};

use super::render;

pub async fn run(args: &GlobalArgs, command: ProgressCommand) -> bool {
    let client = super::api_client(args).progress();
    let user = super::current_user(args);
    match command {
        ProgressCommand::List { filter } => list(client, user, filter).await,
        ProgressCommand::Show { id } => show(client, user, &id).await,
        ProgressCommand::Create { file } => create(client, &file).await,
        ProgressCommand::Edit { id, file } => edit(client, user, &id, &file).await,
        ProgressCommand::Delete { id } => {
            delete(client, user, &id, super::confirmer(args).as_ref()).await
        }
        ProgressCommand::Schema => super::print_schema::<ProgressDraft>(),
    }
}

async fn list(client: ProgressClient, user: Option<String>, filter: Option<String>) -> bool {
    let mut controller = ListController::new(client, TermNotifier, user).with_filter(filter);
    controller.load_all().await;
    if controller.status() != ListStatus::Ready {
        return false;
    }
    if controller.items().is_empty() {
        println!("No progress updates yet.");
        return true;
    }
    for update in controller.items() {
        render::progress_row(update, controller.can_mutate(update));
    }
    true
}

async fn show(client: ProgressClient, user: Option<String>, id: &str) -> bool {
    let mut controller = DetailController::new(client, TermNotifier, user);
    controller.load(id).await;
    match controller.status() {
        DetailStatus::Ready => {
            if let Some(update) = controller.resource() {
                render::progress_detail(update, controller.can_mutate());
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

async fn create(client: ProgressClient, file: &str) -> bool {
    let draft: ProgressDraft = match super::read_draft(file) {
        Ok(draft) => draft,
        Err(err) => {
            TermNotifier.error(&format!("Could not read progress draft: {err}"));
            return false;
        }
    };
    match client.create(&draft).await {
        Ok(update) => {
            TermNotifier.success(&format!("Shared progress update {}", update.id));
            true
        }
        Err(err) => {
            TermNotifier.error(&format!("Failed to share progress update: {err}"));
            false
        }
    }
}

async fn edit(client: ProgressClient, user: Option<String>, id: &str, file: &str) -> bool {
    let draft: ProgressDraft = match super::read_draft(file) {
        Ok(draft) => draft,
        Err(err) => {
            TermNotifier.error(&format!("Could not read progress draft: {err}"));
            return false;
        }
    };
    match client.update(id, &draft).await {
        Ok(_) => {
            TermNotifier.success(&format!("Updated progress update {id}"));
            let mut controller = DetailController::new(client, TermNotifier, user);
            controller.reload_after_edit(id).await;
            if let Some(update) = controller.resource() {
                render::progress_detail(update, controller.can_mutate());
            }
            true
        }
        Err(err) => {
            TermNotifier.error(&format!("Failed to update progress update: {err}"));
            false
        }
    }
}

/// Deletes from the feed context: the list is loaded, the row is patched
/// out on success, and what remains is re-rendered.
async fn delete(
    client: ProgressClient,
    user: Option<String>,
    id: &str,
    confirm: &dyn Confirmation,
) -> bool {
    let mut controller = ListController::new(client, TermNotifier, user);
    controller.load_all().await;
    if controller.status() != ListStatus::Ready {
        return false;
    }
    if !controller.items().iter().any(|update| update.id == id) {
        TermNotifier.error(&format!("No progress update {id} in the feed"));
        return false;
    }
    match controller.request_delete(id, confirm).await {
        DeleteOutcome::Deleted => {
            for update in controller.items() {
                render::progress_row(update, controller.can_mutate(update));
            }
            true
        }
        DeleteOutcome::Declined => true,
        DeleteOutcome::NotPermitted | DeleteOutcome::Failed => false,
    }
}
