//! `notifications` subcommands.

use crate::cli::{GlobalArgs, NotificationCommand};
use crate::controller::{ListStatus, ReadStateController};
use crate::notify::{Notifier, TermNotifier};

use super::render;

pub async fn run(args: &GlobalArgs, command: NotificationCommand) -> bool {
    let Some(user_id) = super::current_user(args) else {
        TermNotifier.error("Not logged in. Run `learnloop session login <user-id>` first.");
        return false;
    };
    let client = super::api_client(args).notifications();
    let mut controller = ReadStateController::new(client, TermNotifier, user_id);

    match command {
        NotificationCommand::List { unread } => {
            if unread {
                controller.load_unread().await;
            } else {
                controller.load().await;
            }
            if controller.status() != ListStatus::Ready {
                return false;
            }
            if controller.items().is_empty() {
                println!("No notifications.");
                return true;
            }
            for notification in controller.items() {
                render::notification_row(notification);
            }
            if !unread {
                println!();
                println!("{} unread", controller.unread_count());
            }
            true
        }
        NotificationCommand::Read { id } => {
            controller.load().await;
            if controller.status() != ListStatus::Ready {
                return false;
            }
            if !controller.mark_read(&id).await {
                return false;
            }
            if let Some(notification) = controller.items().iter().find(|n| n.id == id) {
                render::notification_row(notification);
            }
            true
        }
        NotificationCommand::ReadAll => {
            controller.load().await;
            if controller.status() != ListStatus::Ready {
                return false;
            }
            if !controller.mark_all_read().await {
                return false;
            }
            for notification in controller.items() {
                render::notification_row(notification);
            }
            true
        }
        NotificationCommand::Remove { id } => {
            controller.load().await;
            if controller.status() != ListStatus::Ready {
                return false;
            }
            controller.remove(&id).await
        }
    }
}
