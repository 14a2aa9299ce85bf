use anyhow::{Result, ensure};
use pmt::prelude::*;

pub async fn list(client: &PmtClient, user: i64, unread: bool) -> Result<()> {
    ensure!(is_valid_id(user as f64), "'{user}' is not a valid user id");

    let notifications = if unread {
        client.unread_notifications(user).await?
    } else {
        client.notifications_by_user(user).await?
    };

    if notifications.is_empty() {
        println!("Inbox empty.");
        return Ok(());
    }

    for notification in notifications {
        let marker = if notification.is_read { ' ' } else { '*' };
        let when =
            notification.created_at.as_deref().map(format_date_time).unwrap_or_default();
        println!(
            "{marker} #{:<5} [{}] {}: {} {when}",
            notification.id.unwrap_or_default(),
            format_notification_type(&notification.kind),
            notification.title,
            format_description(&notification.message, 60),
        );
    }
    Ok(())
}

pub async fn read(client: &PmtClient, id: i64) -> Result<()> {
    client.mark_notification_read(id).await?;
    println!("Notification #{id} marked as read");
    Ok(())
}

pub async fn read_all(client: &PmtClient, user: i64) -> Result<()> {
    ensure!(is_valid_id(user as f64), "'{user}' is not a valid user id");

    client.mark_all_notifications_read(user).await?;
    println!("All notifications for user {user} marked as read");
    Ok(())
}
