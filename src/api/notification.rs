//! Notification Endpoints

use serde::{Deserialize, Serialize};

use super::{get_json, post_json, Empty, Reply};
use crate::error::ApiError;
use crate::models::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NotificationSettings {
    pub notifications_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NotificationFeed {
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Serialize)]
struct NotificationIdArgs {
    notification_id: u32,
}

pub async fn get_notification_settings() -> Result<NotificationSettings, ApiError> {
    let reply: Reply<NotificationSettings> = get_json("/get_notification_settings").await?;
    Ok(reply.data)
}

pub async fn toggle_notifications() -> Result<NotificationSettings, ApiError> {
    let reply: Reply<NotificationSettings> = post_json::<(), _>("/toggle_notifications", None).await?;
    Ok(reply.data)
}

pub async fn get_notifications() -> Result<NotificationFeed, ApiError> {
    let reply: Reply<NotificationFeed> = get_json("/get_notifications").await?;
    Ok(reply.data)
}

pub async fn mark_notification_read(notification_id: u32) -> Result<Reply<Empty>, ApiError> {
    post_json("/mark_notification_read", Some(&NotificationIdArgs { notification_id })).await
}

pub async fn mark_all_notifications_read() -> Result<Reply<Empty>, ApiError> {
    post_json::<(), _>("/mark_all_notifications_read", None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode;

    #[test]
    fn test_feed_payload() {
        let reply: Reply<NotificationFeed> = decode(
            r#"{"success": true, "unread_count": 2, "notifications": [
                {"id": 1, "title": "New Task Assigned", "message": "m", "read": 0,
                 "created_at": "2024-05-01 10:00:00", "project_name": "Apollo", "task_title": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reply.data.unread_count, 2);
        assert_eq!(reply.data.notifications.len(), 1);
        assert_eq!(reply.data.notifications[0].project_name.as_deref(), Some("Apollo"));
    }

    #[test]
    fn test_settings_payload() {
        let reply: Reply<NotificationSettings> =
            decode(r#"{"success": true, "notifications_enabled": false}"#).unwrap();
        assert!(!reply.data.notifications_enabled);
    }
}
