use crate::client::PmtClient;
use crate::error::ClientResult;
use pmt_domain::notification::{Notification, NotificationCreate};
use reqwest::Method;

impl PmtClient {
    // ── Notifications ─────────────────────────────────────────────────

    /// `GET /notifications`
    pub async fn notifications(&self) -> ClientResult<Vec<Notification>> {
        self.get_json("/notifications").await
    }

    /// `GET /notifications/user/{userId}`
    pub async fn notifications_by_user(&self, user_id: i64) -> ClientResult<Vec<Notification>> {
        self.get_json(&format!("/notifications/user/{user_id}")).await
    }

    /// `GET /notifications/user/{userId}/unread`
    pub async fn unread_notifications(&self, user_id: i64) -> ClientResult<Vec<Notification>> {
        self.get_json(&format!("/notifications/user/{user_id}/unread")).await
    }

    /// `GET /notifications/{id}`
    pub async fn notification(&self, id: i64) -> ClientResult<Notification> {
        self.get_json(&format!("/notifications/{id}")).await
    }

    /// `POST /notifications`
    pub async fn create_notification(
        &self,
        notification: &NotificationCreate,
    ) -> ClientResult<Notification> {
        self.send_json(Method::POST, "/notifications", Some(notification)).await
    }

    /// `PUT /notifications/{id}`
    pub async fn update_notification(
        &self,
        id: i64,
        notification: &Notification,
    ) -> ClientResult<Notification> {
        self.send_json(Method::PUT, &format!("/notifications/{id}"), Some(notification)).await
    }

    /// `DELETE /notifications/{id}`
    pub async fn delete_notification(&self, id: i64) -> ClientResult<()> {
        self.send_no_content::<()>(Method::DELETE, &format!("/notifications/{id}"), None).await
    }

    /// `PUT /notifications/{id}/read`
    pub async fn mark_notification_read(&self, id: i64) -> ClientResult<Notification> {
        self.send_json::<Notification, ()>(Method::PUT, &format!("/notifications/{id}/read"), None)
            .await
    }

    /// `PUT /notifications/user/{userId}/read-all`
    pub async fn mark_all_notifications_read(&self, user_id: i64) -> ClientResult<()> {
        self.send_no_content::<()>(
            Method::PUT,
            &format!("/notifications/user/{user_id}/read-all"),
            None,
        )
        .await
    }
}
