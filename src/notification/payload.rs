use chrono::{DateTime, Utc};

use super::message::{render_application, render_contact};

/// Read-only view of a stored contact request.
#[derive(Debug, Clone)]
pub struct ContactInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CourseSnapshot {
    pub title: String,
    pub price_cents: i64,
    pub duration: String,
    pub level: String,
}

/// Read-only view of a stored course application and the course it targets.
#[derive(Debug, Clone)]
pub struct CourseApplication {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub course: CourseSnapshot,
}

/// Built once from a persisted record and rendered once for delivery.
#[derive(Debug, Clone)]
pub enum NotificationPayload {
    Contact(ContactInquiry),
    Application(CourseApplication),
}

impl NotificationPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            NotificationPayload::Contact(_) => "contact_request",
            NotificationPayload::Application(_) => "course_application",
        }
    }

    pub fn render(&self) -> String {
        match self {
            NotificationPayload::Contact(inquiry) => render_contact(inquiry),
            NotificationPayload::Application(application) => render_application(application),
        }
    }
}

impl From<ContactInquiry> for NotificationPayload {
    fn from(value: ContactInquiry) -> Self {
        NotificationPayload::Contact(value)
    }
}

impl From<CourseApplication> for NotificationPayload {
    fn from(value: CourseApplication) -> Self {
        NotificationPayload::Application(value)
    }
}
