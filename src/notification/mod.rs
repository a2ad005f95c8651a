mod message;
mod payload;

pub use message::{escape_html, format_price, format_timestamp};
pub use payload::{ContactInquiry, CourseApplication, CourseSnapshot, NotificationPayload};
