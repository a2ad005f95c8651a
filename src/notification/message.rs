use chrono::{DateTime, Utc};

use crate::domain::CourseLevel;
use crate::video::is_present;

use super::payload::{ContactInquiry, CourseApplication};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Escapes text for Telegram's HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn format_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%d.%m.%Y в %H:%M").to_string()
}

fn header(icon: &str, title: &str) -> String {
    format!("{RULE}\n{icon} <b>{title}</b>\n{RULE}\n")
}

fn contact_block(name: &str, phone: &str, email: &str) -> String {
    format!(
        "
👤 <b>Имя:</b>
   {}

📞 <b>Телефон:</b>
   <code>{}</code>

📧 <b>Email:</b>
   <code>{}</code>
",
        escape_html(name),
        escape_html(phone),
        escape_html(email),
    )
}

fn message_block(label: &str, message: Option<&str>) -> Option<String> {
    message
        .filter(|m| is_present(*m))
        .map(|m| format!("\n💬 <b>{label}:</b>\n   {}\n", escape_html(m.trim())))
}

fn footer(created_at: &DateTime<Utc>) -> String {
    format!("⏰ <i>{}</i>\n{RULE}", format_timestamp(created_at))
}

pub(super) fn render_contact(inquiry: &ContactInquiry) -> String {
    let mut message = header("🔔", "НОВАЯ ЗАЯВКА С КОНТАКТНОЙ ФОРМЫ");
    message.push_str(&contact_block(
        &inquiry.name,
        &inquiry.phone,
        &inquiry.email,
    ));
    if let Some(block) = message_block("Сообщение", Some(inquiry.message.as_str())) {
        message.push_str(&block);
    }
    message.push('\n');
    message.push_str(RULE);
    message.push('\n');
    message.push_str(&footer(&inquiry.created_at));

    message.trim().to_string()
}

pub(super) fn render_application(application: &CourseApplication) -> String {
    let course = &application.course;

    let mut message = header("🎓", "НОВАЯ ЗАЯВКА НА КУРС");
    message.push_str(&contact_block(
        &application.name,
        &application.phone,
        &application.email,
    ));
    message.push_str(&format!(
        "
{RULE}
{} <b>Курс:</b>
   {}

💰 <b>Стоимость:</b> {}
⏱ <b>Длительность:</b> {}
{RULE}
",
        CourseLevel::marker_for(&course.level),
        escape_html(&course.title),
        format_price(course.price_cents),
        escape_html(&course.duration),
    ));
    if let Some(block) = message_block("Дополнительное сообщение", application.message.as_deref()) {
        message.push_str(&block);
        message.push('\n');
        message.push_str(RULE);
        message.push('\n');
    }
    message.push_str(&footer(&application.created_at));

    message.trim().to_string()
}
