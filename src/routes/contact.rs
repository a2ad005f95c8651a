use actix_web::{HttpResponse, web};
use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    domain::NewContactRequest,
    notification::{ContactInquiry, NotificationPayload},
    telegram_client::TelegramClient,
};

use super::{errors::FormError, helpers::accepted};

#[derive(serde::Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<ContactFormData> for NewContactRequest {
    type Error = String;

    fn try_from(value: ContactFormData) -> Result<Self, Self::Error> {
        NewContactRequest::parse(value.name, value.phone, value.email, value.message)
    }
}

#[tracing::instrument(
    name = "Receiving a contact request",
    skip(form, db_pool, telegram_client),
    fields(
        contact_email = %form.email,
        contact_name = %form.name
    )
)]
pub async fn contact(
    form: web::Form<ContactFormData>,
    db_pool: web::Data<PgPool>,
    telegram_client: web::Data<TelegramClient>,
) -> Result<HttpResponse, FormError> {
    let new_request: NewContactRequest =
        form.0.try_into().map_err(FormError::ValidationError)?;

    let inquiry = insert_contact_request(&db_pool, new_request)
        .await
        .context("Failed to insert a new contact request in the database.")?;

    // The request is stored at this point, delivery must not change the response.
    telegram_client
        .notify(&NotificationPayload::Contact(inquiry))
        .await;

    Ok(accepted(
        "Thank you for your message! We will contact you soon.",
    ))
}

#[tracing::instrument(
    name = "Saving new contact request in the database",
    skip(new_request, pool)
)]
async fn insert_contact_request(
    pool: &PgPool,
    new_request: NewContactRequest,
) -> Result<ContactInquiry, sqlx::Error> {
    let created_at = Utc::now();
    sqlx::query(
        r#"
        INSERT INTO contact_requests (id, name, phone, email, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_request.name.as_ref())
    .bind(new_request.phone.as_ref())
    .bind(new_request.email.as_ref())
    .bind(&new_request.message)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(ContactInquiry {
        name: new_request.name.as_ref().to_string(),
        phone: new_request.phone.as_ref().to_string(),
        email: new_request.email.as_ref().to_string(),
        message: new_request.message,
        created_at,
    })
}
