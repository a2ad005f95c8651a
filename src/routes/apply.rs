use actix_web::{HttpResponse, web};
use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    domain::NewCourseApplication,
    notification::{CourseApplication, CourseSnapshot, NotificationPayload},
    telegram_client::TelegramClient,
};

use super::{errors::FormError, helpers::accepted};

#[derive(serde::Deserialize)]
pub struct ApplicationFormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub course: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl TryFrom<ApplicationFormData> for NewCourseApplication {
    type Error = String;

    fn try_from(value: ApplicationFormData) -> Result<Self, Self::Error> {
        NewCourseApplication::parse(
            value.name,
            value.phone,
            value.email,
            value.course,
            value.message,
        )
    }
}

#[derive(sqlx::FromRow)]
struct CourseRow {
    title: String,
    price_cents: i64,
    duration: String,
    level: String,
}

impl From<CourseRow> for CourseSnapshot {
    fn from(row: CourseRow) -> Self {
        Self {
            title: row.title,
            price_cents: row.price_cents,
            duration: row.duration,
            level: row.level,
        }
    }
}

#[tracing::instrument(
    name = "Receiving a course application",
    skip(form, db_pool, telegram_client),
    fields(
        applicant_email = %form.email,
        applicant_name = %form.name,
        course = %form.course
    )
)]
pub async fn apply_course(
    form: web::Form<ApplicationFormData>,
    db_pool: web::Data<PgPool>,
    telegram_client: web::Data<TelegramClient>,
) -> Result<HttpResponse, FormError> {
    let new_application: NewCourseApplication =
        form.0.try_into().map_err(FormError::ValidationError)?;

    let course = find_course(&db_pool, new_application.course_id)
        .await
        .context("Failed to read the course from the database.")?
        .ok_or(FormError::UnknownCourse)?;

    let application = insert_course_application(&db_pool, new_application, course)
        .await
        .context("Failed to insert a new course application in the database.")?;

    let reply = format!(
        "Thank you for your application! We will contact you soon about {}.",
        application.course.title
    );

    // The application is stored at this point, delivery must not change the response.
    telegram_client
        .notify(&NotificationPayload::Application(application))
        .await;

    Ok(accepted(&reply))
}

#[tracing::instrument(name = "Looking up the requested course", skip(pool))]
async fn find_course(pool: &PgPool, course_id: Uuid) -> Result<Option<CourseSnapshot>, sqlx::Error> {
    let row = sqlx::query_as::<_, CourseRow>(
        r#"
        SELECT title, price_cents, duration, level FROM courses WHERE id = $1
        "#,
    )
    .bind(course_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

#[tracing::instrument(
    name = "Saving new course application in the database",
    skip(new_application, pool, course)
)]
async fn insert_course_application(
    pool: &PgPool,
    new_application: NewCourseApplication,
    course: CourseSnapshot,
) -> Result<CourseApplication, sqlx::Error> {
    let created_at = Utc::now();
    sqlx::query(
        r#"
        INSERT INTO course_applications
            (id, name, phone, email, course_id, status, message, created_at)
        VALUES ($1, $2, $3, $4, $5, 'pending', $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_application.name.as_ref())
    .bind(new_application.phone.as_ref())
    .bind(new_application.email.as_ref())
    .bind(new_application.course_id)
    .bind(new_application.message.as_deref().unwrap_or_default())
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(CourseApplication {
        name: new_application.name.as_ref().to_string(),
        phone: new_application.phone.as_ref().to_string(),
        email: new_application.email.as_ref().to_string(),
        message: new_application.message,
        created_at,
        course,
    })
}
