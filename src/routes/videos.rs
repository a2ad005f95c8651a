use actix_web::{HttpResponse, web};
use anyhow::Context;
use sqlx::PgPool;

use crate::video::{Present, VideoMatch, VideoProvider, resolve};

use super::errors::LookupError;
use super::helpers::parse_record_id;

#[derive(serde::Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(serde::Serialize)]
pub struct ResolvedVideo {
    pub provider: Option<VideoProvider>,
    pub video_id: Option<String>,
    pub embed_url: Option<String>,
}

impl From<&VideoMatch> for ResolvedVideo {
    fn from(value: &VideoMatch) -> Self {
        Self {
            provider: value.provider(),
            video_id: value.id().map(str::to_owned),
            embed_url: value.embed_url(),
        }
    }
}

impl ResolvedVideo {
    pub fn from_url(url: Option<&str>) -> Self {
        Self::from(&resolve(url))
    }
}

/// Record kinds that carry a video, each with its own table and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoOwner {
    Course,
    Teacher,
    Student,
    Testimonial,
    Lesson,
}

impl VideoOwner {
    fn name(self) -> &'static str {
        match self {
            VideoOwner::Course => "Course",
            VideoOwner::Teacher => "Teacher",
            VideoOwner::Student => "Student",
            VideoOwner::Testimonial => "Testimonial",
            VideoOwner::Lesson => "Video",
        }
    }

    fn query(self) -> &'static str {
        match self {
            VideoOwner::Course => {
                r#"
                SELECT NULL::text AS video_url, promo_video_file AS video_file,
                       NULL::text AS preview_image
                FROM courses WHERE id = $1
                "#
            }
            VideoOwner::Teacher => {
                r#"
                SELECT NULL::text AS video_url, video_file, NULL::text AS preview_image
                FROM teachers WHERE id = $1
                "#
            }
            VideoOwner::Student => {
                r#"
                SELECT video_url, video_file, NULL::text AS preview_image
                FROM student_results WHERE id = $1
                "#
            }
            VideoOwner::Testimonial => {
                r#"
                SELECT NULL::text AS video_url, video_file, NULL::text AS preview_image
                FROM testimonials WHERE id = $1
                "#
            }
            VideoOwner::Lesson => {
                r#"
                SELECT video_url, video_file, preview_image
                FROM videos WHERE id = $1
                "#
            }
        }
    }
}

#[derive(serde::Serialize)]
struct VideoDetails {
    success: bool,
    video_url: Option<String>,
    video_file: Option<String>,
    preview_image: Option<String>,
    #[serde(flatten)]
    resolved: ResolvedVideo,
}

#[derive(sqlx::FromRow)]
struct VideoSourceRow {
    video_url: Option<String>,
    video_file: Option<String>,
    preview_image: Option<String>,
}

#[tracing::instrument(name = "Resolving a video link", skip(query))]
pub async fn resolve_video(query: web::Query<ResolveQuery>) -> HttpResponse {
    HttpResponse::Ok().json(ResolvedVideo::from_url(query.url.as_deref()))
}

pub async fn course_video(
    record_id: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    owned_video(VideoOwner::Course, &record_id, &db_pool).await
}

pub async fn teacher_video(
    record_id: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    owned_video(VideoOwner::Teacher, &record_id, &db_pool).await
}

pub async fn student_video(
    record_id: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    owned_video(VideoOwner::Student, &record_id, &db_pool).await
}

pub async fn testimonial_video(
    record_id: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    owned_video(VideoOwner::Testimonial, &record_id, &db_pool).await
}

pub async fn lesson_video(
    record_id: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    owned_video(VideoOwner::Lesson, &record_id, &db_pool).await
}

#[tracing::instrument(name = "Fetching a stored video", skip(db_pool))]
async fn owned_video(
    owner: VideoOwner,
    record_id: &str,
    db_pool: &PgPool,
) -> Result<HttpResponse, LookupError> {
    let record_id = parse_record_id(record_id, owner.name())?;

    let row = sqlx::query_as::<_, VideoSourceRow>(owner.query())
        .bind(record_id)
        .fetch_optional(db_pool)
        .await
        .context("Failed to read the video source from the database.")?
        .ok_or(LookupError::NotFound(owner.name()))?;

    let video_url = row.video_url.filter(Present::is_present);
    let video_file = row.video_file.filter(Present::is_present);
    if video_url.is_none() && video_file.is_none() {
        return Err(LookupError::NoVideo);
    }

    let resolved = ResolvedVideo::from_url(video_url.as_deref());
    Ok(HttpResponse::Ok().json(VideoDetails {
        success: true,
        video_url,
        video_file,
        preview_image: row.preview_image.filter(Present::is_present),
        resolved,
    }))
}
