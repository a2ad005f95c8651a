use actix_web::{HttpResponse, web};
use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{CourseLevel, Pagination, VideoType};
use crate::notification::format_price;
use crate::video::{Present, is_present};

use super::errors::LookupError;
use super::helpers::parse_record_id;
use super::videos::ResolvedVideo;

const COURSES_PER_PAGE: i64 = 9;
const VIDEOS_PER_PAGE: i64 = 12;
const RELATED_COURSES: i64 = 3;
const COURSE_TESTIMONIALS: i64 = 3;

#[derive(serde::Deserialize)]
pub struct CourseFilter {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct VideoFilter {
    #[serde(default, rename = "type")]
    pub video_type: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(serde::Serialize)]
struct Choice {
    value: &'static str,
    label: &'static str,
}

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: Uuid,
    title: String,
    description: String,
    duration: String,
    price_cents: i64,
    level: String,
    is_featured: bool,
    promo_video_file: Option<String>,
}

#[derive(serde::Serialize)]
struct CourseCard {
    id: Uuid,
    title: String,
    description: String,
    duration: String,
    price_cents: i64,
    price: String,
    level: String,
    level_marker: &'static str,
    is_featured: bool,
    has_promo_video: bool,
}

impl From<CourseRow> for CourseCard {
    fn from(row: CourseRow) -> Self {
        Self {
            price: format_price(row.price_cents),
            level_marker: CourseLevel::marker_for(&row.level),
            has_promo_video: is_present(&row.promo_video_file),
            id: row.id,
            title: row.title,
            description: row.description,
            duration: row.duration,
            price_cents: row.price_cents,
            level: row.level,
            is_featured: row.is_featured,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VideoRow {
    id: Uuid,
    title: String,
    description: String,
    video_type: String,
    video_url: Option<String>,
    video_file: Option<String>,
    preview_image: Option<String>,
}

#[derive(serde::Serialize)]
struct VideoCard {
    id: Uuid,
    title: String,
    description: String,
    video_type: String,
    video_url: Option<String>,
    video_file: Option<String>,
    preview_image: Option<String>,
    #[serde(flatten)]
    resolved: ResolvedVideo,
}

impl From<VideoRow> for VideoCard {
    fn from(row: VideoRow) -> Self {
        let video_url = row.video_url.filter(Present::is_present);
        Self {
            resolved: ResolvedVideo::from_url(video_url.as_deref()),
            id: row.id,
            title: row.title,
            description: row.description,
            video_type: row.video_type,
            video_url,
            video_file: row.video_file.filter(Present::is_present),
            preview_image: row.preview_image.filter(Present::is_present),
        }
    }
}

#[derive(sqlx::FromRow)]
struct TestimonialRow {
    id: Uuid,
    student_name: String,
    text: String,
    rating: i16,
    video_file: Option<String>,
}

#[derive(serde::Serialize)]
struct TestimonialCard {
    id: Uuid,
    student_name: String,
    text: String,
    rating: i16,
    has_video: bool,
}

impl From<TestimonialRow> for TestimonialCard {
    fn from(row: TestimonialRow) -> Self {
        Self {
            has_video: is_present(&row.video_file),
            id: row.id,
            student_name: row.student_name,
            text: row.text,
            rating: row.rating,
        }
    }
}

#[derive(serde::Serialize)]
struct CourseListing {
    courses: Vec<CourseCard>,
    page: Pagination,
    level_filter: String,
    search_query: String,
    level_choices: Vec<Choice>,
}

#[derive(serde::Serialize)]
struct CourseDetail {
    course: CourseCard,
    lesson_videos: Vec<VideoCard>,
    related_courses: Vec<CourseCard>,
    testimonials: Vec<TestimonialCard>,
}

#[derive(serde::Serialize)]
struct VideoGallery {
    videos: Vec<VideoCard>,
    page: Pagination,
    video_type: String,
    video_type_choices: Vec<Choice>,
}

fn filter_value(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive "contains" pattern for `ILIKE`, with wildcards escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[tracing::instrument(
    name = "Listing courses",
    skip(filter, db_pool),
    fields(level = ?filter.level, search = ?filter.search)
)]
pub async fn courses(
    filter: web::Query<CourseFilter>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    let level = filter_value(filter.level.as_deref());
    let search = filter_value(filter.search.as_deref());
    let pattern = search.map(contains_pattern);

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT count(*) FROM courses
        WHERE ($1::text IS NULL OR level = $1)
          AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)
        "#,
    )
    .bind(level)
    .bind(pattern.as_deref())
    .fetch_one(db_pool.get_ref())
    .await
    .context("Failed to count courses.")?;

    let page = Pagination::locate(filter.page.as_deref(), total, COURSES_PER_PAGE);
    let rows = sqlx::query_as::<_, CourseRow>(
        r#"
        SELECT id, title, description, duration, price_cents, level, is_featured,
               promo_video_file
        FROM courses
        WHERE ($1::text IS NULL OR level = $1)
          AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(level)
    .bind(pattern.as_deref())
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(db_pool.get_ref())
    .await
    .context("Failed to read courses.")?;

    Ok(HttpResponse::Ok().json(CourseListing {
        courses: rows.into_iter().map(CourseCard::from).collect(),
        page,
        level_filter: level.unwrap_or_default().to_string(),
        search_query: search.unwrap_or_default().to_string(),
        level_choices: CourseLevel::ALL
            .iter()
            .map(|l| Choice {
                value: l.as_str(),
                label: l.label(),
            })
            .collect(),
    }))
}

#[tracing::instrument(name = "Showing a course", skip(db_pool))]
pub async fn course_detail(
    course_id: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    let course_id = parse_record_id(&course_id, "Course")?;
    let pool = db_pool.get_ref();

    let course = sqlx::query_as::<_, CourseRow>(
        r#"
        SELECT id, title, description, duration, price_cents, level, is_featured,
               promo_video_file
        FROM courses WHERE id = $1
        "#,
    )
    .bind(course_id)
    .fetch_optional(pool)
    .await
    .context("Failed to read the course.")?
    .ok_or(LookupError::NotFound("Course"))?;

    let lesson_videos = sqlx::query_as::<_, VideoRow>(
        r#"
        SELECT id, title, description, video_type, video_url, video_file, preview_image
        FROM videos
        WHERE course_id = $1 AND is_active
        ORDER BY sort_order, created_at DESC
        "#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await
    .context("Failed to read the course's lesson videos.")?;

    let related_courses = sqlx::query_as::<_, CourseRow>(
        r#"
        SELECT id, title, description, duration, price_cents, level, is_featured,
               promo_video_file
        FROM courses
        WHERE id <> $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(course_id)
    .bind(RELATED_COURSES)
    .fetch_all(pool)
    .await
    .context("Failed to read related courses.")?;

    let testimonials = sqlx::query_as::<_, TestimonialRow>(
        r#"
        SELECT id, student_name, text, rating, video_file
        FROM testimonials
        WHERE course_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(course_id)
    .bind(COURSE_TESTIMONIALS)
    .fetch_all(pool)
    .await
    .context("Failed to read the course's testimonials.")?;

    Ok(HttpResponse::Ok().json(CourseDetail {
        course: course.into(),
        lesson_videos: lesson_videos.into_iter().map(VideoCard::from).collect(),
        related_courses: related_courses.into_iter().map(CourseCard::from).collect(),
        testimonials: testimonials.into_iter().map(TestimonialCard::from).collect(),
    }))
}

#[tracing::instrument(
    name = "Listing videos",
    skip(filter, db_pool),
    fields(video_type = ?filter.video_type)
)]
pub async fn video_gallery(
    filter: web::Query<VideoFilter>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, LookupError> {
    let video_type = filter_value(filter.video_type.as_deref());

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT count(*) FROM videos
        WHERE is_active AND ($1::text IS NULL OR video_type = $1)
        "#,
    )
    .bind(video_type)
    .fetch_one(db_pool.get_ref())
    .await
    .context("Failed to count videos.")?;

    let page = Pagination::locate(filter.page.as_deref(), total, VIDEOS_PER_PAGE);
    let rows = sqlx::query_as::<_, VideoRow>(
        r#"
        SELECT id, title, description, video_type, video_url, video_file, preview_image
        FROM videos
        WHERE is_active AND ($1::text IS NULL OR video_type = $1)
        ORDER BY sort_order, created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(video_type)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(db_pool.get_ref())
    .await
    .context("Failed to read videos.")?;

    Ok(HttpResponse::Ok().json(VideoGallery {
        videos: rows.into_iter().map(VideoCard::from).collect(),
        page,
        video_type: video_type.unwrap_or_default().to_string(),
        video_type_choices: VideoType::ALL
            .iter()
            .map(|t| Choice {
                value: t.as_str(),
                label: t.label(),
            })
            .collect(),
    }))
}
