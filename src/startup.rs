use std::net::TcpListener;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings};
use crate::routes::{
    apply_course, contact, course_detail, course_video, courses, health_check, lesson_video,
    resolve_video, student_video, teacher_video, testimonial_video, video_gallery,
};
use crate::telegram_client::TelegramClient;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let telegram_client = config.telegram.client()?;
        let connection_pool = get_connection_pool(&config.database);

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, connection_pool, telegram_client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    telegram_client: TelegramClient,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let telegram_client = web::Data::new(telegram_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::post().to(contact))
            .route("/apply", web::post().to(apply_course))
            .route("/courses", web::get().to(courses))
            .route("/courses/{course_id}", web::get().to(course_detail))
            .route("/videos", web::get().to(video_gallery))
            .route("/api/videos/resolve", web::get().to(resolve_video))
            .route("/api/course-video/{id}", web::get().to(course_video))
            .route("/api/teacher-video/{id}", web::get().to(teacher_video))
            .route("/api/student-video/{id}", web::get().to(student_video))
            .route("/api/testimonial-video/{id}", web::get().to(testimonial_video))
            .route("/api/lesson-video/{id}", web::get().to(lesson_video))
            .app_data(db_pool.clone())
            .app_data(telegram_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_connection_pool(db_config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(db_config.connect_options())
}
