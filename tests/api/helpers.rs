use linguaschool::{
    configuration::{DatabaseSettings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::SecretString;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub const BOT_TOKEN: &str = "123456:test-token";
pub const CHAT_ID: &str = "-100200300";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub telegram_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    async fn post_form(&self, route: &str, body: String) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", self.address, route))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, body: String) -> reqwest::Response {
        self.post_form("/contact", body).await
    }

    pub async fn post_application(&self, body: String) -> reqwest::Response {
        self.post_form("/apply", body).await
    }

    pub async fn resolve_video(&self, url: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/videos/resolve", self.address))
            .query(&[("url", url)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, route: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", self.address, route))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_video(&self, video_id: &str) -> reqwest::Response {
        self.get(&format!("/api/lesson-video/{video_id}")).await
    }

    pub async fn get_json(&self, route: &str) -> serde_json::Value {
        let response = self.get(route).await;
        assert_eq!(200, response.status().as_u16(), "GET {route} failed");
        response.json().await.expect("Failed to parse the JSON body.")
    }

    /// Text of every message the fake Telegram API received.
    pub async fn sent_messages(&self) -> Vec<String> {
        self.telegram_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| {
                let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
                body["text"].as_str().unwrap().to_string()
            })
            .collect()
    }

    pub async fn insert_course(&self, title: &str, price_cents: i64, level: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO courses (id, title, duration, price_cents, level, created_at)
            VALUES ($1, $2, '3 months', $3, $4, now())
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(price_cents)
        .bind(level)
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert a course.");
        id
    }

    pub async fn insert_video(&self, video_url: Option<&str>, video_file: Option<&str>) -> Uuid {
        self.insert_lesson(None, video_url, video_file, "other", true).await
    }

    pub async fn insert_lesson(
        &self,
        course_id: Option<Uuid>,
        video_url: Option<&str>,
        video_file: Option<&str>,
        video_type: &str,
        is_active: bool,
    ) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO videos (id, title, video_url, video_file, video_type, course_id, is_active, created_at)
            VALUES ($1, 'Lesson', $2, $3, $4, $5, $6, now())
            "#,
        )
        .bind(id)
        .bind(video_url)
        .bind(video_file)
        .bind(video_type)
        .bind(course_id)
        .bind(is_active)
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert a video.");
        id
    }

    pub async fn set_promo_video(&self, course_id: Uuid, video_file: &str) {
        sqlx::query("UPDATE courses SET promo_video_file = $1 WHERE id = $2")
            .bind(video_file)
            .bind(course_id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to set the promo video.");
    }

    pub async fn insert_teacher(&self, video_file: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO teachers (id, name, video_file, created_at)
            VALUES ($1, 'Ms. Karimova', $2, now())
            "#,
        )
        .bind(id)
        .bind(video_file)
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert a teacher.");
        id
    }

    pub async fn insert_testimonial(&self, course_id: Option<Uuid>, video_file: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO testimonials (id, student_name, text, rating, course_id, video_file, created_at)
            VALUES ($1, 'Aziz', 'Great teachers!', 5, $2, $3, now())
            "#,
        )
        .bind(id)
        .bind(course_id)
        .bind(video_file)
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert a testimonial.");
        id
    }

    pub async fn insert_student(&self, video_url: Option<&str>, video_file: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO student_results (id, first_name, last_name, video_url, video_file, created_at)
            VALUES ($1, 'Dilnoza', 'Rahimova', $2, $3, now())
            "#,
        )
        .bind(id)
        .bind(video_url)
        .bind(video_file)
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert a student result.");
        id
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.server_options())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database");

    let connection_pool = PgPool::connect_with(config.connect_options())
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate database");

    connection_pool
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let telegram_server = MockServer::start().await;

    let config = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.database.database_name = Uuid::new_v4().to_string();
        c.app.host = "127.0.0.1".to_string();
        c.app.port = 0;
        c.telegram.api_base_url = telegram_server.uri();
        c.telegram.bot_token = Some(SecretString::from(BOT_TOKEN.to_string()));
        c.telegram.chat_id = Some(CHAT_ID.to_string());
        c.telegram.timeout_ms = 1000;
        c
    };

    let db_pool = configure_database(&config.database).await;

    let application = Application::build(config.clone())
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.get_port());
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        db_pool,
        telegram_server,
        api_client: reqwest::Client::new(),
    }
}
