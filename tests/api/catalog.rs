use uuid::Uuid;

use crate::helpers::spawn_app;

#[tokio::test]
async fn courses_are_listed_nine_per_page() {
    let app = spawn_app().await;
    for n in 0..10 {
        app.insert_course(&format!("Course {n}"), 10000, "beginner").await;
    }

    let first = app.get_json("/courses").await;
    assert_eq!(first["courses"].as_array().unwrap().len(), 9);
    assert_eq!(first["page"]["number"], 1);
    assert_eq!(first["page"]["num_pages"], 2);
    assert_eq!(first["page"]["has_next"], true);

    let second = app.get_json("/courses?page=2").await;
    assert_eq!(second["courses"].as_array().unwrap().len(), 1);
    assert_eq!(second["page"]["has_previous"], true);

    let beyond = app.get_json("/courses?page=40").await;
    assert_eq!(beyond["page"]["number"], 2);

    let garbage = app.get_json("/courses?page=abc").await;
    assert_eq!(garbage["page"]["number"], 1);
}

#[tokio::test]
async fn courses_can_be_filtered_by_level_and_searched() {
    let app = spawn_app().await;
    app.insert_course("IELTS Intensive", 15000, "advanced").await;
    app.insert_course("General English", 9900, "beginner").await;
    app.insert_course("Business English", 12000, "advanced").await;

    let advanced = app.get_json("/courses?level=advanced").await;
    assert_eq!(advanced["courses"].as_array().unwrap().len(), 2);
    assert_eq!(advanced["level_filter"], "advanced");

    let searched = app.get_json("/courses?search=ielts").await;
    let found = searched["courses"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "IELTS Intensive");
    assert_eq!(found[0]["price"], "$150.00");
    assert_eq!(found[0]["level_marker"], "🔴");

    let both = app.get_json("/courses?level=beginner&search=english").await;
    assert_eq!(both["courses"].as_array().unwrap().len(), 1);

    let wildcard = app.get_json("/courses?search=%25").await;
    assert!(wildcard["courses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn course_list_offers_every_level_choice() {
    let app = spawn_app().await;

    let listing = app.get_json("/courses").await;

    let choices = listing["level_choices"].as_array().unwrap();
    assert_eq!(choices.len(), 5);
    assert_eq!(choices[3]["value"], "upper-intermediate");
    assert_eq!(choices[3]["label"], "Upper-Intermediate");
    assert!(listing["courses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn course_detail_shows_active_lessons_related_courses_and_testimonials() {
    let app = spawn_app().await;
    let course = app.insert_course("IELTS Intensive", 15000, "advanced").await;
    let other = app.insert_course("General English", 9900, "beginner").await;
    app.insert_lesson(Some(course), Some("https://youtu.be/dQw4w9WgXcQ"), None, "course_lesson", true)
        .await;
    app.insert_lesson(Some(course), Some("https://vimeo.com/76979871"), None, "course_lesson", false)
        .await;
    app.insert_lesson(Some(other), None, Some("videos/other.mp4"), "course_lesson", true)
        .await;
    app.insert_testimonial(Some(course), Some("videos/testimonials/aziz.mp4"))
        .await;
    app.insert_testimonial(Some(other), None).await;

    let detail = app.get_json(&format!("/courses/{course}")).await;

    assert_eq!(detail["course"]["title"], "IELTS Intensive");

    let lessons = detail["lesson_videos"].as_array().unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0]["provider"], "youtube");
    assert_eq!(lessons[0]["embed_url"], "https://www.youtube.com/embed/dQw4w9WgXcQ");

    let related = detail["related_courses"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["id"], other.to_string());

    let testimonials = detail["testimonials"].as_array().unwrap();
    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0]["has_video"], true);
}

#[tokio::test]
async fn an_unknown_course_is_not_found() {
    let app = spawn_app().await;

    for id in [Uuid::new_v4().to_string(), "42".to_string()] {
        let response = app.get(&format!("/courses/{id}")).await;
        assert_eq!(404, response.status().as_u16());

        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json["message"], "Course not found");
    }
}

#[tokio::test]
async fn the_gallery_lists_active_videos_twelve_per_page() {
    let app = spawn_app().await;
    for _ in 0..13 {
        app.insert_lesson(None, Some("https://youtu.be/dQw4w9WgXcQ"), None, "promo", true)
            .await;
    }
    app.insert_lesson(None, Some("https://youtu.be/dQw4w9WgXcQ"), None, "promo", false)
        .await;

    let first = app.get_json("/videos").await;
    assert_eq!(first["videos"].as_array().unwrap().len(), 12);
    assert_eq!(first["page"]["total"], 13);
    assert_eq!(first["videos"][0]["video_id"], "dQw4w9WgXcQ");

    let second = app.get_json("/videos?page=2").await;
    assert_eq!(second["videos"].as_array().unwrap().len(), 1);
    assert_eq!(second["video_type_choices"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn the_gallery_can_be_filtered_by_type() {
    let app = spawn_app().await;
    app.insert_lesson(None, Some("https://vimeo.com/76979871"), None, "about", true)
        .await;
    app.insert_lesson(None, None, Some("videos/promo.mp4"), "promo", true)
        .await;

    let about = app.get_json("/videos?type=about").await;

    let videos = about["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["provider"], "vimeo");
    assert_eq!(about["video_type"], "about");
}
