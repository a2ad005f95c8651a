#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoType {
    CourseLesson,
    Promo,
    Testimonial,
    About,
    Other,
}

impl VideoType {
    pub const ALL: [VideoType; 5] = [
        Self::CourseLesson,
        Self::Promo,
        Self::Testimonial,
        Self::About,
        Self::Other,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CourseLesson => "course_lesson",
            Self::Promo => "promo",
            Self::Testimonial => "testimonial",
            Self::About => "about",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CourseLesson => "Course Lesson",
            Self::Promo => "Promo Video",
            Self::Testimonial => "Testimonial",
            Self::About => "About School",
            Self::Other => "Other",
        }
    }
}
