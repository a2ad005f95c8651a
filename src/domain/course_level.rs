const GENERIC_MARKER: &str = "📚";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLevel {
    Beginner,
    Elementary,
    Intermediate,
    UpperIntermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 5] = [
        Self::Beginner,
        Self::Elementary,
        Self::Intermediate,
        Self::UpperIntermediate,
        Self::Advanced,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "elementary" => Some(Self::Elementary),
            "intermediate" => Some(Self::Intermediate),
            "upper-intermediate" => Some(Self::UpperIntermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Elementary => "elementary",
            Self::Intermediate => "intermediate",
            Self::UpperIntermediate => "upper-intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Elementary => "Elementary",
            Self::Intermediate => "Intermediate",
            Self::UpperIntermediate => "Upper-Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Beginner => "🟢",
            Self::Elementary => "🟡",
            Self::Intermediate => "🟠",
            Self::UpperIntermediate => "🔵",
            Self::Advanced => "🔴",
        }
    }

    /// Marker for a stored level string, generic for anything unrecognised.
    pub fn marker_for(level: &str) -> &'static str {
        Self::parse(level).map_or(GENERIC_MARKER, |level| level.marker())
    }
}
