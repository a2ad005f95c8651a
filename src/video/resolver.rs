use once_cell::sync::Lazy;
use regex::Regex;

const YOUTUBE_ID_LENGTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    YouTube,
    Vimeo,
}

/// Outcome of classifying a free-form video link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoMatch {
    Found { provider: VideoProvider, id: String },
    NotFound,
}

impl VideoMatch {
    pub fn provider(&self) -> Option<VideoProvider> {
        match self {
            VideoMatch::Found { provider, .. } => Some(*provider),
            VideoMatch::NotFound => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            VideoMatch::Found { id, .. } => Some(id),
            VideoMatch::NotFound => None,
        }
    }

    /// Player URL suitable for an `<iframe>`.
    pub fn embed_url(&self) -> Option<String> {
        match self {
            VideoMatch::Found {
                provider: VideoProvider::YouTube,
                id,
            } => Some(format!("https://www.youtube.com/embed/{id}")),
            VideoMatch::Found {
                provider: VideoProvider::Vimeo,
                id,
            } => Some(format!("https://player.vimeo.com/video/{id}")),
            VideoMatch::NotFound => None,
        }
    }
}

struct Rule {
    provider: VideoProvider,
    pattern: Regex,
    accept: fn(&str) -> bool,
}

impl Rule {
    fn new(provider: VideoProvider, pattern: &str, accept: fn(&str) -> bool) -> Self {
        Self {
            provider,
            pattern: Regex::new(pattern).expect("Invalid video link pattern"),
            accept,
        }
    }

    fn extract(&self, url: &str) -> Option<String> {
        let candidate = self.pattern.captures(url)?.get(1)?.as_str();
        (self.accept)(candidate).then(|| candidate.to_owned())
    }
}

fn is_youtube_id(candidate: &str) -> bool {
    candidate.len() == YOUTUBE_ID_LENGTH
}

fn is_vimeo_id(candidate: &str) -> bool {
    !candidate.is_empty()
}

// Evaluated top to bottom, the first accepted extraction wins.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            VideoProvider::YouTube,
            r"youtu\.be/([A-Za-z0-9_-]+)",
            is_youtube_id,
        ),
        Rule::new(
            VideoProvider::YouTube,
            r"youtube\.com/embed/([A-Za-z0-9_-]+)",
            is_youtube_id,
        ),
        Rule::new(
            VideoProvider::YouTube,
            r"youtube\.com/watch\?v=([A-Za-z0-9_-]+)",
            is_youtube_id,
        ),
        Rule::new(
            VideoProvider::YouTube,
            r"youtube\.com/watch\?.*[&?]v=([A-Za-z0-9_-]+)",
            is_youtube_id,
        ),
        Rule::new(
            VideoProvider::Vimeo,
            r"vimeo\.com/(?:video/)?(\d+)",
            is_vimeo_id,
        ),
    ]
});

fn resolve_with(url: Option<&str>, only: Option<VideoProvider>) -> VideoMatch {
    let url = match url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return VideoMatch::NotFound,
    };

    RULES
        .iter()
        .filter(|rule| only.is_none_or(|provider| rule.provider == provider))
        .find_map(|rule| {
            rule.extract(url).map(|id| VideoMatch::Found {
                provider: rule.provider,
                id,
            })
        })
        .unwrap_or(VideoMatch::NotFound)
}

/// Classifies `url` by hosting provider and extracts its video id.
pub fn resolve(url: Option<&str>) -> VideoMatch {
    resolve_with(url, None)
}

pub fn youtube_id(url: Option<&str>) -> Option<String> {
    match resolve_with(url, Some(VideoProvider::YouTube)) {
        VideoMatch::Found { id, .. } => Some(id),
        VideoMatch::NotFound => None,
    }
}

pub fn vimeo_id(url: Option<&str>) -> Option<String> {
    match resolve_with(url, Some(VideoProvider::Vimeo)) {
        VideoMatch::Found { id, .. } => Some(id),
        VideoMatch::NotFound => None,
    }
}
