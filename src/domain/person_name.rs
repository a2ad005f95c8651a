use unicode_segmentation::UnicodeSegmentation;

const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        let is_empty = trimmed.is_empty();
        let is_too_long = trimmed.graphemes(true).count() > MAX_NAME_LENGTH;

        if is_empty || is_too_long {
            Err(format!("{} is not a valid name.", s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
