use unicode_segmentation::UnicodeSegmentation;

const MAX_PHONE_LENGTH: usize = 20;

#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        let is_empty = trimmed.is_empty();
        let is_too_long = trimmed.graphemes(true).count() > MAX_PHONE_LENGTH;
        let has_forbidden_chars = trimmed
            .chars()
            .any(|c| !(c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')')));

        if is_empty || is_too_long || has_forbidden_chars {
            Err(format!("{} is not a valid phone number.", s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
