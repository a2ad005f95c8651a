use uuid::Uuid;

use crate::video::is_present;

use super::{ContactEmail, PersonName, PhoneNumber};

#[derive(Debug)]
pub struct NewCourseApplication {
    pub name: PersonName,
    pub phone: PhoneNumber,
    pub email: ContactEmail,
    pub course_id: Uuid,
    pub message: Option<String>,
}

impl NewCourseApplication {
    pub fn parse(
        name: String,
        phone: String,
        email: String,
        course: String,
        message: Option<String>,
    ) -> Result<Self, String> {
        let course_id = Uuid::parse_str(course.trim())
            .map_err(|_| format!("{} is not a valid course.", course))?;

        Ok(Self {
            name: PersonName::parse(name)?,
            phone: PhoneNumber::parse(phone)?,
            email: ContactEmail::parse(email)?,
            course_id,
            message: message
                .filter(|m| is_present(m))
                .map(|m| m.trim().to_string()),
        })
    }
}
