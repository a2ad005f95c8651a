use crate::video::is_present;

use super::{ContactEmail, PersonName, PhoneNumber};

#[derive(Debug)]
pub struct NewContactRequest {
    pub name: PersonName,
    pub phone: PhoneNumber,
    pub email: ContactEmail,
    pub message: String,
}

impl NewContactRequest {
    pub fn parse(
        name: String,
        phone: String,
        email: String,
        message: String,
    ) -> Result<Self, String> {
        if !is_present(&message) {
            return Err("A contact request needs a message.".to_string());
        }

        Ok(Self {
            name: PersonName::parse(name)?,
            phone: PhoneNumber::parse(phone)?,
            email: ContactEmail::parse(email)?,
            message: message.trim().to_string(),
        })
    }
}
