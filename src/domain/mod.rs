mod contact_email;
mod course_level;
mod new_contact_request;
mod new_course_application;
mod pagination;
mod person_name;
mod phone_number;
mod video_type;

pub use contact_email::ContactEmail;
pub use course_level::CourseLevel;
pub use new_contact_request::NewContactRequest;
pub use new_course_application::NewCourseApplication;
pub use pagination::Pagination;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;
pub use video_type::VideoType;
