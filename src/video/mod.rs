mod presence;
mod resolver;

pub use presence::{Present, is_present};
pub use resolver::{VideoMatch, VideoProvider, resolve, vimeo_id, youtube_id};
