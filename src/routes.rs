mod apply;
mod catalog;
mod contact;
mod errors;
mod health_check;
mod helpers;
mod videos;

pub use apply::*;
pub use catalog::*;
pub use contact::*;
pub use errors::*;
pub use health_check::*;
pub use videos::*;
