pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod files;

pub use common::pagination::{PageView, PaginationInfo, paginate};
pub use common::response::Envelope;
