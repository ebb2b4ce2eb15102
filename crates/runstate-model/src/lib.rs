mod domain;
pub use domain::*;

mod error;
pub use error::ModelError;

pub mod taxonomy;
pub use taxonomy::{is_member, is_member_str, members_of};
