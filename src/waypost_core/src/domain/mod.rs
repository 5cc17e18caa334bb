pub mod comment;
pub mod email;
pub mod password;
pub mod post;
pub mod user;
pub mod username;
