pub mod comment_like;
pub mod practice;
pub mod profile;
