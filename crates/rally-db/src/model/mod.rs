pub mod comment;
pub mod practice;
pub mod profile;
