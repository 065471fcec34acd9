//! Rally service layer: practice scheduling, identity and comment likes.

pub mod auth;
pub mod comment;
pub mod error;
pub mod practice;
