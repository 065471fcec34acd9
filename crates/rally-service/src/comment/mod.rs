//! Comment reactions.

pub mod like;

pub use like::{
    DbLikeStore, InMemoryLikeStore, LikeState, LikeStore, LikeToggleOutcome, LikeTransition,
    toggle_like,
};
