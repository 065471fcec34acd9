//! Optimistic like toggling for practice comments.
//!
//! The client shows the predicted state before the store confirms it. When
//! the store rejects the change the client falls back to the state it held
//! before the toggle.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use rally_db::db::DbProvider;
use rally_db::db::query::comment_like;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::practice::store::StoreFuture;

/// Like state of one comment as seen by one client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTransition {
    Like,
    Unlike,
}

impl LikeTransition {
    /// The transition a click on a comment in `state` requests.
    #[must_use]
    pub const fn toggling(state: LikeState) -> Self {
        if state.liked { Self::Unlike } else { Self::Like }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Like => Self::Unlike,
            Self::Unlike => Self::Like,
        }
    }
}

impl LikeState {
    /// Applies `transition`; the count never drops below zero.
    #[must_use]
    pub const fn apply(self, transition: LikeTransition) -> Self {
        match transition {
            LikeTransition::Like => Self {
                liked: true,
                like_count: self.like_count.saturating_add(1),
            },
            LikeTransition::Unlike => Self {
                liked: false,
                like_count: self.like_count.saturating_sub(1),
            },
        }
    }
}

#[derive(Debug)]
pub enum LikeToggleOutcome {
    /// The store accepted the change.
    Committed(LikeState),
    /// The store failed; the state has been restored.
    RolledBack { state: LikeState, error: ServiceError },
}

impl LikeToggleOutcome {
    #[must_use]
    pub const fn state(&self) -> LikeState {
        match self {
            Self::Committed(state) | Self::RolledBack { state, .. } => *state,
        }
    }
}

pub trait LikeStore: Send + Sync {
    fn like<'a>(&'a self, comment_id: Uuid, owner_id: &'a str) -> StoreFuture<'a, ()>;

    fn unlike<'a>(&'a self, comment_id: Uuid, owner_id: &'a str) -> StoreFuture<'a, ()>;
}

/// ## Summary
/// Toggles `owner_id`'s like on a comment, predicting the result first.
///
/// ## Side Effects
/// - Adds or removes one `comment_like` row
///
/// ## Errors
/// Store failures are not returned; they produce `RolledBack` carrying the
/// error and exactly the state the client held before the toggle. The
/// saturating count means re-applying the inverse is not always exact.
#[tracing::instrument(skip(store, current), fields(liked = current.liked))]
pub async fn toggle_like<S: LikeStore + ?Sized>(
    store: &S,
    comment_id: Uuid,
    owner_id: &str,
    current: LikeState,
) -> LikeToggleOutcome {
    let transition = LikeTransition::toggling(current);
    let predicted = current.apply(transition);

    let result = match transition {
        LikeTransition::Like => store.like(comment_id, owner_id).await,
        LikeTransition::Unlike => store.unlike(comment_id, owner_id).await,
    };

    match result {
        Ok(()) => {
            tracing::debug!(?transition, "Comment like toggled");
            LikeToggleOutcome::Committed(predicted)
        }
        Err(error) => {
            tracing::warn!(
                ?transition,
                rollback = ?transition.inverse(),
                %error,
                "Comment like failed; rolling back"
            );
            LikeToggleOutcome::RolledBack {
                state: current,
                error,
            }
        }
    }
}

/// [`LikeStore`] backed by the `comment_like` table.
#[derive(Clone)]
pub struct DbLikeStore {
    provider: Arc<dyn DbProvider + Send + Sync>,
}

impl DbLikeStore {
    #[must_use]
    pub fn new(provider: Arc<dyn DbProvider + Send + Sync>) -> Self {
        Self { provider }
    }
}

impl LikeStore for DbLikeStore {
    fn like<'a>(&'a self, comment_id: Uuid, owner_id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            comment_like::insert(&mut conn, comment_id, owner_id).await?;
            Ok(())
        })
    }

    fn unlike<'a>(&'a self, comment_id: Uuid, owner_id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let mut conn = self.provider.get_connection().await?;
            comment_like::delete(&mut conn, comment_id, owner_id).await?;
            Ok(())
        })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryLikeStore {
    likes: Mutex<HashSet<(Uuid, String)>>,
    fail: AtomicBool,
}

impl InMemoryLikeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following store call fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_liked(&self, comment_id: Uuid, owner_id: &str) -> bool {
        self.likes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(comment_id, owner_id.to_string()))
    }

    fn write(&self, comment_id: Uuid, owner_id: &str, liked: bool) -> ServiceResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ServiceError::StoreError("like rejected by store".to_string()));
        }
        let mut likes = self.likes.lock().unwrap_or_else(PoisonError::into_inner);
        let key = (comment_id, owner_id.to_string());
        if liked {
            likes.insert(key);
        } else {
            likes.remove(&key);
        }
        Ok(())
    }
}

impl LikeStore for InMemoryLikeStore {
    fn like<'a>(&'a self, comment_id: Uuid, owner_id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move { self.write(comment_id, owner_id, true) })
    }

    fn unlike<'a>(&'a self, comment_id: Uuid, owner_id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move { self.write(comment_id, owner_id, false) })
    }
}
