//! Reaction entity and the like/dislike toggle state machine
//!
//! A user holds at most one reaction per video. Toggling the same kind
//! removes it; toggling the opposite kind switches in place. Every
//! transition carries the counter deltas that keep the denormalized
//! `like_count` / `dislike_count` on the video row consistent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// The two mutually exclusive reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// The other kind
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Stable string tag, matching the database CHECK constraint
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Parse from the stored tag
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(DomainError::InvalidReaction(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity - one row per (user, video)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Uuid,
    pub video_id: i64,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction stamped with the current time
    pub fn new(user_id: Uuid, video_id: i64, kind: ReactionKind) -> Self {
        Self {
            user_id,
            video_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Outcome of applying a desired reaction against the previous state
///
/// `stored` is the reaction left on the row afterwards (`None` means the
/// row was removed). The deltas apply to the video's denormalized counters
/// and are each in {-1, 0, +1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    pub stored: Option<ReactionKind>,
    pub like_delta: i32,
    pub dislike_delta: i32,
}

impl ReactionTransition {
    /// Delta for a specific kind
    #[inline]
    pub const fn delta_for(&self, kind: ReactionKind) -> i32 {
        match kind {
            ReactionKind::Like => self.like_delta,
            ReactionKind::Dislike => self.dislike_delta,
        }
    }
}

/// Compute the toggle transition for a (user, video) pair.
///
/// - same kind again: toggle off (row deleted, counter for that kind -1)
/// - opposite kind: switch in place (+1 desired, -1 opposite)
/// - no previous reaction: insert (+1 desired)
pub fn toggle_transition(
    prev: Option<ReactionKind>,
    desired: ReactionKind,
) -> ReactionTransition {
    let (stored, desired_delta, opposite_delta) = match prev {
        Some(p) if p == desired => (None, -1, 0),
        Some(_) => (Some(desired), 1, -1),
        None => (Some(desired), 1, 0),
    };

    let (like_delta, dislike_delta) = match desired {
        ReactionKind::Like => (desired_delta, opposite_delta),
        ReactionKind::Dislike => (opposite_delta, desired_delta),
    };

    ReactionTransition {
        stored,
        like_delta,
        dislike_delta,
    }
}
