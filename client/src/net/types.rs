//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The host crate serializes these exact types, so both sides agree on field
//! names and the integer encoding of ratings without a separate schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric campsite identifier.
pub type CampsiteId = u32;

/// Numeric comment identifier.
pub type CommentId = u32;

/// A campsite record as served by `/api/campsites`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    /// Image path relative to the asset base URL (e.g. `images/react-lake.jpg`).
    pub image: String,
    #[serde(default)]
    pub elevation: u32,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}

/// A posted comment. Lists of comments keep the order the server returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub campsite_id: CampsiteId,
    pub rating: u8,
    pub text: String,
    pub author: String,
    /// ISO-8601 timestamp string.
    pub date: String,
}

/// Star rating selectable in the comment form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::One, Rating::Two, Rating::Three, Rating::Four, Rating::Five];

    /// Parse a form select value (`"1"`..`"5"`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::Four),
            "5" => Some(Self::Five),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(format!("rating out of range: {other}")),
        }
    }
}

/// Payload of a validated comment submission (`POST /api/comments`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSubmission {
    pub campsite_id: CampsiteId,
    pub rating: Rating,
    pub author: String,
    pub text: String,
}
