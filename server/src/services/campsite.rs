//! Campsite service: in-memory campsite and comment store.
//!
//! DESIGN
//! ======
//! The store is seeded once at startup (built-in YAML or `CAMPSITE_SEED_FILE`)
//! and lives behind `AppState`'s lock. Comments are kept in one insertion
//! ordered list; per-campsite queries filter it, so the order clients see is
//! always the order comments were added.
//!
//! ERROR HANDLING
//! ==============
//! Submissions are re-validated with the client's rule table. A rejected
//! submission leaves the store untouched.

use std::path::{Path, PathBuf};

use campsite_client::net::types::{Campsite, CampsiteId, Comment, CommentId, CommentSubmission};
use campsite_client::util::validation::{self, FieldErrors};
use serde::Deserialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const BUILTIN_SEED: &str = include_str!("../../data/seed.yaml");

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CampsiteError {
    #[error("campsite not found: {0}")]
    NotFound(CampsiteId),
    #[error("invalid comment: {0}")]
    Invalid(FieldErrors),
    #[error("comment ids exhausted")]
    IdsExhausted,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// On-disk seed layout.
#[derive(Debug, Deserialize)]
struct Seed {
    campsites: Vec<Campsite>,
    #[serde(default)]
    comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default)]
pub struct CampsiteStore {
    campsites: Vec<Campsite>,
    comments: Vec<Comment>,
    /// `None` once the id space is used up.
    next_comment_id: Option<CommentId>,
}

// =============================================================================
// SEEDING
// =============================================================================

/// Parse a YAML seed document.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] for malformed YAML or missing fields.
pub fn parse_seed(raw: &str) -> Result<CampsiteStore, SeedError> {
    let seed: Seed = serde_yaml::from_str(raw)?;
    Ok(CampsiteStore::new(seed.campsites, seed.comments))
}

/// Load the store from `path`, or from the built-in seed when `None`.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read and
/// [`SeedError::Parse`] if its contents are invalid.
pub fn load_seed(path: Option<&Path>) -> Result<CampsiteStore, SeedError> {
    let Some(path) = path else {
        return parse_seed(BUILTIN_SEED);
    };
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io { path: path.to_path_buf(), source })?;
    parse_seed(&raw)
}

/// Current UTC time as an RFC 3339 comment timestamp.
pub fn now_timestamp() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to format comment timestamp");
        String::new()
    })
}

// =============================================================================
// STORE
// =============================================================================

impl CampsiteStore {
    #[must_use]
    pub fn new(campsites: Vec<Campsite>, comments: Vec<Comment>) -> Self {
        let next_comment_id = match comments.iter().map(|c| c.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        Self { campsites, comments, next_comment_id }
    }

    pub fn list_campsites(&self) -> &[Campsite] {
        &self.campsites
    }

    /// Look up one campsite.
    ///
    /// # Errors
    ///
    /// Returns [`CampsiteError::NotFound`] for an unknown id.
    pub fn campsite(&self, id: CampsiteId) -> Result<&Campsite, CampsiteError> {
        self.campsites
            .iter()
            .find(|c| c.id == id)
            .ok_or(CampsiteError::NotFound(id))
    }

    /// Comments for a campsite in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CampsiteError::NotFound`] for an unknown id.
    pub fn comments_for(&self, id: CampsiteId) -> Result<Vec<Comment>, CampsiteError> {
        self.campsite(id)?;
        Ok(self.comments.iter().filter(|c| c.campsite_id == id).cloned().collect())
    }

    /// Validate and append a submission, assigning the next comment id.
    ///
    /// # Errors
    ///
    /// Returns [`CampsiteError::NotFound`] for an unknown campsite and
    /// [`CampsiteError::Invalid`] when a field rule fails, and
    /// [`CampsiteError::IdsExhausted`] once no comment id is left to assign.
    pub fn add_comment(&mut self, submission: CommentSubmission, date: String) -> Result<Comment, CampsiteError> {
        self.campsite(submission.campsite_id)?;

        let errors = validation::validate_comment(&submission.author, submission.rating.as_str(), &submission.text);
        if !errors.is_empty() {
            return Err(CampsiteError::Invalid(errors));
        }
        let id = self.next_comment_id.ok_or(CampsiteError::IdsExhausted)?;

        let comment = Comment {
            id,
            campsite_id: submission.campsite_id,
            rating: submission.rating.value(),
            text: submission.text,
            author: submission.author,
            date,
        };
        self.next_comment_id = id.checked_add(1);
        self.comments.push(comment.clone());
        Ok(comment)
    }
}

#[cfg(test)]
#[path = "campsite_test.rs"]
mod tests;
