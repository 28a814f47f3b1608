//! Comment form controller: modal visibility, draft values, touched flags.
//!
//! DESIGN
//! ======
//! The controller is a plain struct held in an `RwSignal` by the form
//! component. Every transition is a method here so the open/close/submit rules
//! are testable without a DOM. A draft lives only while the modal is open;
//! closing it for any reason discards the draft.

#[cfg(test)]
#[path = "comment_form_test.rs"]
mod comment_form_test;

use crate::net::types::{CampsiteId, CommentSubmission, Rating};
use crate::util::validation::{self, Field, FieldErrors};

/// In-progress form values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub author: String,
    pub rating: String,
    pub text: String,
}

/// Which fields have been interacted with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Touched {
    pub author: bool,
    pub rating: bool,
    pub text: bool,
}

impl Touched {
    fn get(self, field: Field) -> bool {
        match field {
            Field::Author => self.author,
            Field::Rating => self.rating,
            Field::Text => self.text,
        }
    }

    fn set(&mut self, field: Field) {
        match field {
            Field::Author => self.author = true,
            Field::Rating => self.rating = true,
            Field::Text => self.text = true,
        }
    }

    fn all() -> Self {
        Self { author: true, rating: true, text: true }
    }
}

/// State of one comment form instance. Starts closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentFormState {
    modal_open: bool,
    draft: FormDraft,
    touched: Touched,
}

impl CommentFormState {
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.get(field)
    }

    /// Open the modal with a fresh draft. No effect when already open.
    pub fn open(&mut self) {
        if !self.modal_open {
            self.reset_draft();
            self.modal_open = true;
        }
    }

    /// Flip modal visibility. Both directions start from an empty draft.
    pub fn toggle(&mut self) {
        self.reset_draft();
        self.modal_open = !self.modal_open;
    }

    pub fn set_author(&mut self, value: String) {
        self.draft.author = value;
    }

    pub fn set_rating(&mut self, value: String) {
        self.draft.rating = value;
    }

    pub fn set_text(&mut self, value: String) {
        self.draft.text = value;
    }

    /// Mark a field as interacted with (on blur).
    pub fn touch(&mut self, field: Field) {
        self.touched.set(field);
    }

    /// Validation result for the current draft, regardless of touched state.
    pub fn errors(&self) -> FieldErrors {
        validation::validate_comment(&self.draft.author, &self.draft.rating, &self.draft.text)
    }

    /// Messages to display under `field`: failures of a touched field only.
    pub fn visible_errors(&self, field: Field) -> Vec<&'static str> {
        if !self.is_touched(field) {
            return Vec::new();
        }
        validation::validate_field(field, self.field_value(field))
    }

    /// Validate the draft and hand a submission to `post_comment`.
    ///
    /// On success the modal closes before `post_comment` runs, exactly once.
    /// On failure nothing is posted, the modal stays open, and every field is
    /// marked touched so its messages show.
    ///
    /// # Errors
    ///
    /// Returns the per-field failures when any validator rejects the draft.
    pub fn submit<F>(&mut self, campsite_id: CampsiteId, post_comment: F) -> Result<(), FieldErrors>
    where
        F: FnOnce(CommentSubmission),
    {
        let errors = self.errors();
        match (errors.is_empty(), Rating::parse(&self.draft.rating)) {
            (true, Some(rating)) => {
                let draft = std::mem::take(&mut self.draft);
                self.touched = Touched::default();
                self.modal_open = false;
                post_comment(CommentSubmission { campsite_id, rating, author: draft.author, text: draft.text });
                Ok(())
            }
            _ => {
                self.touched = Touched::all();
                Err(errors)
            }
        }
    }

    fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Author => &self.draft.author,
            Field::Rating => &self.draft.rating,
            Field::Text => &self.draft.text,
        }
    }

    fn reset_draft(&mut self) {
        self.draft = FormDraft::default();
        self.touched = Touched::default();
    }
}
