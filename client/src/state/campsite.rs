//! Campsite page state and the tri-state view selection.
//!
//! DESIGN
//! ======
//! The page owns one `CampsiteState`; rendering never inspects its fields
//! directly but matches on `CampsiteState::view`, which fixes the precedence
//! loading > error > content > empty in one place.

#[cfg(test)]
#[path = "campsite_test.rs"]
mod campsite_test;

use crate::net::types::{Campsite, Comment};

/// Data backing the campsite info page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampsiteState {
    pub is_loading: bool,
    pub err_mess: Option<String>,
    pub campsite: Option<Campsite>,
    /// `None` when comments were never loaded; the comments column is then omitted.
    pub comments: Option<Vec<Comment>>,
    /// Last failed comment post, shown below the comment list.
    pub post_error: Option<String>,
}

impl Default for CampsiteState {
    fn default() -> Self {
        Self { is_loading: true, err_mess: None, campsite: None, comments: None, post_error: None }
    }
}

/// Exactly one of the renderable page states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampsiteView {
    Loading,
    Error(String),
    Loaded { campsite: Campsite, comments: Option<Vec<Comment>> },
    Empty,
}

impl CampsiteState {
    /// Select the view to render.
    pub fn view(&self) -> CampsiteView {
        if self.is_loading {
            return CampsiteView::Loading;
        }
        if let Some(message) = self.err_mess.as_ref().filter(|m| !m.is_empty()) {
            return CampsiteView::Error(message.clone());
        }
        match &self.campsite {
            Some(campsite) => CampsiteView::Loaded { campsite: campsite.clone(), comments: self.comments.clone() },
            None => CampsiteView::Empty,
        }
    }

    /// Reset to the loading state before a fetch.
    pub fn begin_loading(&mut self) {
        *self = Self::default();
    }

    pub fn load_succeeded(&mut self, campsite: Campsite, comments: Option<Vec<Comment>>) {
        self.is_loading = false;
        self.err_mess = None;
        self.campsite = Some(campsite);
        self.comments = comments;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.err_mess = Some(message.into());
        self.campsite = None;
        self.comments = None;
    }

    /// Append a newly accepted comment, keeping received order.
    pub fn comment_posted(&mut self, comment: Comment) {
        self.post_error = None;
        self.comments.get_or_insert_with(Vec::new).push(comment);
    }

    pub fn comment_post_failed(&mut self, message: impl Into<String>) {
        self.post_error = Some(message.into());
    }
}
