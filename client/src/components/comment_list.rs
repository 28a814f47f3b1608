//! Comments column: comment entries in received order plus the comment form.
//!
//! DESIGN
//! ======
//! When no comment list was loaded the column collapses to an empty `<div>`,
//! which also hides the form: a campsite whose comments failed to load cannot
//! be commented on from this page.

#[cfg(test)]
#[path = "comment_list_test.rs"]
mod comment_list_test;

use leptos::prelude::*;

use crate::components::comment_form::CommentForm;
use crate::net::types::{CampsiteId, Comment, CommentSubmission};
use crate::util::date_format::format_comment_date;

#[component]
pub fn CommentList(
    comments: Option<Vec<Comment>>,
    campsite_id: CampsiteId,
    post_comment: Callback<CommentSubmission>,
    #[prop(into)] post_error: Signal<Option<String>>,
) -> impl IntoView {
    let Some(comments) = comments else {
        return view! { <div></div> }.into_any();
    };

    view! {
        <div class="col-md-5 m-1">
            <h4>"Comments"</h4>
            {comments.into_iter().map(|comment| view! { <CommentEntry comment=comment/> }).collect_view()}
            <Show when=move || post_error.with(Option::is_some)>
                <div class="text-danger">{move || post_error.get().unwrap_or_default()}</div>
            </Show>
            <CommentForm campsite_id=campsite_id post_comment=post_comment/>
        </div>
    }
    .into_any()
}

#[component]
fn CommentEntry(comment: Comment) -> impl IntoView {
    let date = format_comment_date(&comment.date);
    view! {
        <div>
            {comment.text}
            <br/>
            {comment.author}
            " -- "
            {date}
            <br/>
            <br/>
        </div>
    }
}
