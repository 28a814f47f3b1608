//! "Submit Comment" button and the feedback modal it opens.

use leptos::prelude::*;

use crate::net::types::{CampsiteId, CommentSubmission, Rating};
use crate::state::comment_form::CommentFormState;
use crate::util::validation::Field;

/// Comment form bound to one campsite.
///
/// Owns its `CommentFormState`; a valid submit closes the modal and forwards
/// the submission to `post_comment`.
#[component]
pub fn CommentForm(campsite_id: CampsiteId, post_comment: Callback<CommentSubmission>) -> impl IntoView {
    let form = RwSignal::new(CommentFormState::default());

    let on_toggle = move |_| form.update(CommentFormState::toggle);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            form.update(CommentFormState::toggle);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        form.update(|f| {
            if let Err(errors) = f.submit(campsite_id, |submission| pending = Some(submission)) {
                leptos::logging::log!("comment form rejected: {errors}");
            }
        });
        if let Some(submission) = pending {
            post_comment.run(submission);
        }
    };

    view! {
        <button class="btn btn-outline-secondary" type="button" on:click=on_toggle>
            <i class="fa fa-comment fa-lg"></i>
            " Submit Comment"
        </button>
        <Show when=move || form.with(CommentFormState::is_modal_open)>
            <div class="comment-modal__backdrop" on:click=on_toggle>
                <div
                    class="modal-dialog comment-modal"
                    role="dialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"We Welcome Feedback"</h5>
                            <button type="button" class="close" aria-label="Close" on:click=on_toggle>
                                <span aria-hidden="true">"×"</span>
                            </button>
                        </div>
                        <form class="modal-body" on:submit=on_submit>
                            <div class="form-group">
                                <label for="author" class="col-md-2">"Author"</label>
                                <input
                                    type="text"
                                    id="author"
                                    name="author"
                                    class="form-control"
                                    placeholder="Your Name"
                                    prop:value=move || form.with(|f| f.draft().author.clone())
                                    on:input=move |ev| form.update(|f| f.set_author(event_target_value(&ev)))
                                    on:blur=move |_| form.update(|f| f.touch(Field::Author))
                                />
                                <FieldMessages form=form field=Field::Author/>
                            </div>
                            <div class="form-group">
                                <label for="rating" class="col-md-2">"Rating"</label>
                                <select
                                    id="rating"
                                    name="rating"
                                    class="form-control"
                                    prop:value=move || form.with(|f| f.draft().rating.clone())
                                    on:change=move |ev| form.update(|f| f.set_rating(event_target_value(&ev)))
                                    on:blur=move |_| form.update(|f| f.touch(Field::Rating))
                                >
                                    <option value="">"Select a rating"</option>
                                    {Rating::ALL
                                        .iter()
                                        .map(|rating| view! { <option value=rating.as_str()>{rating.as_str()}</option> })
                                        .collect_view()}
                                </select>
                                <FieldMessages form=form field=Field::Rating/>
                            </div>
                            <div class="form-group">
                                <label for="text" class="col-md-2">"Comments"</label>
                                <textarea
                                    rows="6"
                                    id="text"
                                    name="text"
                                    class="form-control"
                                    placeholder="We'd love your thoughts"
                                    prop:value=move || form.with(|f| f.draft().text.clone())
                                    on:input=move |ev| form.update(|f| f.set_text(event_target_value(&ev)))
                                    on:blur=move |_| form.update(|f| f.touch(Field::Text))
                                ></textarea>
                                <FieldMessages form=form field=Field::Text/>
                            </div>
                            <button type="submit" class="btn btn-primary">"Submit"</button>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Inline validation messages for a touched field.
#[component]
fn FieldMessages(form: RwSignal<CommentFormState>, field: Field) -> impl IntoView {
    view! {
        {move || {
            form.with(|f| f.visible_errors(field))
                .into_iter()
                .map(|message| view! { <div class="text-danger">{message}</div> })
                .collect_view()
        }}
    }
}
