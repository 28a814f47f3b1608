//! Campsite detail page: breadcrumb, campsite card, comments, comment form.
//!
//! DESIGN
//! ======
//! `CampsiteInfo` is the pure renderer: it maps `CampsiteState` to exactly one
//! of loading / error / content / empty. `CampsiteInfoPage` is the route
//! wrapper that reads the `:campsite_id` param, fetches data after hydration,
//! and owns the `post_comment` callback.

#[cfg(test)]
#[path = "campsite_info_test.rs"]
mod campsite_info_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::campsite_card::CampsiteCard;
use crate::components::comment_list::CommentList;
use crate::components::loading::Loading;
use crate::net::types::{CampsiteId, CommentSubmission};
use crate::state::campsite::{CampsiteState, CampsiteView};

pub const CAMPSITE_NOT_FOUND: &str = "Campsite not found";

/// Parse the `:campsite_id` route segment.
pub fn parse_campsite_id(raw: &str) -> Option<CampsiteId> {
    raw.trim().parse().ok()
}

/// The view selected by `state`, notifying only when the selection changes.
///
/// A `post_error` update alone leaves the loaded subtree (and an open form) alone.
pub fn selected_view(state: Signal<CampsiteState>) -> Memo<CampsiteView> {
    Memo::new(move |_| state.with(CampsiteState::view))
}

/// Render the campsite page for the given state.
#[component]
pub fn CampsiteInfo(
    #[prop(into)] state: Signal<CampsiteState>,
    post_comment: Callback<CommentSubmission>,
) -> impl IntoView {
    let page = selected_view(state);
    let post_error = Signal::derive(move || state.with(|s| s.post_error.clone()));

    view! {
        {move || match page.get() {
            CampsiteView::Loading => view! {
                <div class="container">
                    <div class="row">
                        <Loading/>
                    </div>
                </div>
            }
            .into_any(),
            CampsiteView::Error(message) => view! {
                <div class="container">
                    <div class="row">
                        <div class="col">
                            <h4>{message}</h4>
                        </div>
                    </div>
                </div>
            }
            .into_any(),
            CampsiteView::Loaded { campsite, comments } => {
                let campsite_id = campsite.id;
                let name = campsite.name.clone();
                view! {
                    <div class="container">
                        <div class="row">
                            <div class="col">
                                <nav aria-label="breadcrumb">
                                    <ol class="breadcrumb">
                                        <li class="breadcrumb-item">
                                            <A href="/directory">"Directory"</A>
                                        </li>
                                        <li class="breadcrumb-item active" aria-current="page">
                                            {name.clone()}
                                        </li>
                                    </ol>
                                </nav>
                                <h2>{name}</h2>
                                <hr/>
                            </div>
                        </div>
                        <div class="row">
                            <CampsiteCard campsite=campsite/>
                            <CommentList
                                comments=comments
                                campsite_id=campsite_id
                                post_comment=post_comment
                                post_error=post_error
                            />
                        </div>
                    </div>
                }
                .into_any()
            }
            CampsiteView::Empty => view! { <div></div> }.into_any(),
        }}
    }
}

/// Route wrapper for `/directory/:campsite_id`.
#[component]
pub fn CampsiteInfoPage() -> impl IntoView {
    let params = use_params_map();
    let campsite_id = Memo::new(move |_| params.read().get("campsite_id").and_then(|raw| parse_campsite_id(&raw)));
    let state = RwSignal::new(CampsiteState::default());

    Effect::new(move || {
        let id = campsite_id.get();
        state.update(CampsiteState::begin_loading);
        let Some(id) = id else {
            state.update(|s| s.load_failed(CAMPSITE_NOT_FOUND));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_campsite(state, campsite_id, id));
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let post_comment = Callback::new(move |submission: CommentSubmission| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::post_comment(&submission).await {
                Ok(comment) => state.update(|s| s.comment_posted(comment)),
                Err(e) => {
                    leptos::logging::warn!("comment post failed: {e}");
                    state.update(|s| s.comment_post_failed(crate::net::api::post_failed_message(&e)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    });

    view! { <CampsiteInfo state=state post_comment=post_comment/> }
}

/// Whether `current` still points at campsite `id`.
///
/// A disposed memo (the page was left mid-fetch) counts as moved on.
pub fn is_current_route(current: Memo<Option<CampsiteId>>, id: CampsiteId) -> bool {
    matches!(current.try_get_untracked(), Some(Some(cur)) if cur == id)
}

/// Fetch campsite + comments and apply them unless the route moved on.
#[cfg(feature = "hydrate")]
async fn load_campsite(state: RwSignal<CampsiteState>, current: Memo<Option<CampsiteId>>, id: CampsiteId) {
    use crate::net::api;

    let result = match api::fetch_campsite(id).await {
        Ok(campsite) => {
            let comments = match api::fetch_comments(id).await {
                Ok(list) => Some(list),
                Err(e) => {
                    leptos::logging::warn!("comments fetch failed for campsite {id}: {e}");
                    None
                }
            };
            Ok((campsite, comments))
        }
        Err(e) => Err(e),
    };

    if !is_current_route(current, id) {
        return;
    }
    match result {
        Ok((campsite, comments)) => state.update(|s| s.load_succeeded(campsite, comments)),
        Err(e) => {
            leptos::logging::warn!("campsite fetch failed for {id}: {e}");
            state.update(|s| s.load_failed(e));
        }
    }
}
