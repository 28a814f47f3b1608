//! Campsite directory: one link per campsite.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading::Loading;
use crate::net::types::{Campsite, CampsiteId};

/// Link target of a campsite's detail page.
pub fn campsite_href(id: CampsiteId) -> String {
    format!("/directory/{id}")
}

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let campsites = RwSignal::new(None::<Result<Vec<Campsite>, String>>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_campsites().await;
            if let Err(e) = &result {
                leptos::logging::warn!("campsite directory fetch failed: {e}");
            }
            campsites.set(Some(result));
        });
    }

    view! {
        <div class="container">
            <div class="row">
                <div class="col">
                    <h2>"Directory"</h2>
                    <hr/>
                </div>
            </div>
            <div class="row">
                {move || match campsites.get() {
                    None => view! { <Loading/> }.into_any(),
                    Some(Err(message)) => view! {
                        <div class="col">
                            <h4>{message}</h4>
                        </div>
                    }
                    .into_any(),
                    Some(Ok(list)) => list
                        .into_iter()
                        .map(|campsite| {
                            let href = campsite_href(campsite.id);
                            view! {
                                <div class="col-md-5 m-1">
                                    <A href=href>{campsite.name}</A>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}
