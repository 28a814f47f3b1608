//! Campsite image + description card.

use leptos::prelude::*;

use crate::net::types::Campsite;
use crate::util::config::ClientConfig;

/// Card with the campsite image (resolved against the asset base URL) and its description.
#[component]
pub fn CampsiteCard(campsite: Campsite) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let Campsite { name, image, description, .. } = campsite;
    let src = config.image_url(&image);

    view! {
        <div class="col-md-5 m-1">
            <div class="card">
                <img class="card-img-top" src=src alt=name/>
                <div class="card-body">
                    <p class="card-text">{description}</p>
                </div>
            </div>
        </div>
    }
}
