//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{campsite_info::CampsiteInfoPage, directory::DirectoryPage};
use crate::util::config::ClientConfig;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";
const FONT_AWESOME_CSS: &str = "https://cdn.jsdelivr.net/npm/font-awesome@4.7.0/css/font-awesome.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=BOOTSTRAP_CSS/>
                <link rel="stylesheet" href=FONT_AWESOME_CSS/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/campsite.css"/>
        <Title text="NuCamp"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DirectoryPage/>
                <Route path=StaticSegment("directory") view=DirectoryPage/>
                <Route path=(StaticSegment("directory"), ParamSegment("campsite_id")) view=CampsiteInfoPage/>
            </Routes>
        </Router>
    }
}
