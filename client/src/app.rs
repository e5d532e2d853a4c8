//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{home::HomePage, navigation::NavigationPage, traffic::TrafficPage};
use crate::util::markers::install_default_icons;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Installs the marker icon set, provides the endpoint configuration, and
/// sets up client-side routing. View state is owned by each page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    install_default_icons();
    provide_context(ClientConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/smartnav.css"/>
        <Title text="Smart Navigation System"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("navigation") view=NavigationPage/>
                <Route path=StaticSegment("traffic") view=TrafficPage/>
            </Routes>
        </Router>
    }
}
