//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;

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
/// Sets document metadata and mounts the single landing route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ezz-site.css"/>
        <Title text="Ezz Digital Solutions - Building Smart, Scalable Ecosystems"/>
        <Meta
            name="description"
            content="From Zero to Digital Hero — Building Smart, Scalable Ecosystems. Digital transformation, AI automation, and intelligent online ecosystems."
        />
        <Meta
            name="keywords"
            content="digital transformation, AI automation, n8n, no-code, low-code, SEO, web development, digital strategy"
        />
        <Meta name="author" content="Abdelaziz Ashater"/>
        <Meta property="og:title" content="Ezz Digital Solutions"/>
        <Meta property="og:description" content="Building Smart, Scalable Ecosystems"/>
        <Meta property="og:type" content="website"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
