/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::components::ThemeProvider::ThemeProvider;
use crate::pages::Contact::Contact;
use crate::pages::Home::Home;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, StaticSegment};

const DESCRIPTION: &str = "Security Union builds low-latency video and networking software in Rust.";

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

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text: String| format!("{text} - Security Union");
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/website.css"/>
        <Title formatter/>
        <Meta name="description" content=DESCRIPTION/>

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Security Union"/>
        <Meta property="og:title" content="Security Union - Real-time systems, built in Rust"/>
        <Meta property="og:description" content=DESCRIPTION/>

        <ThemeProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=Home/>
                    <Route path=StaticSegment("contact") view=Contact/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
