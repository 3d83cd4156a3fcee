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

use crate::theme::{provide_theme_context, Theme};
use cfg_if::cfg_if;
use leptos::prelude::*;
use leptos_meta::Body;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        fn initial_theme() -> Option<Theme> {
            use crate::theme::THEME_COOKIE;
            use axum_extra::extract::cookie::CookieJar;

            use_context::<axum::http::request::Parts>().and_then(|req| {
                let cookies = CookieJar::from_headers(&req.headers);
                cookies
                    .get(THEME_COOKIE)
                    .and_then(|c| Theme::from_cookie_value(c.value()))
            })
        }

        // the server never writes the cookie; the browser does on toggle
        fn persist_theme(_theme: Theme) {}
    } else if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::JsCast;

        fn html_document() -> Option<web_sys::HtmlDocument> {
            web_sys::window()
                .and_then(|w| w.document())
                .map(|doc| doc.unchecked_into::<web_sys::HtmlDocument>())
        }

        fn initial_theme() -> Option<Theme> {
            let cookie = html_document()
                .and_then(|doc| doc.cookie().ok())
                .unwrap_or_default();
            Theme::from_cookie_header(&cookie).or_else(|| {
                web_sys::window()?
                    .match_media("(prefers-color-scheme: dark)")
                    .ok()
                    .flatten()
                    .map(|query| if query.matches() { Theme::Dark } else { Theme::Light })
            })
        }

        fn persist_theme(theme: Theme) {
            use crate::theme::THEME_COOKIE;

            let Some(doc) = html_document() else {
                return;
            };
            let cookie = format!(
                "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
                theme.as_str()
            );
            if doc.set_cookie(&cookie).is_err() {
                leptos::logging::warn!("could not persist theme preference");
            }
        }
    } else {
        fn initial_theme() -> Option<Theme> {
            None
        }

        fn persist_theme(_theme: Theme) {}
    }
}

/// Owns the theme signal for everything below it and mirrors it onto `<body class>`.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let ctx = provide_theme_context(initial_theme().unwrap_or_default());
    let theme = ctx.theme;

    // only explicit toggles are written back, not the initial value
    Effect::new(move |previous: Option<Theme>| {
        let current = theme.get();
        if previous.is_some_and(|p| p != current) {
            persist_theme(current);
        }
        current
    });

    view! {
        <Body {..} class=move || theme.get().as_str()/>
        {children()}
    }
}
