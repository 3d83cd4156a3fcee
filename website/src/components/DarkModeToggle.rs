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

use crate::theme::{use_theme, Theme};
use leptos::prelude::*;

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_theme();
    let theme = ctx.theme;
    let toggle = ctx.toggle;

    view! {
        <button
            type="button"
            class="flex items-center"
            aria-label=move || match theme.get() {
                Theme::Dark => "Go to Light Mode",
                Theme::Light => "Go to Dark Mode",
            }
            on:click=move |_| toggle.run(())
        >
            <img
                class="h-6 w-6 hidden dark:block"
                src="/images/sun.svg"
                alt="Go to Light Mode"
            />
            <img
                class="h-6 w-6 block dark:hidden"
                src="/images/moon.svg"
                alt="Go to Dark Mode"
            />
        </button>
    }
}
