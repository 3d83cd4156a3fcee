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

//! Light/dark theme context.
//!
//! [`provide_theme_context`] is called once by [`ThemeProvider`]. Components
//! read it through [`use_theme`], which never fails: without a provider it logs
//! a warning and hands back the light theme with a toggle that does nothing.
//!
//! [`ThemeProvider`]: crate::components::ThemeProvider::ThemeProvider

use leptos::prelude::*;

/// Cookie holding the visitor's last explicit choice.
pub const THEME_COOKIE: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_cookie_value(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Finds `theme=<value>` in a raw `Cookie` header or `document.cookie` string.
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header.split(';').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            if name.trim() == THEME_COOKIE {
                Self::from_cookie_value(value)
            } else {
                None
            }
        })
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    /// Light theme, no-op toggle.
    pub fn fallback() -> Self {
        Self {
            theme: Signal::stored(Theme::default()),
            toggle: Callback::new(|_| {}),
        }
    }
}

pub fn provide_theme_context(initial: Theme) -> ThemeContext {
    let theme = RwSignal::new(initial);
    let ctx = ThemeContext {
        theme: theme.into(),
        toggle: Callback::new(move |_| theme.update(|t| *t = t.toggled())),
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        leptos::logging::warn!("use_theme called without a ThemeProvider; using the light theme");
        ThemeContext::fallback()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn missing_provider_falls_back_to_light_with_noop_toggle() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = use_theme();
            assert_eq!(ctx.theme.get_untracked(), Theme::Light);
            ctx.toggle.run(());
            assert_eq!(ctx.theme.get_untracked(), Theme::Light);
        });
    }

    #[test]
    fn provided_context_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            provide_theme_context(Theme::Light);
            let ctx = use_theme();
            ctx.toggle.run(());
            assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
            ctx.toggle.run(());
            assert_eq!(ctx.theme.get_untracked(), Theme::Light);
        });
    }

    #[test]
    fn cookie_header_parsing() {
        assert_eq!(
            Theme::from_cookie_header("session=abc; theme=dark; other=1"),
            Some(Theme::Dark)
        );
        assert_eq!(Theme::from_cookie_header("theme=light"), Some(Theme::Light));
        assert_eq!(Theme::from_cookie_header("theme=purple"), None);
        assert_eq!(Theme::from_cookie_header("mytheme=dark"), None);
        assert_eq!(Theme::from_cookie_header(""), None);
    }
}
