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

use crate::mailto::{ClickAction, EmailAddress, LinkState, MailHeaders};
use leptos::attribute_interceptor::AttributeInterceptor;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Anchor whose `mailto:` target is absent from server-rendered markup.
///
/// The first render emits `href="#"` and no address text. An effect, which only
/// runs in the browser, fills both in after mount and again whenever `user`,
/// `domain` or `headers` change. Clicks before that point are swallowed.
///
/// Anchor attributes are taken as props. Anything passed as `attr:*` is
/// discarded so a caller can never put a second `href` on the link.
#[component]
pub fn ObfuscatedMailto(
    #[prop(into)] user: Signal<String>,
    #[prop(into)] domain: Signal<String>,
    #[prop(optional, into)] headers: MaybeProp<MailHeaders>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] target: MaybeProp<String>,
    #[prop(optional, into)] rel: MaybeProp<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let has_children = children.is_some();
    let state = RwSignal::new(LinkState::pending());

    Effect::new(move |_| {
        let next = match EmailAddress::new(user.get(), domain.get()) {
            Some(address) => LinkState::materialized(
                &address,
                &headers.get().unwrap_or_default(),
                has_children,
            ),
            None => LinkState::pending(),
        };
        state.set(next);
    });

    let handle_click = move |ev: MouseEvent| match state.with_untracked(LinkState::on_click) {
        ClickAction::PreventDefault => ev.prevent_default(),
        ClickAction::Forward => {
            if let Some(on_click) = on_click {
                on_click.run(ev);
            }
        }
    };

    view! {
        <AttributeInterceptor let:_attrs>
            <a
                href=move || state.with(|s| s.href_or_placeholder().to_string())
                class=move || class.get()
                id=move || id.get()
                target=move || target.get()
                rel=move || rel.get()
                title=move || title.get()
                aria-label=move || aria_label.get()
                on:click=handle_click
            >
                {match children.clone() {
                    Some(children) => children().into_any(),
                    None => (move || state.with(|s| s.label().to_string())).into_any(),
                }}
            </a>
        </AttributeInterceptor>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn server_markup_keeps_the_address_out() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <ObfuscatedMailto user="info" domain="example.com" class="contact" rel="noopener"/>
            }
            .to_html();
            assert!(html.contains(r##"href="#""##));
            assert!(html.contains(r#"class="contact""#));
            assert!(html.contains(r#"rel="noopener""#));
            assert!(!html.contains("info@example.com"));
            assert!(!html.contains("mailto:"));
        });
    }

    #[test]
    fn server_markup_renders_children() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <ObfuscatedMailto user="info" domain="example.com">"Email us"</ObfuscatedMailto>
            }
            .to_html();
            assert!(html.contains("Email us"));
            assert!(!html.contains("example.com"));
        });
    }

    #[test]
    fn caller_href_never_reaches_the_markup() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <ObfuscatedMailto
                    user="info"
                    domain="example.com"
                    attr:href="mailto:leak@example.com"
                />
            }
            .to_html();
            assert_eq!(html.matches("href=").count(), 1);
            assert!(html.contains(r##"href="#""##));
            assert!(!html.contains("leak@example.com"));
        });
    }
}
