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

//! Browser tests for the mounted `ObfuscatedMailto` link.
//!
//! Run with `wasm-pack test --headless --chrome website -- --features hydrate`.

#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlAnchorElement, HtmlElement, MouseEventInit};
use website::components::ObfuscatedMailto;
use website::mailto::MailHeaders;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el.unchecked_into()
}

fn anchor(parent: &HtmlElement) -> HtmlAnchorElement {
    parent
        .query_selector("a")
        .unwrap()
        .expect("anchor rendered")
        .unchecked_into()
}

/// Dispatches a cancelable click. Returns `false` when a handler called `prevent_default`.
fn click(a: &HtmlAnchorElement) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let ev = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    a.dispatch_event(&ev).unwrap()
}

/// Lets the effect run and the attribute updates it triggers land in the DOM.
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn counting_callback(count: &Arc<AtomicUsize>) -> Callback<MouseEvent> {
    let count = Arc::clone(count);
    Callback::new(move |ev: MouseEvent| {
        ev.prevent_default();
        count.fetch_add(1, Ordering::SeqCst);
    })
}

#[wasm_bindgen_test]
async fn test_link_materializes_after_mount() {
    let parent = container();
    let _mounted = leptos::mount::mount_to(parent.clone(), || {
        view! {
            <ObfuscatedMailto
                user="info"
                domain="example.com"
                headers=MailHeaders::default().with_subject("Hi")
            />
        }
    });

    let a = anchor(&parent);
    assert_eq!(a.get_attribute("href").as_deref(), Some("#"));
    assert_eq!(a.text_content().unwrap_or_default(), "");

    settle().await;

    assert_eq!(
        a.get_attribute("href").as_deref(),
        Some("mailto:info@example.com?subject=Hi")
    );
    assert_eq!(a.text_content().as_deref(), Some("info@example.com"));
}

#[wasm_bindgen_test]
async fn test_link_follows_input_changes() {
    let parent = container();
    let user = RwSignal::new("info".to_string());
    let _mounted = leptos::mount::mount_to(parent.clone(), move || {
        view! { <ObfuscatedMailto user=user domain="example.com"/> }
    });
    settle().await;

    let a = anchor(&parent);
    assert_eq!(a.get_attribute("href").as_deref(), Some("mailto:info@example.com"));

    user.set("sales".to_string());
    settle().await;

    assert_eq!(a.get_attribute("href").as_deref(), Some("mailto:sales@example.com"));
    assert_eq!(a.text_content().as_deref(), Some("sales@example.com"));
}

#[wasm_bindgen_test]
async fn test_click_before_ready_is_swallowed() {
    let parent = container();
    let count = Arc::new(AtomicUsize::new(0));
    let on_click = counting_callback(&count);
    // An empty domain never forms an address, so the link stays pending.
    let _mounted = leptos::mount::mount_to(parent.clone(), move || {
        view! { <ObfuscatedMailto user="info" domain="" on_click=on_click/> }
    });
    settle().await;

    let a = anchor(&parent);
    assert_eq!(a.get_attribute("href").as_deref(), Some("#"));
    assert!(!click(&a), "navigation should be prevented");
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[wasm_bindgen_test]
async fn test_click_after_ready_reaches_callback() {
    let parent = container();
    let count = Arc::new(AtomicUsize::new(0));
    let on_click = counting_callback(&count);
    let _mounted = leptos::mount::mount_to(parent.clone(), move || {
        view! {
            <ObfuscatedMailto user="info" domain="example.com" on_click=on_click>
                "Write to us"
            </ObfuscatedMailto>
        }
    });
    settle().await;

    let a = anchor(&parent);
    assert_eq!(a.get_attribute("href").as_deref(), Some("mailto:info@example.com"));
    assert_eq!(a.text_content().as_deref(), Some("Write to us"));

    click(&a);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
