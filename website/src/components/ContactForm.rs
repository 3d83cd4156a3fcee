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

use crate::contact::{outcome_message, post_contact};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use website_types::ContactSubmission;

const INPUT_CLASS: &str =
    "block w-full p-2 rounded-md border border-border bg-background text-foreground";
const LABEL_CLASS: &str = "block text-sm font-bold text-foreground";

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let submit =
        Action::new_local(|submission: &ContactSubmission| post_contact(submission.clone()));
    let pending = submit.pending();
    let outcome = submit.value();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit.dispatch(ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        });
    };

    view! {
        <form on:submit=on_submit class="flex flex-col gap-4 max-w-xl">
            <div>
                <label for="contact_name" class=LABEL_CLASS>"Name"</label>
                <input type="text" id="contact_name" class=INPUT_CLASS required bind:value=name/>
            </div>
            <div>
                <label for="contact_email" class=LABEL_CLASS>"Email"</label>
                <input type="email" id="contact_email" class=INPUT_CLASS required bind:value=email/>
            </div>
            <div>
                <label for="contact_message" class=LABEL_CLASS>"Message"</label>
                <textarea id="contact_message" rows="5" class=INPUT_CLASS required bind:value=message></textarea>
            </div>
            <div class="flex items-center">
                <button
                    type="submit"
                    class="btn-primary px-6 py-3"
                    disabled=move || pending.get()
                >
                    "Send message"
                </button>
                <Show when=move || pending.get()>
                    <div class="text-foreground-muted h-4 ml-4">"Sending..."</div>
                </Show>
            </div>
            <p class="text-foreground" aria-live="polite">
                {move || outcome.with(|o| o.as_ref().map(outcome_message))}
            </p>
        </form>
    }
}
