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

use crate::components::ContactForm::ContactForm;
use crate::components::ObfuscatedMailto::ObfuscatedMailto;
use crate::components::Page::*;
use crate::contact::{CONTACT_DOMAIN, CONTACT_USER};
use crate::mailto::MailHeaders;
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    let headers = MailHeaders::default()
        .with_subject("Project inquiry")
        .with_body("Hi Security Union team,\n\n");

    view! {
        <section id="contact" class="py-24 px-6 bg-background">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-3xl font-bold text-foreground mb-4">"Get in touch"</h2>
                <p class="text-foreground-secondary mb-8">
                    "Tell us about your project, or write to "
                    <ObfuscatedMailto
                        user=CONTACT_USER
                        domain=CONTACT_DOMAIN
                        headers=headers
                        class="text-primary underline"
                    />
                    " directly."
                </p>
                <ContactForm/>
                <p class="mt-8 text-sm text-foreground-muted">
                    <ObfuscatedMailto
                        user=CONTACT_USER
                        domain=CONTACT_DOMAIN
                        class="underline"
                        target="_blank"
                        rel="noopener"
                    >
                        "Prefer your own mail client? Open a blank email."
                    </ObfuscatedMailto>
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <Title text="Contact"/>
        <Page>
            <ContactSection/>
        </Page>
    }
}
