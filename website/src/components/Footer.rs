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

use crate::components::ObfuscatedMailto::ObfuscatedMailto;
use crate::contact::{CONTACT_DOMAIN, CONTACT_USER};
use crate::mailto::MailHeaders;
use leptos::prelude::*;

#[component]
fn FooterLink(href: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <li>
            <a href=href class="relative hover:text-foreground transition-colors group block">
                <span>{text}</span>
                <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary group-hover:w-full transition-all duration-300"></span>
            </a>
        </li>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 px-6 relative overflow-hidden">
            // Background gradient
            <div class="absolute inset-0 bg-gradient-to-t from-background-light/40 to-background/90 pointer-events-none"></div>

            // Top border with gradient
            <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-primary/30 to-transparent"></div>

            <div class="max-w-4xl mx-auto relative z-10">
                <div class="flex flex-col md:flex-row justify-between items-center mb-12">
                    <div class="mb-8 md:mb-0 text-foreground font-semibold">"Security Union"</div>

                    <nav class="w-full md:w-auto">
                        <ul class="grid grid-cols-2 sm:grid-cols-3 md:flex md:flex-row gap-x-10 gap-y-6 text-foreground-muted">
                            <FooterLink href="/#services" text="Services"/>
                            <FooterLink href="/contact" text="Contact"/>
                            <FooterLink href="https://github.com/security-union" text="GitHub"/>
                        </ul>
                    </nav>
                </div>

                <div class="mb-12 flex justify-center text-foreground-muted">
                    <ObfuscatedMailto
                        user=CONTACT_USER
                        domain=CONTACT_DOMAIN
                        headers=MailHeaders::default().with_subject("Hello from the website")
                        class="hover:text-foreground transition-colors underline"
                    />
                </div>

                <div class="pt-8 flex flex-col md:flex-row justify-between items-center relative">
                    // Subtle divider
                    <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-primary/10 to-transparent"></div>

                    <p class="text-foreground-subtle text-sm mb-4 md:mb-0">
                        "Copyright 2025 Security Union LLC. All rights reserved."
                    </p>
                </div>
            </div>
        </footer>
    }
}
