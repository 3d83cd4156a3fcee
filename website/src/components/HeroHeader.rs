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

use crate::components::CTAButton::{ButtonVariant, CTAButton};
use crate::components::DarkModeToggle::DarkModeToggle;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn NavLink(href: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <a href=href class="text-foreground-secondary hover:text-foreground transition-colors">
            {text}
        </a>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 backdrop-blur-md bg-background/90 border-b border-border/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <A href="/" attr:class="flex-shrink-0 font-semibold text-foreground transition-opacity hover:opacity-80">
                        "Security Union"
                    </A>
                    <div class="hidden md:flex items-center space-x-8">
                        <NavLink href="/#services" text="Services"/>
                        <NavLink href="/contact" text="Contact"/>
                    </div>
                    <DarkModeToggle/>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden bg-background">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="pt-24 pb-32 lg:pt-32 lg:pb-40">
                    <div class="text-center max-w-4xl mx-auto">
                        <h1 class="text-hero text-foreground mb-6">
                            "Real-time systems, "
                            <span class="text-primary">"built in Rust"</span>
                        </h1>
                        <p class="text-body-large text-foreground-secondary mb-12 max-w-2xl mx-auto">
                            "We design, build and operate low-latency video and networking software for teams that cannot afford downtime."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                            <CTAButton href="/contact">"Talk to us"</CTAButton>
                            <CTAButton href="https://github.com/security-union" variant=ButtonVariant::Secondary>
                                "See our open source work"
                            </CTAButton>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
