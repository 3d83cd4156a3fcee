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

use crate::components::HeroHeader::*;
use crate::components::Page::*;
use crate::pages::Contact::ContactSection;
use leptos::prelude::*;
use leptos_meta::*;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Video infrastructure",
        blurb: "WebTransport and WebSocket media pipelines with sub-second glass-to-glass latency.",
    },
    Service {
        title: "Embedded streaming",
        blurb: "Camera and robotics clients that run on the hardware you already ship.",
    },
    Service {
        title: "Security reviews",
        blurb: "Code and architecture audits for real-time systems written in Rust.",
    },
];

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-24 px-6 bg-background">
            <div class="max-w-5xl mx-auto grid gap-8 md:grid-cols-3">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="rounded-xl border border-border p-6">
                                <h2 class="text-xl font-semibold text-foreground mb-2">{service.title}</h2>
                                <p class="text-foreground-secondary">{service.blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Page>
            <HeroHeader/>
            <Services/>
            <ContactSection/>
        </Page>
    }
}
