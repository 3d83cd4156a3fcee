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

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center font-medium transition-all duration-200 ease-out focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-background px-8 py-4 text-lg rounded-xl";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-primary text-white hover:bg-primary-dark focus:ring-primary/20 shadow-sm hover:shadow-md",
        ButtonVariant::Secondary => "bg-background-secondary text-foreground border border-border hover:bg-background-tertiary hover:border-border-secondary focus:ring-primary/20",
    };

    view! {
        <a href=href class=format!("{base_classes} {variant_classes}")>
            {children()}
        </a>
    }
}
