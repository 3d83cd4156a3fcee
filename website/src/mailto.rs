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

//! `mailto:` link derivation for [`ObfuscatedMailto`].
//!
//! Everything here is plain data so the two-phase render of the component can
//! be reasoned about (and tested) without a browser. The component only ever
//! holds a [`LinkState`]; it starts out [`LinkState::pending`] and is swapped
//! for [`LinkState::materialized`] once the page is interactive.
//!
//! [`ObfuscatedMailto`]: crate::components::ObfuscatedMailto::ObfuscatedMailto

use std::fmt;

/// Target shown before the real address is available.
pub const PLACEHOLDER_HREF: &str = "#";

/// Local part and domain, kept apart until the link is materialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress {
    user: String,
    domain: String,
}

impl EmailAddress {
    /// Returns `None` when either half is empty; such a link never materializes.
    pub fn new(user: impl Into<String>, domain: impl Into<String>) -> Option<Self> {
        let user = user.into();
        let domain = domain.into();
        if user.is_empty() || domain.is_empty() {
            return None;
        }
        Some(Self { user, domain })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.domain)
    }
}

/// Optional `subject` and `body` for the mail client. Empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MailHeaders {
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl MailHeaders {
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Percent-encoded `key=value` pairs joined by `&`, or `None` if nothing is set.
    pub fn query_string(&self) -> Option<String> {
        let params: Vec<String> = [("subject", &self.subject), ("body", &self.body)]
            .into_iter()
            .filter_map(|(key, value)| match value.as_deref() {
                Some(value) if !value.is_empty() => {
                    Some(format!("{key}={}", urlencoding::encode(value)))
                }
                _ => None,
            })
            .collect();

        if params.is_empty() {
            None
        } else {
            Some(params.join("&"))
        }
    }
}

/// `mailto:<user>@<domain>[?subject=..][&body=..]`
pub fn mailto_href(address: &EmailAddress, headers: &MailHeaders) -> String {
    match headers.query_string() {
        Some(query) => format!("mailto:{address}?{query}"),
        None => format!("mailto:{address}"),
    }
}

/// What a click on the anchor should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// The href is still the placeholder: swallow the click.
    PreventDefault,
    /// Let the browser navigate and call the caller's handler, if any.
    Forward,
}

/// Display state of one link instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkState {
    href: Option<String>,
    label: String,
}

impl LinkState {
    pub fn pending() -> Self {
        Self::default()
    }

    /// `label` is left empty when the caller renders its own children.
    pub fn materialized(address: &EmailAddress, headers: &MailHeaders, has_children: bool) -> Self {
        Self {
            href: Some(mailto_href(address, headers)),
            label: if has_children {
                String::new()
            } else {
                address.to_string()
            },
        }
    }

    pub fn is_materialized(&self) -> bool {
        self.href.is_some()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn href_or_placeholder(&self) -> &str {
        self.href.as_deref().unwrap_or(PLACEHOLDER_HREF)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn on_click(&self) -> ClickAction {
        if self.is_materialized() {
            ClickAction::Forward
        } else {
            ClickAction::PreventDefault
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> EmailAddress {
        EmailAddress::new("info", "example.com").unwrap()
    }

    #[test]
    fn bare_address_has_no_query() {
        let href = mailto_href(&info(), &MailHeaders::default());
        assert_eq!(href, "mailto:info@example.com");
        assert!(!href.ends_with('?'));
    }

    #[test]
    fn subject_only() {
        let headers = MailHeaders::default().with_subject("Hi");
        assert_eq!(
            mailto_href(&info(), &headers),
            "mailto:info@example.com?subject=Hi"
        );
    }

    #[test]
    fn body_only_starts_the_query_itself() {
        let headers = MailHeaders::default().with_body("Hello");
        assert_eq!(
            mailto_href(&info(), &headers),
            "mailto:info@example.com?body=Hello"
        );
    }

    #[test]
    fn subject_and_body_are_encoded_and_joined() {
        let headers = MailHeaders::default()
            .with_subject("Hi")
            .with_body("Hello there");
        assert_eq!(
            mailto_href(&info(), &headers),
            "mailto:info@example.com?subject=Hi&body=Hello%20there"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let headers = MailHeaders::default().with_subject("Q&A? 100%");
        assert_eq!(
            mailto_href(&info(), &headers),
            "mailto:info@example.com?subject=Q%26A%3F%20100%25"
        );
    }

    #[test]
    fn empty_header_values_are_dropped() {
        let headers = MailHeaders::default().with_subject("").with_body("");
        assert_eq!(headers.query_string(), None);
        assert_eq!(
            mailto_href(&info(), &headers),
            "mailto:info@example.com"
        );
    }

    #[test]
    fn empty_parts_do_not_form_an_address() {
        assert!(EmailAddress::new("", "example.com").is_none());
        assert!(EmailAddress::new("info", "").is_none());
    }

    #[test]
    fn href_is_stable_across_renders() {
        let headers = MailHeaders::default().with_subject("Hi").with_body("Hello there");
        let first = LinkState::materialized(&info(), &headers, false);
        let second = LinkState::materialized(&info(), &headers, false);
        assert_eq!(first.href().unwrap().as_bytes(), second.href().unwrap().as_bytes());
        assert_eq!(first, second);
    }

    #[test]
    fn pending_link_uses_placeholder_and_swallows_clicks() {
        let state = LinkState::pending();
        assert!(!state.is_materialized());
        assert_eq!(state.href(), None);
        assert_eq!(state.href_or_placeholder(), "#");
        assert_eq!(state.label(), "");
        assert_eq!(state.on_click(), ClickAction::PreventDefault);
    }

    #[test]
    fn materialized_link_forwards_clicks() {
        let state = LinkState::materialized(&info(), &MailHeaders::default(), false);
        assert_eq!(state.href_or_placeholder(), "mailto:info@example.com");
        assert_eq!(state.on_click(), ClickAction::Forward);
    }

    #[test]
    fn label_is_address_without_children() {
        let state = LinkState::materialized(&info(), &MailHeaders::default(), false);
        assert_eq!(state.label(), "info@example.com");
    }

    #[test]
    fn label_is_left_to_children_when_supplied() {
        let state = LinkState::materialized(&info(), &MailHeaders::default(), true);
        assert_eq!(state.label(), "");
        assert!(state.is_materialized());
    }
}
