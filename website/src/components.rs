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

pub mod CTAButton;
pub mod ContactForm;
pub mod DarkModeToggle;
pub mod Footer;
pub mod HeroHeader;
pub mod ObfuscatedMailto;
pub mod Page;
pub mod ThemeProvider;

pub use CTAButton::*;
pub use ContactForm::*;
pub use DarkModeToggle::*;
pub use Footer::*;
pub use HeroHeader::*;
pub use ObfuscatedMailto::*;
pub use Page::*;
pub use ThemeProvider::*;
