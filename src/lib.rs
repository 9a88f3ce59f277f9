//! # WfF Shortlinks
//!
//! Short link generator for content URLs on `wff-berlin.de`.
//!
//! The CMS addresses newsletters, events, articles, and downloads through
//! long query-parameter URLs. This crate translates such a URL into the
//! canonical short redirect path served under `s.wff-berlin.de`, optionally
//! tagged with a tracking source and campaign.
//!
//! ## Architecture
//!
//! Every operation is a synchronous pure function over input strings and an
//! immutable [`config::Config`]:
//!
//! - **Validation** ([`validate`]) - Origin check for candidate long URLs
//! - **Translation** ([`patterns`]) - Ordered rule table mapping query
//!   parameter shapes to canonical short paths, first match wins
//! - **Assembly** ([`assemble`]) - Short origin plus optional `/s/{source}`
//!   and `/c/{campaign}` tracking segments
//! - **Orchestration** ([`generate`]) - The entry point UIs call per input
//!
//! Nothing is persisted and no redirect is performed here; the resolver
//! serving the generated paths is a separate service.
//!
//! ## Quick Start
//!
//! ```
//! use wff_shortlinks::prelude::*;
//!
//! let config = Config::default();
//! let outcome = generate_short_url(
//!     &config,
//!     "https://wff-berlin.de?veranstaltung=123",
//!     "email",
//!     "spring",
//! );
//!
//! assert_eq!(
//!     outcome.short_url(),
//!     Some("https://s.wff-berlin.de/v/123/s/email/c/spring"),
//! );
//! ```
//!
//! ## Configuration
//!
//! The short link origin is overridable via `SHORT_URL_BASE`; see the
//! [`config`] module for details.

pub mod assemble;
pub mod config;
pub mod encoding;
pub mod error;
pub mod generate;
pub mod params;
pub mod patterns;
pub mod validate;

pub use config::Config;
pub use error::GenerateError;
pub use generate::{Generation, generate_short_url};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used items to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::{Config, SourceTag};
    pub use crate::error::GenerateError;
    pub use crate::generate::{Generation, generate_short_url};
    pub use crate::validate::is_valid_origin;
}
