//! # guikit
//!
//! Support library for a command-line tool's bundled web interface.
//!
//! Three independent utilities, no shared state between them:
//!
//! - [`highlight`]: a JSON-to-HTML syntax highlighter. Pure text transform:
//!   HTML-escape the input, then wrap every recognized JSON token in a
//!   `<span>` carrying its token class.
//! - [`controls`]: two-state helpers for form controls. A [`controls::Page`]
//!   is a registry of elements keyed by id; [`controls::toggle_value`] swaps a
//!   control between its two configured values and
//!   [`controls::toggle_visibility`] flips the `visible`/`invisible` class
//!   pair.
//! - [`templates`]: wraps a highlighted fragment in a standalone HTML page
//!   with the stylesheet the token classes and visibility markers depend on.
//!
//! The highlighter is total over all string inputs: malformed JSON is not
//! rejected, recognized tokens are wrapped and everything else passes through
//! verbatim. It is deliberately not a parser — see [`highlight`] for the
//! behavioral consequences.

pub mod controls;
pub mod error;
pub mod highlight;
pub mod templates;

pub use controls::{toggle_value, toggle_visibility, Element, Page};
pub use error::ControlError;
pub use highlight::{escape_html, highlight_json};
