//! Colored markup over lines of text
//!
//! This module provides the pieces that turn a line of text into an
//! ordered, non-overlapping sequence of colored spans:
//! - `Run`: a half-open range over a line
//! - `Color`: an optional foreground/background pair
//! - `Markup`: a colored run with a priority
//! - `Marker`: a regex rule producing markups for a line
//! - `reflow`: resolution of overlapping markups by priority

mod color;
mod marker;
#[allow(clippy::module_inception)]
mod markup;
mod reflow;
mod run;

pub use color::Color;
pub use marker::RuleSet;
pub use markup::Markup;
