//! Icon resolution: fetching, memoization, and markup rendering.
//!
//! The [`IconService`] resolves icon names to renderable SVG markup through
//! an injected [`SvgSource`], fetching each name from the source at most
//! once per successful resolution.

pub mod service;
pub mod source;
pub mod svg;

pub use service::IconService;
pub use source::{HttpSource, SourceError, SvgSource};
pub use svg::{parse_svg, placeholder, render_svg, RenderStyle, SvgDocument};
