#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod filter;
pub mod rewrite;

pub use config::SiteConfig;
pub use filter::{AbsoluteUrls, FilterRegistry, TemplateFilter};
pub use rewrite::{absolute_urls, ASSET_MARKER};
