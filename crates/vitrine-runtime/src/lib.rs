#![forbid(unsafe_code)]

//! Page controller runtime.
//!
//! The host constructs a [`page::Page`] once from the structural layout of
//! the document, then feeds it discrete input events and clock ticks. The
//! page owns every interaction controller and hands back [`page::Effect`]s
//! for the host to apply. One cooperative loop, no shared state.

pub mod diagnostics;
pub mod page;

pub use page::{Effect, Page, PageConfig, PageLayout, ShowcaseLayout};
