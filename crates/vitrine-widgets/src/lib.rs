#![forbid(unsafe_code)]

//! Interaction controllers for a marketing page: the card-stack showcase,
//! scroll reveal, smooth anchor scroll, and scroll-state chrome.
//!
//! Controllers own their state as private fields, take widget-level input,
//! and report visual state snapshots for the host to apply. None of them
//! touch the outside world.

pub mod anchor;
pub mod chrome;
pub mod reveal;
pub mod showcase;
