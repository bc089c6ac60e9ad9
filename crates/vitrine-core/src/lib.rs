#![forbid(unsafe_code)]

//! Core: pixel geometry, input events, throttling, and animation timing.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod throttle;
