//! Grammar tests over hand-written token streams.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

mod errors;
mod modules;
mod properties;
mod statements;
