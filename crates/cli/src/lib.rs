//! Webfont kit CLI library.

pub mod cli;
