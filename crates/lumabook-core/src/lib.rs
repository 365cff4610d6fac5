//! Platform-agnostic core of the Luma picture-book viewer.
//!
//! The crate owns all navigational state (splash vs. book, current slide,
//! in-flight page turn) and exposes a polled `tick(now_ms)` runtime. Hosts
//! feed raw device events through an [`input::InputProvider`] and render
//! whatever [`render::Screen`] describes; asset loading, styling, and the
//! fullscreen mechanism stay on the host side.
#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod deck;
pub mod fullscreen;
pub mod input;
pub mod render;
