//! Shared Dioxus components and the JS bridge for the sounding dashboard.
//!
//! The Leaflet map and D3 profile charts live in `assets/js/*.js`,
//! embedded at compile time and driven through [`js_bridge`].

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
