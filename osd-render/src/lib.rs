//! The hover-driven data-binding pipeline for the sounding dashboard.
//!
//! A user interaction (map hover, slider or checkbox change) flows through
//! three pure stages:
//!
//! 1. [`router`] resolves the active station and current control values
//!    from the framework-held interaction state.
//! 2. [`dispatch`] names exactly the views affected by the changed input.
//! 3. [`map`] and [`profile_chart`] turn the station index or a freshly
//!    parsed profile, plus the control values, into serializable chart
//!    specs for the JS chart layer.
//!
//! Nothing in this crate retains state between events or touches the DOM.

pub mod dispatch;
pub mod map;
pub mod profile_chart;
pub mod router;
