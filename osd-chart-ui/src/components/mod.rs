//! Reusable Dioxus RSX components for the sounding dashboard.

mod chart_container;
mod chart_header;
mod depth_axis_slider;
mod error_display;
mod loading_spinner;
mod map_style_controls;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use depth_axis_slider::DepthAxisSlider;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_style_controls::MapStyleControls;
