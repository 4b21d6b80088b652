//! Utility functions.
//!
//! This module provides colour palettes, layout constants and clipboard
//! export.

pub mod clipboard;
pub mod colormaps;
pub mod layout_config;

pub use colormaps::ColorPalette;
pub use layout_config::LayoutConfig;
