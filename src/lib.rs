//! IPL Insights - descriptive statistics over IPL match and ball-by-ball data.
//!
//! The [`data`] module loads and normalizes the two source tables into a [`data::Dataset`];
//! [`stats`] holds the metric functions that read it. [`gui`] and [`charts`] form the desktop
//! dashboard on top.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;
