//! Presentation layer: page layout, chart specifications, and the chart
//! updaters that turn the dataset into charts.

pub mod chart;
pub mod layout;
pub mod page;
pub mod pie;
pub mod scatter;
