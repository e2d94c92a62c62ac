//! SpaceX launch records dashboard.
//!
//! Loads the launch table once, then serves a page whose two charts are
//! recomputed on every dropdown / slider change:
//!
//! ```text
//!  loader ──► LaunchDataset ──► layout
//!                  │
//!                  ▼
//!          callback registry ──► pie / scatter updaters ──► ChartSpec
//!                  ▲
//!                  │
//!             HTTP api  ◄── browser
//! ```

pub mod api;
pub mod callbacks;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
