/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   URL / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, payload bounds, site list
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + payload predicates → matching records
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod site;

#[cfg(test)]
pub mod fixtures;
