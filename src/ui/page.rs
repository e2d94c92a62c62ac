/// The single dashboard page. It fetches `/api/layout` and `/api/dependencies`,
/// renders the controls, and calls `/api/update` for every output that depends
/// on a changed input.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");
