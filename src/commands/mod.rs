pub mod fetch;
pub mod generate;
pub mod misc;

pub use fetch::fetch_metadata;
pub use generate::generate_site;
pub use misc::generate_completions;
