//! Contributor credits and release note rendering.

pub mod contributors;
pub mod report;

pub use contributors::{contributor_list, parse_co_authors};
pub use report::{assemble_report, render_entry, render_unresolved};
