//! Rendering of a [`jobfeed_core::RunOutput`] into the static site: a JSON
//! feed and a single HTML page.

pub mod error;
pub mod html;
pub mod text;
pub mod write;

pub use error::ReportError;
pub use html::{render_html, IndexView, JobCard, SalaryBadge};
pub use write::{render_json, write_report, ReportPaths};
