//! Writing the JSON feed and HTML page to the output directory.

use std::path::{Path, PathBuf};

use jobfeed_core::{DisplayClock, RunOutput};

use crate::error::ReportError;
use crate::html::render_html;

/// Where [`write_report`] put the artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub html: PathBuf,
}

impl ReportPaths {
    /// `<out_dir>/data/jobs.json` and `<out_dir>/index.html`.
    #[must_use]
    pub fn under(out_dir: &Path) -> Self {
        Self {
            json: out_dir.join("data").join("jobs.json"),
            html: out_dir.join("index.html"),
        }
    }
}

/// Pretty-printed JSON mirroring [`RunOutput`]; non-ASCII text is kept as is.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if serialization fails.
pub fn render_json(output: &RunOutput) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Renders both artifacts and overwrites them under `out_dir`, creating
/// directories as needed.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if a directory or file cannot be written,
/// [`ReportError::Json`] if serialization fails and
/// [`ReportError::Template`] if the page fails to render.
pub fn write_report(
    output: &RunOutput,
    clock: &DisplayClock,
    out_dir: &Path,
) -> Result<ReportPaths, ReportError> {
    let paths = ReportPaths::under(out_dir);

    let json = render_json(output)?;
    let html = render_html(output, clock)?;

    write_file(&paths.json, &json)?;
    write_file(&paths.html, &html)?;

    tracing::info!(
        json = %paths.json.display(),
        html = %paths.html.display(),
        kept = output.counts.kept,
        "report written"
    );
    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)
}
