//! Rendering of prime reports for display

use crate::error::Result;
use crate::report::PrimeReport;

/// Output formats supported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    /// One line per report
    #[default]
    Text,
    /// A JSON array of report objects
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render reports in the requested format
///
/// With `count_only`, text lines read `bound=<B> <algorithm>: count=<n>` and
/// JSON objects omit the `primes` array.
pub fn render(reports: &[PrimeReport], format: OutputFormat, count_only: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports, count_only)),
        OutputFormat::Json => render_json(reports, count_only),
    }
}

fn render_text(reports: &[PrimeReport], count_only: bool) -> String {
    let mut out = String::new();
    for report in reports {
        let line = if count_only {
            format!(
                "bound={} {}: count={}\n",
                report.bound, report.algorithm, report.count
            )
        } else {
            format!("{report}\n")
        };
        out.push_str(&line);
    }
    out
}

#[cfg(feature = "serde")]
fn render_json(reports: &[PrimeReport], count_only: bool) -> Result<String> {
    let mut value = serde_json::to_value(reports)?;
    if count_only {
        if let Some(entries) = value.as_array_mut() {
            for entry in entries.iter_mut().filter_map(|entry| entry.as_object_mut()) {
                entry.remove("primes");
            }
        }
    }
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(not(feature = "serde"))]
fn render_json(_reports: &[PrimeReport], _count_only: bool) -> Result<String> {
    Err(crate::error::RunError::UnsupportedFormat(OutputFormat::Json))
}
