use crate::core::store::LoadReport;
use std::io::{self, Write};

/// Writes one line per recovered load issue, in the order they occurred.
pub fn report_load_issues(report: &LoadReport, mut out: impl Write) -> io::Result<()> {
    for issue in &report.issues {
        writeln!(out, "{}", issue.user_friendly_message())?;
    }
    Ok(())
}
