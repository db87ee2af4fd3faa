//! Markdown view of a report, shared by the console and the CI step summary.

use std::io::{self, Write};

use chrono::SecondsFormat;

use crate::report::Report;

pub fn render_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "### 📊 Test Metrics")?;

    let Some(summary) = &report.summary else {
        writeln!(out, "⚠️ No summary data available")?;
        return Ok(());
    };

    writeln!(out, "- **Overall Status**: {}", summary.overall_status)?;
    writeln!(out, "- **Success Rate**: {}", summary.success_rate)?;
    writeln!(out, "- **Duration**: {}s", summary.duration_seconds)?;

    writeln!(out)?;
    writeln!(out, "#### 📋 Detailed Steps")?;
    for step in &report.steps {
        writeln!(
            out,
            "- **{}**: {} _({})_",
            step.phase,
            step.status,
            step.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
    }
    Ok(())
}

/// Convenience wrapper around [`render_report`] for in-memory use.
pub fn render_report_to_string(report: &Report) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_report(report, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
