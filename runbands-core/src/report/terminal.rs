use std::io::{self, Write};

use colored::Colorize;

use super::{ReportError, Reporter, VariantReport};
use crate::compare::Verdict;

/// A reporter that prints the verdict table to the terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalReporter {
    /// Whether to use colors in output (defaults to true).
    use_colors: bool,
}

impl TerminalReporter {
    /// Create a new terminal reporter with default settings.
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a terminal reporter with color output disabled.
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    fn verdict_text(report: &VariantReport) -> &'static str {
        match report.comparison {
            None => "skipped",
            Some(comparison) => match comparison.verdict {
                Verdict::Better => "better",
                Verdict::Worse => "worse",
                Verdict::Inconclusive => "inconclusive",
            },
        }
    }

    /// Format the verdict column with appropriate coloring.
    fn format_verdict(&self, report: &VariantReport) -> String {
        let text = Self::verdict_text(report);
        if !self.use_colors {
            return text.to_string();
        }
        match report.comparison.map(|c| c.verdict) {
            Some(Verdict::Better) => text.green().bold().to_string(),
            Some(Verdict::Worse) => text.red().bold().to_string(),
            Some(Verdict::Inconclusive) => text.yellow().to_string(),
            None => text.dimmed().to_string(),
        }
    }

    fn format_net(value: Option<f64>) -> String {
        match value {
            Some(value) => format!("{:.2}", value),
            None => "-".to_string(),
        }
    }

    /// Print the table header.
    fn print_header(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer)?;
        let header = format!(
            "{:<20} {:<28} {:>12} {:>12} {:>14}",
            "Instance", "Variant", "Net gain", "Net loss", "Result"
        );
        if self.use_colors {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }
        writeln!(writer, "{}", "-".repeat(90))?;
        Ok(())
    }

    /// Print a single variant row.
    fn print_row(&self, writer: &mut impl Write, report: &VariantReport) -> io::Result<()> {
        let verdict = self.format_verdict(report);
        // Colored text carries escape codes; pad against the visible length.
        let padding = 14_usize.saturating_sub(Self::verdict_text(report).len());

        writeln!(
            writer,
            "{:<20} {:<28} {:>12} {:>12} {:>width$}{}",
            report.instance,
            report.label,
            Self::format_net(report.comparison.map(|c| c.net_gain)),
            Self::format_net(report.comparison.map(|c| c.net_loss)),
            "",
            verdict,
            width = padding,
        )?;
        Ok(())
    }

    /// Print the summary footer.
    fn print_summary(
        &self,
        writer: &mut impl Write,
        results: &[VariantReport],
    ) -> io::Result<()> {
        let mut better = 0;
        let mut worse = 0;
        let mut inconclusive = 0;
        let mut skipped = 0;

        for report in results {
            match report.comparison.map(|c| c.verdict) {
                Some(Verdict::Better) => better += 1,
                Some(Verdict::Worse) => worse += 1,
                Some(Verdict::Inconclusive) => inconclusive += 1,
                None => skipped += 1,
            }
        }

        writeln!(writer)?;
        writeln!(writer, "{}", "-".repeat(90))?;

        let summary_label = "Summary:";
        if self.use_colors {
            write!(writer, "{} ", summary_label.bold())?;
        } else {
            write!(writer, "{} ", summary_label)?;
        }

        let better_text = format!("{} better", better);
        let worse_text = format!("{} worse", worse);
        let inconclusive_text = format!("{} inconclusive", inconclusive);
        let skipped_text = format!("{} skipped", skipped);

        if self.use_colors {
            writeln!(
                writer,
                "{}, {}, {}, {}",
                better_text.green(),
                worse_text.red(),
                inconclusive_text.yellow(),
                skipped_text.dimmed()
            )?;
        } else {
            writeln!(
                writer,
                "{}, {}, {}, {}",
                better_text, worse_text, inconclusive_text, skipped_text
            )?;
        }

        writeln!(writer)?;
        Ok(())
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, results: &[VariantReport]) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut writer = stdout.lock();

        self.print_header(&mut writer)?;

        for report in results {
            self.print_row(&mut writer, report)?;
        }

        self.print_summary(&mut writer, results)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Comparison, Verdict};

    fn make_report(
        instance: &str,
        label: &str,
        comparison: Option<(f64, f64, Verdict)>,
    ) -> VariantReport {
        VariantReport {
            instance: instance.to_string(),
            label: label.to_string(),
            comparison: comparison.map(|(net_gain, net_loss, verdict)| Comparison {
                net_gain,
                net_loss,
                verdict,
            }),
        }
    }

    #[test]
    fn test_format_net() {
        assert_eq!(TerminalReporter::format_net(Some(12.345)), "12.35");
        assert_eq!(TerminalReporter::format_net(None), "-");
    }

    #[test]
    fn test_verdict_text() {
        let better = make_report("i", "v", Some((0.0, 20.0, Verdict::Better)));
        let skipped = make_report("i", "v", None);

        assert_eq!(TerminalReporter::verdict_text(&better), "better");
        assert_eq!(TerminalReporter::verdict_text(&skipped), "skipped");
    }

    #[test]
    fn test_report_to_buffer() {
        let reporter = TerminalReporter::without_colors();
        let results = vec![
            make_report(
                "seed-1",
                "duplicate-bits 3",
                Some((0.0, 40.0, Verdict::Better)),
            ),
            make_report(
                "seed-1",
                "dead-bit-insertion 8",
                Some((25.0, 0.0, Verdict::Worse)),
            ),
            make_report(
                "seed-1",
                "mix-information 2",
                Some((3.0, 4.0, Verdict::Inconclusive)),
            ),
            make_report("seed-2", "duplicate-bits 3", None),
        ];

        let mut buffer = Vec::new();
        reporter.print_header(&mut buffer).unwrap();
        for report in &results {
            reporter.print_row(&mut buffer, report).unwrap();
        }
        reporter.print_summary(&mut buffer, &results).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Instance"));
        assert!(output.contains("Variant"));
        assert!(output.contains("duplicate-bits 3"));
        assert!(output.contains("40.00"));
        assert!(output.contains("Summary:"));
        assert!(output.contains("1 better"));
        assert!(output.contains("1 worse"));
        assert!(output.contains("1 inconclusive"));
        assert!(output.contains("1 skipped"));
    }

    #[test]
    fn test_report_with_empty_results() {
        let reporter = TerminalReporter::without_colors();
        let result = reporter.report(&[]);
        assert!(result.is_ok());
    }
}
