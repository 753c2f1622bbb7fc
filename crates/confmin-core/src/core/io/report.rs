use crate::core::models::energy::EnergyRow;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const REPORT_HEADER: [&str; 4] = [
    "Conformer",
    "Initial PE (kcal/mol)",
    "Minimized PE (kcal/mol)",
    "RMS between initial and minimized conformer (Angstrom)",
];

/// Number of decimals shown for energies and RMSD in reports and progress output.
pub const REPORT_DECIMALS: usize = 3;

/// Formats a row into its four report fields, rounding values to [`REPORT_DECIMALS`].
pub fn format_row(row: &EnergyRow) -> [String; 4] {
    [
        row.conformer_index.to_string(),
        format!("{:.*}", REPORT_DECIMALS, row.initial_energy),
        format!("{:.*}", REPORT_DECIMALS, row.minimized_energy),
        format!("{:.*}", REPORT_DECIMALS, row.rmsd),
    ]
}

/// Writes the energy report as comma-separated text.
///
/// The first line is [`REPORT_HEADER`], followed by one line per row in the given order.
/// Fields are joined by a single comma and never quoted; lines end with `\n`.
///
/// # Errors
///
/// Returns a [`csv::Error`] if writing to `writer` fails.
pub fn write_report<W: Write>(rows: &[EnergyRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;
    for row in rows {
        csv_writer.write_record(format_row(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the energy report to `path`, replacing any existing file.
pub fn write_report_to_path(rows: &[EnergyRow], path: &Path) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_report(rows, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rows() -> Vec<EnergyRow> {
        vec![
            EnergyRow {
                conformer_index: 1,
                initial_energy: 12.34567,
                minimized_energy: -3.2,
                rmsd: 0.123449,
            },
            EnergyRow {
                conformer_index: 2,
                initial_energy: 8.0,
                minimized_energy: -4.00049,
                rmsd: 1.0,
            },
        ]
    }

    fn render(rows: &[EnergyRow]) -> String {
        let mut buffer = Vec::new();
        write_report(rows, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn format_row_rounds_to_three_decimals() {
        let fields = format_row(&rows()[0]);
        assert_eq!(fields, ["1", "12.346", "-3.200", "0.123"].map(String::from));
    }

    #[test]
    fn report_starts_with_fixed_header() {
        let text = render(&rows());
        let first_line = text.lines().next().unwrap();
        assert_eq!(
            first_line,
            "Conformer,Initial PE (kcal/mol),Minimized PE (kcal/mol),RMS between initial and minimized conformer (Angstrom)"
        );
    }

    #[test]
    fn report_has_one_line_per_row_with_four_fields() {
        let text = render(&rows());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,12.346,-3.200,0.123");
        assert_eq!(lines[2], "2,8.000,-4.000,1.000");
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 4);
        }
        assert!(!text.contains('"'));
        assert!(!text.contains('\r'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn empty_report_contains_only_header() {
        let text = render(&[]);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn write_report_to_path_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ethanol.csv");
        std::fs::write(&path, "stale content that is much longer than the new report\n".repeat(20))
            .unwrap();

        write_report_to_path(&rows()[..1], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("stale"));
    }

    #[test]
    fn write_report_to_path_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("ethanol.csv");
        assert!(write_report_to_path(&rows(), &path).is_err());
    }
}
