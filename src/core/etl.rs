use crate::core::{FileReport, Pipeline, RunSummary};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Processes one candidate. Missing files and files without a single valid
    /// row are reported, not treated as errors.
    pub fn process(&self, candidate: &str) -> Result<FileReport> {
        let rows = match self.pipeline.extract(candidate)? {
            Some(rows) => rows,
            None => {
                return Ok(FileReport::NotFound {
                    input: candidate.to_string(),
                })
            }
        };

        let result = self.pipeline.transform(rows);
        let input = self.pipeline.location(candidate);

        if result.rows.is_empty() {
            return Ok(FileReport::NoValidData {
                input,
                skipped: result.skipped,
            });
        }

        let output_name = self.pipeline.output_name(candidate);
        if self.dry_run {
            return Ok(FileReport::DryRun {
                input,
                output: self.pipeline.location(&output_name),
                rows: result.rows.len(),
                skipped: result.skipped,
            });
        }

        let output = self.pipeline.load(&output_name, &result)?;
        Ok(FileReport::Converted {
            input,
            output,
            rows: result.rows.len(),
            skipped: result.skipped,
        })
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.run_to(&mut std::io::stdout().lock())
    }

    /// Like [`run`](Self::run), with the console status lines written to `out`.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        writeln!(out, "Converting CSV files to CaromStats format...\n")?;
        if self.dry_run {
            tracing::info!("🔍 DRY RUN MODE - no files will be written");
        }

        let mut summary = RunSummary::default();

        for candidate in self.pipeline.candidates() {
            let report = self.process(candidate)?;

            match &report {
                FileReport::Converted { output, rows, .. } => {
                    tracing::info!("Wrote {} rows to {}", rows, output)
                }
                FileReport::DryRun { rows, .. } => {
                    tracing::info!("{} rows would be written for {}", rows, candidate)
                }
                FileReport::NoValidData { skipped, .. } => {
                    tracing::warn!("No valid rows in {} ({} skipped)", candidate, skipped)
                }
                FileReport::NotFound { .. } => tracing::info!("Skipping missing file {}", candidate),
            }
            writeln!(out, "{}", report)?;

            summary.files.push(report);
        }

        writeln!(out, "\n✓ Conversion complete!")?;
        tracing::debug!(
            "Converted {} files, {} rows written, {} rows skipped, {} files missing",
            summary.files_converted(),
            summary.rows_written(),
            summary.rows_skipped(),
            summary.files_missing()
        );

        Ok(summary)
    }
}

/// Writes the run summary as pretty-printed JSON.
pub fn write_report<P: AsRef<Path>>(summary: &RunSummary, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
