use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config;
use crate::format::{DurationFormatter, FormatOptions, parse_seconds};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub formatted: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

pub struct App {
    formatter: DurationFormatter,
}

impl App {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            formatter: DurationFormatter::new(options),
        }
    }

    /// Builds the app from the first configuration file found, falling back
    /// to defaults when none exists or it cannot be loaded.
    pub fn from_config() -> Self {
        let options = match config::load_settings() {
            Ok(Some(settings)) => {
                info!(path = %settings.path.display(), "loaded configuration");
                settings.options
            }
            Ok(None) => FormatOptions::default(),
            Err(err) => {
                let reason = format!("{err:#}");
                warn!(error = %reason, "ignoring configuration, using defaults");
                FormatOptions::default()
            }
        };
        Self::new(options)
    }

    pub fn formatter(&self) -> &DurationFormatter {
        &self.formatter
    }

    /// Formats one value per input, writing results to `out` and failures
    /// to `errors`. Blank inputs are skipped.
    pub fn run<I, S, W, E>(&self, inputs: I, out: &mut W, errors: &mut E) -> Result<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();
        for input in inputs {
            let input = input.as_ref();
            if input.trim().is_empty() {
                continue;
            }

            match parse_seconds(input).and_then(|secs| self.formatter.format(secs)) {
                Ok(rendered) => {
                    writeln!(out, "{rendered}").context("failed to write formatted duration")?;
                    summary.formatted += 1;
                }
                Err(err) => {
                    warn!(input = input.trim(), error = %err, "skipping value");
                    writeln!(errors, "hms_fmt: {err}").context("failed to write error report")?;
                    summary.failed += 1;
                }
            }
        }
        out.flush().context("failed to flush output")?;
        Ok(summary)
    }

    pub fn run_lines<R, W, E>(&self, reader: R, out: &mut W, errors: &mut E) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("failed to read durations from input")?;
        self.run(lines, out, errors)
    }
}
