use crate::core::sampler::Sampler;
use crate::core::{DrawResult, RandomSource, Storage};
use crate::utils::error::{DrawError, Result};
use std::io::Write;

/// Number of draws in one batch.
pub const DRAW_COUNT: usize = 10;

/// Outcome of [`PrizeDraw::draw_and_save`].
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<DrawResult>,
    /// Where the results were persisted, if saving succeeded.
    pub saved_to: Option<String>,
    /// Set when the output resource could not be opened or written.
    pub write_error: Option<DrawError>,
}

impl BatchReport {
    pub fn is_saved(&self) -> bool {
        self.saved_to.is_some()
    }
}

pub struct PrizeDraw<R: RandomSource> {
    sampler: Sampler<R>,
}

impl<R: RandomSource> PrizeDraw<R> {
    pub fn new(sampler: Sampler<R>) -> Self {
        Self { sampler }
    }

    /// Runs [`DRAW_COUNT`] draws, echoing each line to `display` as it is
    /// produced and writing the same lines to `storage`.
    ///
    /// A storage failure does not stop the batch: the remaining draws are
    /// still displayed, the failure is reported on `errors` and returned in
    /// the report. Lines already shown are never retracted.
    pub fn draw_and_save<S, D, E>(
        &mut self,
        storage: &S,
        display: &mut D,
        errors: &mut E,
    ) -> Result<BatchReport>
    where
        S: Storage,
        D: Write,
        E: Write,
    {
        let location = storage.location().to_string();
        let mut write_error = None;

        let mut sink = match storage.create() {
            Ok(writer) => Some(writer),
            Err(e) => {
                tracing::error!("❌ Could not open {}: {}", location, e);
                write_error = Some(e);
                None
            }
        };

        let mut results = Vec::with_capacity(DRAW_COUNT);
        for sequence_number in 1..=DRAW_COUNT {
            let item = self.sampler.draw()?;
            let result = DrawResult::new(sequence_number, item.name.as_str());
            tracing::debug!("🎲 Draw {} picked item {} ({})", sequence_number, item.id, item.name);

            writeln!(display, "{}", result)?;

            let failed = match sink.as_mut() {
                Some(writer) => writeln!(writer, "{}", result).err(),
                None => None,
            };
            if let Some(source) = failed {
                tracing::error!("❌ Write to {} failed at draw {}: {}", location, sequence_number, source);
                sink = None;
                write_error = Some(DrawError::OutputWriteError {
                    path: location.clone(),
                    source,
                });
            }

            results.push(result);
        }

        if let Some(mut writer) = sink.take() {
            if let Err(source) = writer.flush() {
                write_error = Some(DrawError::OutputWriteError {
                    path: location.clone(),
                    source,
                });
            }
        }

        let saved_to = match &write_error {
            None => {
                tracing::info!("📁 Results saved to: {}", location);
                writeln!(display, "Results saved to file: {}", location)?;
                Some(location)
            }
            Some(e) => {
                writeln!(errors, "Error writing results file: {}", e)?;
                None
            }
        };

        Ok(BatchReport {
            results,
            saved_to,
            write_error,
        })
    }
}
