use super::config::RunConfig;
use super::progress::ProgressReporter;

/// Collaborators and settings shared by every molecule of a run.
///
/// The simulation itself is not part of the context; it is built per molecule and
/// lent to the report workflow separately.
#[derive(Clone, Copy)]
pub struct ReportContext<'a, M, A, W> {
    pub minimizer: &'a M,
    pub aligner: &'a A,
    pub writer: &'a W,
    pub config: &'a RunConfig,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a, M, A, W> ReportContext<'a, M, A, W> {
    pub fn new(
        minimizer: &'a M,
        aligner: &'a A,
        writer: &'a W,
        config: &'a RunConfig,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            minimizer,
            aligner,
            writer,
            config,
            reporter,
        }
    }
}
