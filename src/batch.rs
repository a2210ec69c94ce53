/*!
 * Batch chapter refinement.
 *
 * Refines a sequence of chapters through one [`Refiner`] and feeds each
 * chapter's output into an owned [`ContextTracker`], with a cooperative
 * pacing delay between chapters to bound load on the analyzer backend.
 *
 * Chapters are processed strictly in input order and tracker updates are
 * serialized through the orchestrator, preserving the tracker's single-writer
 * discipline. One chapter's refinement failure is absorbed by the refiner's
 * fail-open boundary and never aborts the batch; a tracker annotation failure
 * does abort, since dropping chapter context would corrupt the bookkeeping.
 */

use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::Mutex;

use crate::context::ContextTracker;
use crate::errors::AnalyzerError;
use crate::refine::{GlossaryEntry, Refiner, RefinementResult};

/// Default pause between chapters.
const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// One chapter handed to the batch orchestrator.
#[derive(Debug, Clone)]
pub struct ChapterInput {
    /// Caller-assigned chapter number, forwarded to the tracker
    pub chapter_number: u32,
    /// Raw machine-translated chapter text
    pub text: String,
}

impl ChapterInput {
    /// Create a new chapter input.
    pub fn new(chapter_number: u32, text: impl Into<String>) -> Self {
        Self {
            chapter_number,
            text: text.into(),
        }
    }
}

/// Outcome of refining one chapter within a batch.
#[derive(Debug, Clone)]
pub struct ChapterOutcome {
    /// The chapter number as submitted
    pub chapter_number: u32,
    /// The refinement result, possibly from the fail-open error path
    pub result: RefinementResult,
}

/// Orchestrates multi-chapter refinement with context tracking.
pub struct BatchRefiner {
    refiner: Refiner,
    tracker: Arc<Mutex<ContextTracker>>,
    pacing: Duration,
}

impl BatchRefiner {
    /// Create a batch refiner that owns the given tracker.
    pub fn new(refiner: Refiner, tracker: ContextTracker) -> Self {
        Self {
            refiner,
            tracker: Arc::new(Mutex::new(tracker)),
            pacing: DEFAULT_PACING,
        }
    }

    /// Override the pacing delay between chapters.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Handle to the tracker for querying suggestions and reports.
    ///
    /// Readers may hold this alongside the orchestrator; mutation stays with
    /// the batch loop.
    pub fn tracker(&self) -> Arc<Mutex<ContextTracker>> {
        Arc::clone(&self.tracker)
    }

    /// Refine all chapters in input order.
    ///
    /// Each chapter's refined text (the original text when refinement fails
    /// open) updates the tracker before the next chapter starts. Returns an
    /// error only when a tracker annotation fails.
    pub async fn refine_chapters(
        &self,
        chapters: &[ChapterInput],
        glossary: &[GlossaryEntry],
    ) -> Result<Vec<ChapterOutcome>, AnalyzerError> {
        let mut outcomes = Vec::with_capacity(chapters.len());

        for (index, chapter) in chapters.iter().enumerate() {
            info!(
                "Processing chapter {} ({} of {})",
                chapter.chapter_number,
                index + 1,
                chapters.len()
            );

            let result = self.refiner.refine(&chapter.text, glossary).await;

            {
                let mut tracker = self.tracker.lock().await;
                tracker
                    .update_context(&result.refined_text, chapter.chapter_number)
                    .await?;
            }

            outcomes.push(ChapterOutcome {
                chapter_number: chapter.chapter_number,
                result,
            });

            if index + 1 < chapters.len() && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        info!("Batch refinement completed: {} chapter(s)", outcomes.len());
        Ok(outcomes)
    }
}
