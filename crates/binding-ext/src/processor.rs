//! Round-based dispatch of processing steps.
//!
//! The compiler runs in rounds: every round may produce sources that feed the
//! next one. A [`StepDispatcher`] drives an ordered list of [`ProcessingStep`]s
//! through those rounds. Each step runs once per round until it reports itself
//! done, and every step gets a final [`ProcessingStep::on_processing_over`] call
//! on the last round, which is where multi-round steps emit their output.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::writer::SourceWriter;

/// Error raised while dispatching steps or writing their output.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// Writing a generated file failed.
    #[error("failed to write `{canonical_name}`: {source}")]
    Io {
        canonical_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Build info payload could not be decoded.
    #[error("invalid build info: {0}")]
    BuildInfo(#[from] serde_json::Error),

    /// Canonical name that cannot be mapped to a source file.
    #[error("invalid canonical name `{0}`")]
    InvalidCanonicalName(String),

    /// A processing step gave up.
    #[error("step `{step}` failed: {message}")]
    Step { step: String, message: String },
}

impl ProcessError {
    pub fn step(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Step {
            step: step.into(),
            message: message.into(),
        }
    }
}

/// Build information attached to a compilation.
///
/// Rounds without it belong to a compilation that does not use data binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub build_id: String,
}

impl BuildInfo {
    pub fn new(build_id: impl Into<String>) -> Self {
        Self {
            build_id: build_id.into(),
        }
    }

    /// Decodes `{"buildId": "..."}`.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// One compilation round as seen by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    pub build_info: Option<BuildInfo>,
    pub processing_over: bool,
}

impl Round {
    pub fn new(build_info: Option<BuildInfo>) -> Self {
        Self {
            build_info,
            processing_over: false,
        }
    }

    /// Marks this as the final round.
    pub fn final_round(mut self) -> Self {
        self.processing_over = true;
        self
    }
}

/// A unit of work that may need several rounds to finish.
pub trait ProcessingStep {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Invoked in each round until it returns `Ok(true)`.
    fn on_handle_step(
        &mut self,
        round: &Round,
        build_info: &BuildInfo,
        writer: &mut dyn SourceWriter,
    ) -> Result<bool>;

    /// Invoked once on the final round, whether or not the step finished.
    fn on_processing_over(
        &mut self,
        round: &Round,
        build_info: &BuildInfo,
        writer: &mut dyn SourceWriter,
    ) -> Result<()>;
}

struct StepSlot {
    step: Box<dyn ProcessingStep>,
    done: bool,
}

/// Runs steps in registration order and shares one writer between them.
pub struct StepDispatcher<W> {
    steps: Vec<StepSlot>,
    writer: W,
}

impl<W: SourceWriter> StepDispatcher<W> {
    pub fn new(writer: W) -> Self {
        Self {
            steps: Vec::new(),
            writer,
        }
    }

    pub fn with_step(mut self, step: impl ProcessingStep + 'static) -> Self {
        self.steps.push(StepSlot {
            step: Box::new(step),
            done: false,
        });
        self
    }

    /// Processes one round and returns whether every step is done.
    ///
    /// A round without build info runs nothing and reports `false`. Steps that
    /// are not done all run, even after an earlier one reported more work.
    pub fn process(&mut self, round: &Round) -> Result<bool> {
        let Some(build_info) = round.build_info.as_ref() else {
            log::warn!("no build info in round, skipping {} step(s)", self.steps.len());
            return Ok(false);
        };

        let mut done = true;
        for slot in &mut self.steps {
            if !slot.done {
                log::debug!("running step {}", slot.step.name());
                slot.done = slot
                    .step
                    .on_handle_step(round, build_info, &mut self.writer)?;
            }
            done = slot.done && done;
        }

        if round.processing_over {
            for slot in &mut self.steps {
                log::debug!("processing over for step {}", slot.step.name());
                slot.step
                    .on_processing_over(round, build_info, &mut self.writer)?;
            }
        }

        log::debug!("round processed, build {} done={done}", build_info.build_id);
        Ok(done)
    }

    pub fn is_done(&self) -> bool {
        self.steps.iter().all(|slot| slot.done)
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|slot| slot.step.name()).collect()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
