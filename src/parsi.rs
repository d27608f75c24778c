use thiserror::Error;

use crate::{
    context::{Context, UrlDecoding},
    process::{DynamicProcess, Process},
    profile::{Profile, ProfileError},
    stage::{Stage, StageError},
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum ParsiError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// A configured conversion pipeline.
///
/// ```
/// use parsi::{Parsi, FA_TO_EN_NUMBERS, HalfSpace};
///
/// let parsi = Parsi::builder()
///     .add_stage(FA_TO_EN_NUMBERS)
///     .add_stage(HalfSpace)
///     .build();
/// assert_eq!(parsi.normalize("ما ۳ بار رفته ایم").unwrap(), "ما 3 بار رفته\u{200C}ایم");
/// ```
pub struct Parsi {
    ctx: Context,
    pipeline: DynamicProcess,
}

impl Parsi {
    pub fn builder() -> ParsiBuilder {
        ParsiBuilder::default()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn normalize<'a>(&self, text: impl Into<Cow<'a, str>>) -> Result<Cow<'a, str>, ParsiError> {
        let results = self.pipeline.process(text.into(), &self.ctx)?;
        Ok(results)
    }

    /// Run `profile` instead of the configured stages, with this instance's context.
    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, ParsiError> {
        let results = profile.run(text.into(), &self.ctx)?;
        Ok(results)
    }
}

#[derive(Default)]
pub struct ParsiBuilder {
    ctx: Context,
    stages: DynamicProcess,
}

impl ParsiBuilder {
    /// Character emitted by the half-space rules (default U+200C).
    pub fn joiner(mut self, joiner: char) -> Self {
        self.ctx = self.ctx.with_joiner(joiner);
        self
    }

    pub fn url_decoding(mut self, policy: UrlDecoding) -> Self {
        self.ctx = self.ctx.with_url_decoding(policy);
        self
    }

    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages = self.stages.push(stage);
        self
    }

    pub fn build(self) -> Parsi {
        Parsi {
            ctx: self.ctx,
            pipeline: self.stages,
        }
    }
}
