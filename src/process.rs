//! Process abstraction
//! `ChainedProcess` is monomorphised – the compiler knows the concrete type of
//! every stage and inlines the whole chain. One-to-one stages run through
//! their `CharMapper` instead of `apply`.
//! `DynamicProcess` is the dynamic fallback used by the `Parsi` facade.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let current: Cow<'_, str> = self.previous.process(text, ctx)?;
        if !self.stage.needs_apply(&current, ctx)? {
            return Ok(current);
        }
        trace!(stage = self.stage.name(), bytes = current.len(), "applying stage");
        if let Some(mapper) = self.stage.as_char_mapper(ctx) {
            let mut out = String::with_capacity(current.len());
            out.extend(mapper.bind(&current, ctx));
            return Ok(Cow::Owned(out));
        }
        self.stage.apply(current, ctx)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage + Send + Sync>; 8]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx)? {
                continue;
            }
            trace!(stage = stage.name(), bytes = text.len(), "applying stage");
            text = stage.apply(text, ctx)?;
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{
        convert_numbers::{EN_TO_FA_NUMBERS, FA_TO_EN_NUMBERS},
        decode_url::DecodeUrl,
        half_space::HalfSpace,
        transliterate::{EN_TO_FA_CHARACTERS, FA_TO_EN_CHARACTERS},
    };

    #[test]
    fn empty_process_is_identity() {
        let input = "hello ۱۲۳";
        let out = EmptyProcess
            .process(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn chained_process_runs_in_order() {
        let chain = ChainedProcess {
            stage: EN_TO_FA_CHARACTERS,
            previous: ChainedProcess {
                stage: EN_TO_FA_NUMBERS,
                previous: EmptyProcess,
            },
        };
        let out = chain
            .process(Cow::Borrowed("salam 2"), &Context::default())
            .unwrap();
        assert_eq!(out, "سالام ۲");
    }

    #[test]
    fn chained_process_falls_back_to_apply_for_expanding_stage() {
        let chain = ChainedProcess {
            stage: FA_TO_EN_CHARACTERS,
            previous: EmptyProcess,
        };
        let out = chain
            .process(Cow::Borrowed("چای"), &Context::default())
            .unwrap();
        assert_eq!(out, "tshai");
    }

    #[test]
    fn dynamic_process_skips_untouched_stages() {
        let process = DynamicProcess::new()
            .push(FA_TO_EN_NUMBERS)
            .push(HalfSpace);
        let input = "plain ascii";
        let out = process
            .process(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert_eq!(process.len(), 2);
        assert_eq!(
            process.stage_names().collect::<Vec<_>>(),
            ["fa_to_en_numbers", "half_space"]
        );
    }

    #[test]
    fn dynamic_process_propagates_stage_errors() {
        let process = DynamicProcess::new().push(DecodeUrl).push(HalfSpace);
        let err = process
            .process(Cow::Borrowed("%C3%28"), &Context::default())
            .unwrap_err();
        assert!(matches!(err, StageError::InvalidUtf8 { .. }));
    }
}
