use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    composition::render::FrameOutput,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{MotifError, MotifResult},
};

/// Batch evaluation options for [`Composition::render_frames`].
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Evaluate frames on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames handed to the pool per batch (0 is treated as 1).
    pub chunk_size: usize,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

impl Composition {
    /// Render every frame in `range`, ordered by frame index.
    ///
    /// Parallel and sequential runs produce identical outputs.
    #[tracing::instrument(skip(self, threading), fields(id = %self.id(), parallel = threading.parallel))]
    pub fn render_frames(
        &self,
        range: FrameRange,
        threading: &RenderThreading,
    ) -> MotifResult<Vec<FrameOutput>> {
        if range.is_empty() {
            return Err(MotifError::config("render range must be non-empty"));
        }
        if range.end.0 > self.duration_in_frames() {
            return Err(MotifError::range(format!(
                "render range end {} exceeds duration {}",
                range.end.0,
                self.duration_in_frames()
            )));
        }

        if !threading.parallel {
            return (range.start.0..range.end.0)
                .map(|f| self.render_frame(FrameIndex(f)))
                .collect();
        }

        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);

        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
            tracing::debug!(chunk_start, chunk_end, "rendering chunk");
            let mut frames = pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|f| self.render_frame(FrameIndex(f)))
                    .collect::<MotifResult<Vec<_>>>()
            })?;
            out.append(&mut frames);
            chunk_start = chunk_end;
        }

        Ok(out)
    }

    /// Render the whole composition.
    pub fn render_all(&self, threading: &RenderThreading) -> MotifResult<Vec<FrameOutput>> {
        let range = FrameRange::new(FrameIndex(0), FrameIndex(self.duration_in_frames()))?;
        self.render_frames(range, threading)
    }
}

fn build_thread_pool(threads: Option<usize>) -> MotifResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MotifError::config(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MotifError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/composition/pipeline.rs"]
mod tests;
