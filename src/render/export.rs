use std::io::Cursor;

use crate::{render::Canvas, warning};

/// The capture methods, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStrategy {
    /// Encode the live draw surface as-is.
    Direct,
    /// Re-rasterize the scene from scratch with placeholders only.
    Rerender,
}

impl std::fmt::Display for CaptureStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureStrategy::Direct => write!(f, "direct"),
            CaptureStrategy::Rerender => write!(f, "re-render"),
        }
    }
}

/// Why one capture strategy produced nothing usable.
#[derive(Debug)]
pub enum CaptureFailure {
    /// The surface never received a draw call.
    BlankSurface,
    /// PNG encoding failed or produced an empty buffer.
    Encode(String),
}

impl std::fmt::Display for CaptureFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureFailure::BlankSurface => write!(f, "surface is blank"),
            CaptureFailure::Encode(e) => write!(f, "encoding failed: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum CaptureError {
    /// Every strategy in the chain failed, each for the paired reason.
    Exhausted(Vec<(CaptureStrategy, CaptureFailure)>),
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let CaptureError::Exhausted(failures) = self;
        write!(f, "all capture strategies failed:")?;
        for (strategy, failure) in failures {
            write!(f, " [{}: {}]", strategy, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for CaptureError {}

fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, CaptureFailure> {
    if canvas.is_blank() {
        return Err(CaptureFailure::BlankSurface);
    }

    let mut bytes = Vec::new();
    canvas
        .image()
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| CaptureFailure::Encode(e.to_string()))?;

    if bytes.is_empty() {
        return Err(CaptureFailure::Encode("empty output".to_string()));
    }
    Ok(bytes)
}

/// Serializes the rendered scene to PNG, falling back through the strategy
/// chain.
///
/// `rerender` must rebuild the canvas from the scene description without any
/// remote content, the stand-in for when direct capture yields an empty
/// result. Returns the bytes together with the strategy that produced them.
pub fn capture_png<F>(canvas: &Canvas, rerender: F) -> Result<(Vec<u8>, CaptureStrategy), CaptureError>
where
    F: FnOnce() -> Canvas,
{
    let mut failures = Vec::new();

    match encode_png(canvas) {
        Ok(bytes) => return Ok((bytes, CaptureStrategy::Direct)),
        Err(failure) => {
            warning!("Direct capture failed ({}), re-rendering", failure);
            failures.push((CaptureStrategy::Direct, failure));
        }
    }

    let fallback = rerender();
    match encode_png(&fallback) {
        Ok(bytes) => Ok((bytes, CaptureStrategy::Rerender)),
        Err(failure) => {
            failures.push((CaptureStrategy::Rerender, failure));
            Err(CaptureError::Exhausted(failures))
        }
    }
}
