use crate::{
    layout::{self, LayoutError, PlacedItem, Strategy, Surface},
    session::{FetchTicket, SessionManager},
    types::MusicDatum,
};

/// A complete, renderable 2D scene description.
#[derive(Debug, Clone, Copy)]
pub struct Scene2D<'a> {
    pub surface: Surface,
    pub background: [u8; 3],
    pub data: &'a [MusicDatum],
    pub items: &'a [PlacedItem],
}

/// Owns the current batch and its placements for one drawing surface.
///
/// Two ordering rules are enforced here rather than left to callers: a
/// resize arriving before the batch does never runs the layout engine on
/// partial data (placements stay empty until a complete batch is applied),
/// and a batch fetched under a stale session epoch is discarded instead of
/// repopulating state after logout. Placements are always recomputed in
/// full; there is no incremental patching.
pub struct SceneView {
    surface: Surface,
    strategy: Strategy,
    seed: u64,
    batch: Option<Vec<MusicDatum>>,
    placed: Vec<PlacedItem>,
}

impl SceneView {
    pub fn new(surface: Surface, strategy: Strategy, seed: u64) -> Self {
        SceneView {
            surface,
            strategy,
            seed,
            batch: None,
            placed: Vec::new(),
        }
    }

    /// Applies a fully fetched batch. Returns `Ok(false)` without touching
    /// any state when `ticket` is stale (the session was logged out or
    /// re-authenticated while the fetch was in flight).
    pub fn apply_batch(
        &mut self,
        session: &SessionManager,
        ticket: &FetchTicket,
        batch: Vec<MusicDatum>,
    ) -> Result<bool, LayoutError> {
        if !session.ticket_current(ticket) {
            return Ok(false);
        }

        self.batch = Some(batch);
        self.recompute()?;
        Ok(true)
    }

    /// Adopts a new surface size, recomputing placements from scratch when a
    /// complete batch is present. Safe to call redundantly; only the most
    /// recent size matters.
    pub fn resize(&mut self, surface: Surface) -> Result<(), LayoutError> {
        self.surface = surface;
        if self.batch.is_some() {
            self.recompute()?;
        }
        Ok(())
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn data(&self) -> &[MusicDatum] {
        self.batch.as_deref().unwrap_or(&[])
    }

    pub fn placed(&self) -> &[PlacedItem] {
        &self.placed
    }

    pub fn scene(&self, background: [u8; 3]) -> Scene2D<'_> {
        Scene2D {
            surface: self.surface,
            background,
            data: self.data(),
            items: &self.placed,
        }
    }

    fn recompute(&mut self) -> Result<(), LayoutError> {
        let n = self.batch.as_ref().map_or(0, Vec::len);
        self.placed = layout::place(n, self.surface, &self.strategy, self.seed)?;
        Ok(())
    }
}
