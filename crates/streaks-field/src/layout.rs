//! Grid layout engine: centered grid minus an exclusion zone.

use log::{debug, info};
use rand::Rng;
use streaks_core::{Bounds, GridSpec, Insets, Viewport};

use crate::element::{ElementId, ElementSet, PlacedElement};

/// Upper bound on grid points along either axis.
pub const MAX_POINTS_PER_AXIS: usize = 4096;

/// Counts from one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    pub cols: usize,
    pub rows: usize,
    pub placed: usize,
    pub excluded: usize,
}

/// Compute the streaks for one layout pass.
///
/// Grid points are laid out row by row and centered in the viewport minus
/// its margins. A point that falls strictly inside `content` expanded by
/// `insets` is skipped. Each placed streak gets a random rotation in
/// `[0, 360)`.
pub fn place<R: Rng + ?Sized>(
    spec: &GridSpec,
    insets: Insets,
    viewport: Viewport,
    content: Option<Bounds>,
    generation: u64,
    rng: &mut R,
) -> (Vec<PlacedElement>, LayoutSummary) {
    let mut summary = LayoutSummary::default();

    let usable_width = viewport.width - spec.margin * 2.0;
    let usable_height = viewport.height - spec.margin * 2.0;
    if usable_width <= 0.0 || usable_height <= 0.0 {
        return (Vec::new(), summary);
    }
    if spec.cell_width <= 0.0 || spec.cell_height <= 0.0 {
        return (Vec::new(), summary);
    }

    let cols = ((usable_width / spec.cell_width).floor() as usize).min(MAX_POINTS_PER_AXIS);
    let rows = ((usable_height / spec.cell_height).floor() as usize).min(MAX_POINTS_PER_AXIS);
    summary.cols = cols;
    summary.rows = rows;
    if cols == 0 || rows == 0 {
        return (Vec::new(), summary);
    }

    // Span from the first point to the last, plus the scatter to the right/down.
    let extent_x = (cols - 1) as f32 * spec.cell_width + spec.jitter;
    let extent_y = (rows - 1) as f32 * spec.cell_height + spec.jitter;
    let offset_x = spec.margin + (usable_width - extent_x) / 2.0;
    let offset_y = spec.margin + (usable_height - extent_y) / 2.0;

    let exclusion = content.map(|bounds| bounds.expand(insets));

    let mut elements = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let base_x = offset_x + col as f32 * spec.cell_width;
            let base_y = offset_y + row as f32 * spec.cell_height;

            let x = base_x + jitter(rng, spec.jitter);
            let y = base_y + jitter(rng, spec.jitter) + spec.vertical_bias;

            if let Some(zone) = exclusion
                && zone.contains(x, y)
            {
                summary.excluded += 1;
                continue;
            }

            let rotation = rng.r#gen::<f32>() * 360.0;
            let id = ElementId {
                generation,
                index: elements.len(),
            };
            elements.push(PlacedElement::new(id, x, y, rotation));
        }
    }

    summary.placed = elements.len();
    (elements, summary)
}

/// Random offset in `[0, magnitude)`; draws nothing when disabled.
fn jitter<R: Rng + ?Sized>(rng: &mut R, magnitude: f32) -> f32 {
    if magnitude > 0.0 {
        rng.r#gen::<f32>() * magnitude
    } else {
        0.0
    }
}

/// Layout engine that owns the writer side of an [`ElementSet`].
#[derive(Debug)]
pub struct GridLayout {
    spec: GridSpec,
    insets: Insets,
    elements: ElementSet,
}

impl GridLayout {
    pub fn new(spec: GridSpec, insets: Insets) -> Self {
        Self {
            spec,
            insets,
            elements: ElementSet::new(),
        }
    }

    /// Shared handle to the set this engine rebuilds.
    pub fn elements(&self) -> ElementSet {
        self.elements.clone()
    }

    /// Replace the whole set with a fresh layout for `viewport`.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        content: Option<Bounds>,
        rng: &mut R,
    ) -> LayoutSummary {
        let generation = self.elements.next_generation();
        let (elements, summary) =
            place(&self.spec, self.insets, viewport, content, generation, rng);
        self.elements.replace(generation, elements);

        info!(
            "event=layout_rebuild generation={} width={} height={} cols={} rows={} placed={} excluded={}",
            generation,
            viewport.width,
            viewport.height,
            summary.cols,
            summary.rows,
            summary.placed,
            summary.excluded
        );
        if content.is_none() {
            debug!("event=layout_rebuild content=absent");
        }
        summary
    }
}
