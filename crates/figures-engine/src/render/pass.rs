use crate::scene::{DrawCmd, DrawList};

use super::shapes::{EllipseRenderer, PolygonRenderer, RectRenderer};
use super::{RenderCtx, RenderTarget};

/// Shape kind discriminant used for run batching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Kind {
    Rect,
    Ellipse,
    Polygon,
}

fn kind_of(cmd: &DrawCmd) -> Kind {
    match cmd {
        DrawCmd::Rect(_) => Kind::Rect,
        DrawCmd::Ellipse(_) => Kind::Ellipse,
        DrawCmd::Polygon(_) => Kind::Polygon,
    }
}

/// One renderer per shape kind, dispatched in global paint order.
///
/// Each kind has its own pipeline, so a frame cannot be a single draw call
/// per kind: a rect between two polygons in paint order must also render
/// between them. `render` therefore splits the paint-ordered draw list into
/// maximal same-kind runs and issues one pass per run, in order. Instances
/// for each kind are uploaded once per frame in `prepare`; runs index into
/// that upload.
#[derive(Default)]
pub struct ShapeRenderers {
    rects: RectRenderer,
    ellipses: EllipseRenderer,
    polygons: PolygonRenderer,

    /// Scratch buffer of per-item kinds in paint order, reused across frames.
    kinds: Vec<Kind>,
}

impl ShapeRenderers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the whole draw list into `target` in paint order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        if draw_list.is_empty() {
            return;
        }

        self.rects.prepare(ctx, draw_list);
        self.ellipses.prepare(ctx, draw_list);
        self.polygons.prepare(ctx, draw_list);

        self.kinds.clear();
        self.kinds
            .extend(draw_list.iter_in_paint_order().map(|item| kind_of(&item.cmd)));

        // Per-kind counters of paint-order items consumed so far.
        let mut consumed = [0u32; 3];

        let mut i = 0;
        while i < self.kinds.len() {
            let kind = self.kinds[i];
            let mut j = i + 1;
            while j < self.kinds.len() && self.kinds[j] == kind {
                j += 1;
            }

            let run = (j - i) as u32;
            let counter = &mut consumed[kind as usize];
            let range = *counter..*counter + run;
            *counter += run;

            match kind {
                Kind::Rect => self.rects.draw(target, range),
                Kind::Ellipse => self.ellipses.draw(target, range),
                Kind::Polygon => self.polygons.draw(target, range),
            }

            i = j;
        }
    }
}
