use figures_engine::coords::Point;
use figures_engine::scene::{DrawList, ZIndex};

use crate::shape::Shape;

/// Active drag bookkeeping.
///
/// `offset` is the vector from the shape's bounding-box origin to the pointer,
/// captured on press and preserved for the whole drag so the shape does not
/// jump to align its corner with the pointer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct DragState {
    index: usize,
    offset: Point,
}

/// Ordered collection of shapes with selection and z-order management.
///
/// Index 0 is back-most; the last index is front-most. The sequence length is
/// fixed after construction; dragging only translates shapes and reorders
/// them within the `Vec`.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    drag: Option<DragState>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes, drag: None }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Index of the shape currently being dragged, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.drag.map(|d| d.index)
    }

    /// Returns the index of the topmost shape containing `p`.
    ///
    /// Scans back-to-front so the front-most (highest index) shape wins when
    /// shapes overlap.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, shape)| shape.contains(p))
            .map(|(i, _)| i)
    }

    /// Starts a drag at `p` if a shape is under the pointer.
    ///
    /// A press while a drag is already active commits the active drag first
    /// (same raise-to-front path as a release) and then hit-tests anew; a
    /// stale selection never survives a second press.
    pub fn begin_drag(&mut self, p: Point) {
        if self.drag.is_some() {
            log::debug!("press during active drag; committing previous drag");
            self.end_drag();
        }

        let Some(index) = self.hit_test(p) else {
            return;
        };

        let origin = self.shapes[index].bounding_box().origin;
        self.drag = Some(DragState {
            index,
            offset: p - origin,
        });
        log::debug!("drag started on shape {index} at {p:?}");
    }

    /// Moves the dragged shape so its grab point follows the pointer.
    ///
    /// The delta is computed against the shape's *current* bounding box, so N
    /// steps with cumulative pointer movement (Dx, Dy) translate the shape by
    /// exactly (Dx, Dy) regardless of N.
    pub fn update_drag(&mut self, p: Point) {
        let Some(DragState { index, offset }) = self.drag else {
            return;
        };

        let shape = &mut self.shapes[index];
        let origin = shape.bounding_box().origin;
        let delta = p - offset - origin;
        shape.translate(delta.x, delta.y);
    }

    /// Ends the active drag and raises the dragged shape to the front.
    ///
    /// No-op when nothing is selected.
    pub fn end_drag(&mut self) {
        let Some(DragState { index, .. }) = self.drag.take() else {
            return;
        };

        let shape = self.shapes.remove(index);
        self.shapes.push(shape);
        log::debug!("shape raised to front (index {index} -> {})", self.shapes.len() - 1);
    }

    /// Records every shape into `list` in z-order.
    ///
    /// The dragged shape, if any, is recorded last so it renders on top
    /// before `end_drag` commits its new position in the sequence.
    pub fn record(&self, list: &mut DrawList) {
        let selected = self.selected_index();
        let z = ZIndex::default();

        for (i, shape) in self.shapes.iter().enumerate() {
            if Some(i) == selected {
                continue;
            }
            shape.record(list, z);
        }
        if let Some(i) = selected {
            self.shapes[i].record(list, z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figures_engine::paint::Color;
    use figures_engine::scene::DrawCmd;

    fn color() -> Color {
        Color::from_srgb_u8(255, 0, 0)
    }

    /// The fixed scene the application starts with.
    fn demo_scene() -> Scene {
        Scene::new(vec![
            Shape::triangle(Point::new(150, 50), 80, Color::from_srgb_u8(0, 255, 0)),
            Shape::square(Point::new(300, 50), 80, Color::from_srgb_u8(255, 255, 0)),
            Shape::circle(Point::new(450, 90), 40, Color::from_srgb_u8(255, 0, 0)),
            Shape::circle(Point::new(500, 90), 40, Color::from_srgb_u8(0, 0, 255)),
        ])
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn hit_test_finds_each_shape() {
        let scene = demo_scene();
        assert_eq!(scene.hit_test(Point::new(310, 60)), Some(1)); // square only
        assert_eq!(scene.hit_test(Point::new(450, 90)), Some(2)); // red circle
        assert_eq!(scene.hit_test(Point::new(1, 1)), None);
    }

    #[test]
    fn hit_test_prefers_the_front_most_shape() {
        // The two circles overlap between their centers.
        let scene = demo_scene();
        assert_eq!(scene.hit_test(Point::new(475, 90)), Some(3));
    }

    #[test]
    fn overlapping_shapes_resolve_by_index() {
        let scene = Scene::new(vec![
            Shape::square(Point::new(0, 0), 10, color()),
            Shape::square(Point::new(5, 5), 10, color()),
        ]);
        assert_eq!(scene.hit_test(Point::new(7, 7)), Some(1));
        assert_eq!(scene.hit_test(Point::new(2, 2)), Some(0));
    }

    // ── dragging ──────────────────────────────────────────────────────────

    #[test]
    fn begin_drag_misses_empty_space() {
        let mut scene = demo_scene();
        scene.begin_drag(Point::new(1, 1));
        assert_eq!(scene.selected_index(), None);
    }

    #[test]
    fn drag_preserves_the_grab_offset() {
        let mut scene = demo_scene();
        scene.begin_drag(Point::new(310, 60)); // square, offset (10, 10)
        assert_eq!(scene.selected_index(), Some(1));

        scene.update_drag(Point::new(320, 80));
        assert_eq!(
            scene.shapes()[1],
            Shape::square(Point::new(310, 70), 80, Color::from_srgb_u8(255, 255, 0)),
        );
    }

    #[test]
    fn drag_is_step_invariant() {
        // Cumulative pointer delta (60, -20), in one step vs. many.
        let mut one = demo_scene();
        one.begin_drag(Point::new(450, 90));
        one.update_drag(Point::new(510, 70));

        let mut many = demo_scene();
        many.begin_drag(Point::new(450, 90));
        many.update_drag(Point::new(460, 85));
        many.update_drag(Point::new(455, 100));
        many.update_drag(Point::new(510, 70));

        assert_eq!(one.shapes()[2], many.shapes()[2]);
        assert_eq!(
            one.shapes()[2],
            Shape::circle(Point::new(510, 70), 40, Color::from_srgb_u8(255, 0, 0)),
        );
    }

    #[test]
    fn end_drag_raises_the_shape_to_the_front() {
        let mut scene = demo_scene();
        let triangle = scene.shapes()[0].clone();

        // Press inside the back-most triangle, release without moving.
        scene.begin_drag(Point::new(150, 100));
        assert_eq!(scene.selected_index(), Some(0));
        scene.end_drag();

        assert_eq!(scene.selected_index(), None);
        assert_eq!(scene.shapes()[3], triangle);
        // Subsequent hit-tests at the same point now prefer the triangle.
        assert_eq!(scene.hit_test(Point::new(150, 100)), Some(3));
    }

    #[test]
    fn end_drag_without_selection_is_a_no_op() {
        let mut scene = demo_scene();
        let before: Vec<Shape> = scene.shapes().to_vec();
        scene.end_drag();
        assert_eq!(scene.shapes(), &before[..]);
    }

    #[test]
    fn second_press_commits_the_active_drag() {
        let mut scene = demo_scene();
        scene.begin_drag(Point::new(310, 60)); // square at index 1

        // A second press without an intervening release: the square is
        // committed to the front, then the new point is hit-tested.
        scene.begin_drag(Point::new(450, 90));

        assert_eq!(scene.shapes()[3], Shape::square(Point::new(300, 50), 80, Color::from_srgb_u8(255, 255, 0)));
        // The red circle moved down one slot when the square was re-appended.
        assert_eq!(scene.selected_index(), Some(1));
    }

    // ── draw recording ────────────────────────────────────────────────────

    fn recorded_kinds(scene: &Scene) -> Vec<&'static str> {
        let mut list = DrawList::new();
        scene.record(&mut list);
        list.items()
            .iter()
            .map(|item| match item.cmd {
                DrawCmd::Polygon(_) => "polygon",
                DrawCmd::Rect(_) => "rect",
                DrawCmd::Ellipse(_) => "ellipse",
            })
            .collect()
    }

    #[test]
    fn record_follows_sequence_order() {
        let scene = demo_scene();
        assert_eq!(recorded_kinds(&scene), vec!["polygon", "rect", "ellipse", "ellipse"]);
    }

    #[test]
    fn record_paints_the_dragged_shape_last() {
        let mut scene = demo_scene();
        scene.begin_drag(Point::new(150, 100)); // triangle, index 0

        assert_eq!(recorded_kinds(&scene), vec!["rect", "ellipse", "ellipse", "polygon"]);
    }
}
