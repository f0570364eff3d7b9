use figures_engine::coords::Point;
use figures_engine::core::{App, AppControl, FrameCtx};
use figures_engine::input::{InputEvent, MouseButton, MouseButtonState};
use figures_engine::paint::Color;
use figures_engine::render::ShapeRenderers;
use figures_engine::scene::DrawList;

use crate::scene::Scene;

/// Background fill behind the shapes.
fn background() -> Color {
    Color::from_srgb_u8(128, 128, 128)
}

/// The interactive shapes application: drag a shape with the left mouse
/// button, release to drop it in front of everything else.
pub struct FiguresApp {
    scene: Scene,
    draw_list: DrawList,
    renderers: ShapeRenderers,
}

impl FiguresApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            draw_list: DrawList::new(),
            renderers: ShapeRenderers::new(),
        }
    }

    /// Shapes live on an integer grid; pointer coordinates are truncated
    /// toward zero to land on it.
    fn to_model(x: f32, y: f32) -> Point {
        Point::new(x as i32, y as i32)
    }

    fn handle_input(&mut self, ctx: &FrameCtx<'_, '_>) {
        for ev in &ctx.input_frame.events {
            match *ev {
                InputEvent::PointerButton(btn) if btn.button == MouseButton::Left => {
                    let p = Self::to_model(btn.x, btn.y);
                    match btn.state {
                        MouseButtonState::Pressed => self.scene.begin_drag(p),
                        MouseButtonState::Released => self.scene.end_drag(),
                    }
                }
                InputEvent::PointerMoved(mv) => {
                    self.scene.update_drag(Self::to_model(mv.x, mv.y));
                }
                _ => {}
            }
        }
    }
}

impl App for FiguresApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.handle_input(ctx);

        self.draw_list.clear();
        self.scene.record(&mut self.draw_list);

        let draw_list = &mut self.draw_list;
        let renderers = &mut self.renderers;
        ctx.render(background(), |rctx, target| {
            renderers.render(rctx, target, draw_list);
        })
    }
}
