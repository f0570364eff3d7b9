mod app;
mod scene;
mod shape;

use anyhow::Result;
use winit::dpi::LogicalSize;

use figures_engine::coords::Point;
use figures_engine::device::GpuInit;
use figures_engine::logging::{init_logging, LoggingConfig};
use figures_engine::paint::Color;
use figures_engine::window::{Runtime, RuntimeConfig};

use app::FiguresApp;
use scene::Scene;
use shape::Shape;

fn demo_scene() -> Scene {
    Scene::new(vec![
        Shape::triangle(Point::new(150, 50), 80, Color::from_srgb_u8(0, 255, 0)),
        Shape::square(Point::new(300, 50), 80, Color::from_srgb_u8(255, 255, 0)),
        Shape::circle(Point::new(450, 90), 40, Color::from_srgb_u8(255, 0, 0)),
        Shape::circle(Point::new(500, 90), 40, Color::from_srgb_u8(0, 0, 255)),
    ])
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Figures".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
        resizable: false,
    };

    Runtime::run(config, GpuInit::default(), FiguresApp::new(demo_scene()))
}
