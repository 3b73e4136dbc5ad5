mod camera;
mod components;
mod engine;
mod icosphere;
mod renderer;
mod scene;

use anyhow::{Context, Result};
use camera::Camera;
use clap::Parser;
use engine::window::DemoWindow;
use glam::Vec3;
use hecs::World;
use renderer::{MeshStore, Renderer, TextureStore};
use scene::ball::spawn_ball;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "icoball", about = "Textured icosphere demo")]
struct Args {
    /// Image file to wrap around the ball (PNG or JPG)
    texture: PathBuf,

    /// Ball size (bounding-box diameter)
    #[arg(long, default_value_t = 2.0)]
    size: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sdl = sdl2::init().map_err(anyhow::Error::msg).context("init SDL2")?;
    let window = DemoWindow::open(&sdl)?;

    let mut renderer = Renderer::init();
    let mut meshes = MeshStore::new();
    let mut textures = TextureStore::new();
    let mut world = World::new();

    spawn_ball(
        &mut world,
        &mut renderer,
        &mut meshes,
        &mut textures,
        Vec3::splat(args.size),
        &args.texture,
    )?;

    let camera = Camera::new();
    let mut event_pump = sdl.event_pump().map_err(anyhow::Error::msg)?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        let view = camera.view_matrix();
        let proj = camera.projection_matrix(window.aspect_ratio());
        renderer.draw_scene(&world, &meshes, &textures, &view, &proj);

        window.swap();
    }

    Ok(())
}
