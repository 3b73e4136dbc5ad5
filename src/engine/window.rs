use anyhow::{Context, Result};
use sdl2::video::{GLContext, GLProfile, Window};
use sdl2::Sdl;

const TITLE: &str = "icoball";
const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

/// The demo's fixed 1280x720 window. Owns the GL 3.3 core context and loads
/// the GL function pointers, so constructing one is the prerequisite for any
/// other GL call in the app.
pub struct DemoWindow {
    _gl_context: GLContext,
    window: Window,
}

impl DemoWindow {
    pub fn open(sdl: &Sdl) -> Result<Self> {
        let video = sdl
            .video()
            .map_err(anyhow::Error::msg)
            .context("SDL2 video subsystem")?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video
            .window(TITLE, WIDTH, HEIGHT)
            .opengl()
            .build()
            .context("create window")?;

        let gl_context = window
            .gl_create_context()
            .map_err(anyhow::Error::msg)
            .context("create GL context")?;
        gl::load_with(|s| video.gl_get_proc_address(s) as *const _);

        Ok(Self {
            _gl_context: gl_context,
            window,
        })
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.window.size();
        aspect(w, h)
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    width as f32 / height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_window_is_sixteen_by_nine() {
        assert!((aspect(WIDTH, HEIGHT) - 16.0 / 9.0).abs() < 1e-6);
    }
}
