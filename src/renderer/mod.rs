pub mod mesh;
pub mod shader;
pub mod store;
pub mod texture;

use glam::{Mat4, Vec3};
use hecs::World;
use once_cell::unsync::OnceCell;

use crate::components::{LightPos, Transform};
use mesh::Mesh;
use shader::ShaderProgram;
use store::{Handle, Store};
use texture::Texture;

const BALL_VERT: &str = include_str!("../../shaders/ball.vert");
const BALL_FRAG: &str = include_str!("../../shaders/ball.frag");

const CLEAR_COLOR: Vec3 = Vec3::new(0.08, 0.08, 0.1);

pub type MeshStore = Store<Mesh>;
pub type TextureStore = Store<Texture>;

/// Components tying an entity to its GPU resources.
pub type MeshHandle = Handle<Mesh>;
pub type TextureHandle = Handle<Texture>;

pub struct Renderer {
    // Compiled once per process, on the first ball spawn. Owned here so the
    // shader's lifetime is tied to the GL context that created it.
    ball_shader: OnceCell<ShaderProgram>,
}

impl Renderer {
    pub fn init() -> Self {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::Enable(gl::CULL_FACE);
            gl::CullFace(gl::BACK);
            gl::ClearColor(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
        }

        Self {
            ball_shader: OnceCell::new(),
        }
    }

    /// Compile the shared ball shader if this is the first use. Never
    /// recompiled or invalidated afterwards.
    pub fn ensure_ball_shader(&mut self) -> Result<(), String> {
        self.ball_shader.get_or_try_init(|| {
            log::info!("compiling ball shader");
            ShaderProgram::from_sources(BALL_VERT, BALL_FRAG)
        })?;
        Ok(())
    }

    pub fn draw_scene(
        &mut self,
        world: &World,
        meshes: &MeshStore,
        textures: &TextureStore,
        view: &Mat4,
        proj: &Mat4,
    ) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        let Some(shader) = self.ball_shader.get_mut() else {
            return;
        };
        shader.bind();
        shader.set_int("uTexture", 0);

        for (_entity, (transform, mesh_handle, texture_handle, light)) in world
            .query::<(&Transform, &MeshHandle, &TextureHandle, &LightPos)>()
            .iter()
        {
            // uSize scales the unit sphere inside the vertex shader, so the
            // model matrix carries translation only.
            let model_view = *view * Mat4::from_translation(transform.position);
            shader.set_mat4("uMvpMatrix", &(*proj * model_view));
            shader.set_mat4("uViewMatrix", view);
            shader.set_mat4("uModelView", &model_view);
            shader.set_vec3("uSize", transform.scale);
            shader.set_vec3("uLightPos", light.0);

            textures.get(*texture_handle).bind(0);
            meshes.get(*mesh_handle).draw();
        }
    }
}
