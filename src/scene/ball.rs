use anyhow::{Context, Result};
use glam::Vec3;
use hecs::{Entity, World};
use std::path::Path;

use crate::components::{LightPos, Transform};
use crate::icosphere;
use crate::renderer::mesh::upload_mesh;
use crate::renderer::texture::Texture;
use crate::renderer::{MeshStore, Renderer, TextureStore};

/// Light position every ball starts with. Overwrite the entity's LightPos
/// component to move it.
pub const DEFAULT_LIGHT_POS: Vec3 = Vec3::new(400.0, -400.0, 400.0);

/// The size argument is a bounding-box diameter and the generated sphere
/// has radius 1, so the entity scale is half the requested size per axis.
pub fn ball_transform(size: Vec3) -> Transform {
    Transform {
        position: Vec3::ZERO,
        scale: size * 0.5,
    }
}

/// Build the icosphere, upload it, load the texture, make sure the shared
/// shader exists, and spawn the ball entity at the world origin.
///
/// Texture decode and shader compile failures abort the spawn; nothing is
/// retried or cleaned up beyond the stores' normal ownership.
pub fn spawn_ball(
    world: &mut World,
    renderer: &mut Renderer,
    meshes: &mut MeshStore,
    textures: &mut TextureStore,
    size: Vec3,
    texture_path: &Path,
) -> Result<Entity> {
    let mesh_data = icosphere::build();
    log::info!(
        "ball mesh: {} vertices, {} triangles",
        mesh_data.vertices.len(),
        mesh_data.triangle_count()
    );
    let mesh_handle = meshes.add(upload_mesh(&mesh_data));

    let texture_handle = textures.add(Texture::from_file(texture_path)?);

    renderer
        .ensure_ball_shader()
        .map_err(anyhow::Error::msg)
        .context("ball shader")?;

    Ok(world.spawn((
        ball_transform(size),
        mesh_handle,
        texture_handle,
        LightPos(DEFAULT_LIGHT_POS),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_scale_is_half_the_requested_size() {
        let transform = ball_transform(Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(transform.scale, Vec3::ONE);
        assert_eq!(transform.position, Vec3::ZERO);

        let transform = ball_transform(Vec3::new(4.0, 2.0, 1.0));
        assert_eq!(transform.scale, Vec3::new(2.0, 1.0, 0.5));
    }

    #[test]
    fn default_light_matches_the_demo() {
        assert_eq!(DEFAULT_LIGHT_POS, Vec3::new(400.0, -400.0, 400.0));
    }
}
