use glam::Vec3;

/// Placement of a drawable entity. `scale` is fed to the shader's uSize
/// uniform rather than baked into the model matrix.
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

/// World-space light position for the ball shader (uLightPos).
pub struct LightPos(pub Vec3);
