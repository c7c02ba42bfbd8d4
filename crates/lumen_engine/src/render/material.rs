//! Material: a shader program plus the uniform values to bind with it

use crate::foundation::math::{Vec2, Vec4};
use crate::render::backend::{GraphicsBackend, ShaderProgram};
use std::collections::HashMap;
use std::sync::Arc;

/// Shader program with named uniform parameters
///
/// Every stored parameter is re-applied on each [`Material::bind`]. A
/// material whose shader failed to build stays usable: binding it is a
/// silent no-op and anything drawn with it degrades to invisible instead
/// of aborting the frame.
#[derive(Debug, Clone, Default)]
pub struct Material {
    shader: Option<Arc<ShaderProgram>>,
    float_params: HashMap<String, f32>,
    vec2_params: HashMap<String, Vec2>,
    vec4_params: HashMap<String, Vec4>,
}

impl Material {
    /// Create a material with no shader and no parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a material by compiling shader sources through the backend
    ///
    /// On compile or link failure the error is logged and the returned
    /// material has no shader.
    pub fn from_sources(
        backend: &mut dyn GraphicsBackend,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Self {
        match backend.create_shader_program(vertex_src, fragment_src) {
            Ok(program) => Self::new().with_shader(Arc::new(program)),
            Err(err) => {
                log::error!("material shader creation failed: {err}");
                Self::new()
            }
        }
    }

    /// Set the shader program used by this material
    pub fn with_shader(mut self, shader: Arc<ShaderProgram>) -> Self {
        self.shader = Some(shader);
        self
    }

    /// Replace the shader program
    pub fn set_shader(&mut self, shader: Arc<ShaderProgram>) {
        self.shader = Some(shader);
    }

    /// Get the shader program, if one was successfully created
    pub fn shader(&self) -> Option<&Arc<ShaderProgram>> {
        self.shader.as_ref()
    }

    /// Store a float uniform value
    pub fn set_param_f32(&mut self, name: impl Into<String>, value: f32) {
        self.float_params.insert(name.into(), value);
    }

    /// Store a vec2 uniform value
    pub fn set_param_vec2(&mut self, name: impl Into<String>, value: Vec2) {
        self.vec2_params.insert(name.into(), value);
    }

    /// Store a vec4 uniform value
    pub fn set_param_vec4(&mut self, name: impl Into<String>, value: Vec4) {
        self.vec4_params.insert(name.into(), value);
    }

    /// Bind the shader and re-apply every stored parameter
    ///
    /// No-op when the material has no shader.
    pub fn bind(&self, backend: &mut dyn GraphicsBackend) {
        let Some(shader) = &self.shader else {
            return;
        };
        backend.bind_shader_program(shader.handle());

        for (name, value) in &self.float_params {
            backend.set_uniform_f32(name, *value);
        }
        for (name, value) in &self.vec2_params {
            backend.set_uniform_vec2(name, *value);
        }
        for (name, value) in &self.vec4_params {
            backend.set_uniform_vec4(name, *value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::backend::{BackendCall, HeadlessBackend};

    #[test]
    fn test_bind_without_shader_is_noop() {
        let mut backend = HeadlessBackend::new();
        let material = Material::new();

        material.bind(&mut backend);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_failed_shader_degrades_to_shaderless_material() {
        let mut backend = HeadlessBackend::new();
        backend.fail_next_shader_program();

        let material = Material::from_sources(&mut backend, "vs", "fs");
        assert!(material.shader().is_none());

        // Binding the degraded material must not reach the backend.
        backend.clear_calls();
        material.bind(&mut backend);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_bind_reapplies_stored_params() {
        let mut backend = HeadlessBackend::new();
        let mut material = Material::from_sources(&mut backend, "vs", "fs");
        material.set_param_f32("uIntensity", 0.5);
        material.set_param_vec2("uOffset", Vec2::new(0.1, 0.2));

        backend.clear_calls();
        material.bind(&mut backend);

        let calls = backend.calls();
        assert!(matches!(calls[0], BackendCall::BindShaderProgram(_)));
        assert!(calls.contains(&BackendCall::SetUniformF32("uIntensity".into(), 0.5)));
        assert!(calls.contains(&BackendCall::SetUniformVec2(
            "uOffset".into(),
            Vec2::new(0.1, 0.2)
        )));

        // Params are rebound on every bind, not only the first.
        backend.clear_calls();
        material.bind(&mut backend);
        assert_eq!(backend.calls().len(), 3);
    }
}
