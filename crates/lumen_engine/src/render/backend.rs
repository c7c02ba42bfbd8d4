//! Backend abstraction for the rendering system
//!
//! This module defines the capability trait that graphics backends must
//! implement. The engine core never talks to a graphics API directly; a
//! backend is injected into resource creation and into the draw pass, which
//! keeps the core testable without a window or GPU context.

use crate::foundation::math::{Mat4, Vec2, Vec4};
use crate::render::color::Color;
use crate::render::mesh::Mesh;
use thiserror::Error;

/// Opaque handle to a compiled and linked shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Opaque handle to a GPU buffer (vertex or index data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// A shader program owned by whoever created it, shared between materials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    handle: ShaderHandle,
}

impl ShaderProgram {
    /// Wrap a backend-issued shader handle
    pub fn new(handle: ShaderHandle) -> Self {
        Self { handle }
    }

    /// Get the backend handle for this program
    pub fn handle(&self) -> ShaderHandle {
        self.handle
    }
}

bitflags::bitflags! {
    /// Framebuffer attachments to clear at the start of a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color attachment
        const COLOR = 0b01;
        /// Depth attachment
        const DEPTH = 0b10;
    }
}

/// Errors reported by a graphics backend
///
/// Shader failures are recoverable: callers keep a shaderless material and
/// degrade to not drawing instead of aborting the frame.
#[derive(Error, Debug)]
pub enum GraphicsError {
    /// A shader stage failed to compile
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompile {
        /// Shader stage name ("vertex" or "fragment")
        stage: &'static str,
        /// Compiler diagnostic output
        log: String,
    },

    /// Compiled stages failed to link into a program
    #[error("shader program linking failed: {log}")]
    ShaderLink {
        /// Linker diagnostic output
        log: String,
    },
}

/// Graphics capability consumed by the engine core
///
/// Uniform setters apply to the most recently bound shader program,
/// mirroring how an OpenGL-style API treats program state.
pub trait GraphicsBackend {
    /// Compile and link a shader program from vertex and fragment sources
    fn create_shader_program(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<ShaderProgram, GraphicsError>;

    /// Upload vertex data and return a handle to the new buffer
    fn create_vertex_buffer(&mut self, vertices: &[f32]) -> BufferHandle;

    /// Upload index data and return a handle to the new buffer
    fn create_index_buffer(&mut self, indices: &[u32]) -> BufferHandle;

    /// Bind a shader program for subsequent uniform updates and draws
    fn bind_shader_program(&mut self, shader: ShaderHandle);

    /// Set a float uniform on the bound program
    fn set_uniform_f32(&mut self, name: &str, value: f32);

    /// Set a vec2 uniform on the bound program
    fn set_uniform_vec2(&mut self, name: &str, value: Vec2);

    /// Set a vec4 uniform on the bound program
    fn set_uniform_vec4(&mut self, name: &str, value: Vec4);

    /// Set a mat4 uniform on the bound program
    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4);

    /// Bind a mesh's vertex and index buffers for drawing
    fn bind_mesh(&mut self, mesh: &Mesh);

    /// Issue the draw call for the currently bound mesh
    fn draw_mesh(&mut self, mesh: &Mesh);

    /// Set the clear color applied by [`GraphicsBackend::clear_buffers`]
    fn set_clear_color(&mut self, color: Color, alpha: f32);

    /// Clear the selected framebuffer attachments
    fn clear_buffers(&mut self, flags: ClearFlags);
}

/// One recorded backend invocation, kept by [`HeadlessBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    /// A shader program was created
    CreateShaderProgram(ShaderHandle),
    /// A vertex buffer was created with this many floats
    CreateVertexBuffer(BufferHandle, usize),
    /// An index buffer was created with this many indices
    CreateIndexBuffer(BufferHandle, usize),
    /// A shader program was bound
    BindShaderProgram(ShaderHandle),
    /// A float uniform was set
    SetUniformF32(String, f32),
    /// A vec2 uniform was set
    SetUniformVec2(String, Vec2),
    /// A vec4 uniform was set
    SetUniformVec4(String, Vec4),
    /// A mat4 uniform was set
    SetUniformMat4(String, Mat4),
    /// A mesh's buffers were bound
    BindMesh(BufferHandle),
    /// A draw call was issued for a mesh
    DrawMesh(BufferHandle),
    /// The clear color was set
    SetClearColor(Color, f32),
    /// Framebuffer attachments were cleared
    ClearBuffers(ClearFlags),
}

/// Recording backend with no GPU behind it
///
/// Issues sequential handles and records every call in order. Used by the
/// test suite to assert on draw submission order, and usable as a stand-in
/// backend anywhere a real context is unavailable.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    calls: Vec<BackendCall>,
    next_shader: u32,
    next_buffer: u32,
    fail_next_shader: bool,
}

impl HeadlessBackend {
    /// Create a new recording backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Get every call recorded so far, in invocation order
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Discard the recorded call log
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Make the next `create_shader_program` call fail
    pub fn fail_next_shader_program(&mut self) {
        self.fail_next_shader = true;
    }
}

impl GraphicsBackend for HeadlessBackend {
    fn create_shader_program(
        &mut self,
        _vertex_src: &str,
        _fragment_src: &str,
    ) -> Result<ShaderProgram, GraphicsError> {
        if self.fail_next_shader {
            self.fail_next_shader = false;
            return Err(GraphicsError::ShaderCompile {
                stage: "vertex",
                log: "injected failure".to_string(),
            });
        }
        let handle = ShaderHandle(self.next_shader);
        self.next_shader += 1;
        self.calls.push(BackendCall::CreateShaderProgram(handle));
        Ok(ShaderProgram::new(handle))
    }

    fn create_vertex_buffer(&mut self, vertices: &[f32]) -> BufferHandle {
        let handle = BufferHandle(self.next_buffer);
        self.next_buffer += 1;
        self.calls
            .push(BackendCall::CreateVertexBuffer(handle, vertices.len()));
        handle
    }

    fn create_index_buffer(&mut self, indices: &[u32]) -> BufferHandle {
        let handle = BufferHandle(self.next_buffer);
        self.next_buffer += 1;
        self.calls
            .push(BackendCall::CreateIndexBuffer(handle, indices.len()));
        handle
    }

    fn bind_shader_program(&mut self, shader: ShaderHandle) {
        self.calls.push(BackendCall::BindShaderProgram(shader));
    }

    fn set_uniform_f32(&mut self, name: &str, value: f32) {
        self.calls
            .push(BackendCall::SetUniformF32(name.to_string(), value));
    }

    fn set_uniform_vec2(&mut self, name: &str, value: Vec2) {
        self.calls
            .push(BackendCall::SetUniformVec2(name.to_string(), value));
    }

    fn set_uniform_vec4(&mut self, name: &str, value: Vec4) {
        self.calls
            .push(BackendCall::SetUniformVec4(name.to_string(), value));
    }

    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4) {
        self.calls
            .push(BackendCall::SetUniformMat4(name.to_string(), *value));
    }

    fn bind_mesh(&mut self, mesh: &Mesh) {
        self.calls.push(BackendCall::BindMesh(mesh.vertex_buffer()));
    }

    fn draw_mesh(&mut self, mesh: &Mesh) {
        self.calls.push(BackendCall::DrawMesh(mesh.vertex_buffer()));
    }

    fn set_clear_color(&mut self, color: Color, alpha: f32) {
        self.calls.push(BackendCall::SetClearColor(color, alpha));
    }

    fn clear_buffers(&mut self, flags: ClearFlags) {
        self.calls.push(BackendCall::ClearBuffers(flags));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_backend_issues_sequential_handles() {
        let mut backend = HeadlessBackend::new();
        let a = backend.create_vertex_buffer(&[0.0; 9]);
        let b = backend.create_index_buffer(&[0, 1, 2]);
        assert_ne!(a, b);
        assert_eq!(backend.calls().len(), 2);
    }

    #[test]
    fn test_injected_shader_failure_is_one_shot() {
        let mut backend = HeadlessBackend::new();
        backend.fail_next_shader_program();
        assert!(backend.create_shader_program("vs", "fs").is_err());
        assert!(backend.create_shader_program("vs", "fs").is_ok());
    }
}
