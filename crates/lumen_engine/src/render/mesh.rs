//! Mesh resource and vertex layout description

use crate::render::backend::{BufferHandle, GraphicsBackend};

/// One vertex attribute within an interleaved vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexElement {
    /// Attribute location in the shader
    pub location: u32,

    /// Number of float components (e.g. 3 for vec3)
    pub components: u32,

    /// Byte offset from the start of the vertex
    pub offset: u32,
}

/// Describes how interleaved vertex data is laid out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    /// Attributes in the order they appear in each vertex
    pub elements: Vec<VertexElement>,

    /// Total size of a single vertex in bytes
    pub stride: u32,
}

impl VertexLayout {
    /// Create an empty layout with the given stride
    pub fn with_stride(stride: u32) -> Self {
        Self {
            elements: Vec::new(),
            stride,
        }
    }

    /// Append an attribute to the layout
    pub fn push(&mut self, element: VertexElement) {
        self.elements.push(element);
    }
}

/// A mesh with GPU buffers uploaded through a backend
///
/// Holds one vertex buffer and at most one index buffer. The buffers are
/// created once at construction; mesh data is immutable afterwards.
#[derive(Debug)]
pub struct Mesh {
    layout: VertexLayout,
    vertex_buffer: BufferHandle,
    index_buffer: Option<BufferHandle>,
    vertex_count: u32,
    index_count: u32,
}

impl Mesh {
    /// Create an indexed mesh, uploading both buffers through the backend
    pub fn new(
        backend: &mut dyn GraphicsBackend,
        layout: VertexLayout,
        vertices: &[f32],
        indices: &[u32],
    ) -> Self {
        let vertex_buffer = backend.create_vertex_buffer(vertices);
        let index_buffer = backend.create_index_buffer(indices);
        let vertex_count = Self::count_vertices(&layout, vertices);
        Self {
            layout,
            vertex_buffer,
            index_buffer: Some(index_buffer),
            vertex_count,
            index_count: indices.len() as u32,
        }
    }

    /// Create a non-indexed mesh from vertex data only
    pub fn from_vertices(
        backend: &mut dyn GraphicsBackend,
        layout: VertexLayout,
        vertices: &[f32],
    ) -> Self {
        let vertex_buffer = backend.create_vertex_buffer(vertices);
        let vertex_count = Self::count_vertices(&layout, vertices);
        Self {
            layout,
            vertex_buffer,
            index_buffer: None,
            vertex_count,
            index_count: 0,
        }
    }

    fn count_vertices(layout: &VertexLayout, vertices: &[f32]) -> u32 {
        let floats_per_vertex = layout.stride / std::mem::size_of::<f32>() as u32;
        if floats_per_vertex == 0 {
            return 0;
        }
        vertices.len() as u32 / floats_per_vertex
    }

    /// Get the vertex layout
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Get the vertex buffer handle
    pub fn vertex_buffer(&self) -> BufferHandle {
        self.vertex_buffer
    }

    /// Get the index buffer handle, if this mesh is indexed
    pub fn index_buffer(&self) -> Option<BufferHandle> {
        self.index_buffer
    }

    /// Get the number of vertices in the vertex buffer
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get the number of indices, zero for non-indexed meshes
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::backend::HeadlessBackend;

    fn position_color_layout() -> VertexLayout {
        let mut layout = VertexLayout::with_stride(6 * 4);
        layout.push(VertexElement { location: 0, components: 3, offset: 0 });
        layout.push(VertexElement { location: 1, components: 3, offset: 12 });
        layout
    }

    #[test]
    fn test_indexed_mesh_counts() {
        let mut backend = HeadlessBackend::new();
        let vertices = [0.0f32; 24]; // 4 vertices of 6 floats
        let indices = [0u32, 1, 2, 0, 2, 3];

        let mesh = Mesh::new(&mut backend, position_color_layout(), &vertices, &indices);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert!(mesh.index_buffer().is_some());
    }

    #[test]
    fn test_non_indexed_mesh_has_no_index_buffer() {
        let mut backend = HeadlessBackend::new();
        let vertices = [0.0f32; 18]; // 3 vertices of 6 floats

        let mesh = Mesh::from_vertices(&mut backend, position_color_layout(), &vertices);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 0);
        assert!(mesh.index_buffer().is_none());
    }
}
