use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

pub const CUBE_VERTEX_COUNT: u32 = 36;

const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> TexturedVertex {
    TexturedVertex {
        position: [x, y, z],
        uv: [u, w],
    }
}

/// Unit cube centred on the origin as a plain triangle list, six faces of two
/// triangles each.
#[rustfmt::skip]
const CUBE: [TexturedVertex; CUBE_VERTEX_COUNT as usize] = [
    // -Z
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    v( 0.5, -0.5, -0.5, 1.0, 0.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    // +Z
    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v( 0.5,  0.5,  0.5, 1.0, 1.0),
    v( 0.5,  0.5,  0.5, 1.0, 1.0),
    v(-0.5,  0.5,  0.5, 0.0, 1.0),
    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    // -X
    v(-0.5,  0.5,  0.5, 1.0, 0.0),
    v(-0.5,  0.5, -0.5, 1.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    v(-0.5,  0.5,  0.5, 1.0, 0.0),
    // +X
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5, -0.5, -0.5, 0.0, 1.0),
    v( 0.5, -0.5, -0.5, 0.0, 1.0),
    v( 0.5, -0.5,  0.5, 0.0, 0.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    // -Y
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v( 0.5, -0.5, -0.5, 1.0, 1.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    // +Y
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v(-0.5,  0.5,  0.5, 0.0, 0.0),
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
];

pub fn cube_vertices() -> &'static [TexturedVertex] {
    &CUBE
}
