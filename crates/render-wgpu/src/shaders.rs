/// WGSL shader for instanced textured cubes.
///
/// The overlay texture is blended over the base by its own alpha.
pub const CUBE_SHADER: &str = r#"
struct Camera {
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(0) @binding(1)
var base_texture: texture_2d<f32>;

@group(0) @binding(2)
var overlay_texture: texture_2d<f32>;

@group(0) @binding(3)
var texture_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct InstanceInput {
    @location(2) world_0: vec4<f32>,
    @location(3) world_1: vec4<f32>,
    @location(4) world_2: vec4<f32>,
    @location(5) world_3: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let world = mat4x4<f32>(
        instance.world_0,
        instance.world_1,
        instance.world_2,
        instance.world_3,
    );

    var out: VertexOutput;
    out.clip_position = camera.projection * camera.view * world * vec4<f32>(vertex.position, 1.0);
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Texture rows are uploaded bottom-first, so v = 0 is the image bottom.
    let base = textureSample(base_texture, texture_sampler, in.uv);
    let overlay = textureSample(overlay_texture, texture_sampler, in.uv);
    return vec4<f32>(mix(base.rgb, overlay.rgb, overlay.a), base.a);
}
"#;
