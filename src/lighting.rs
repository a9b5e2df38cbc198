//! Light rig: one directional light, four point lights, one spot light.
//!
//! The uniform block mirrors the WGSL struct layout exactly; every vec3
//! field is padded to 16 bytes, and the point-light array uses a 64-byte
//! element stride.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;

/// Number of point lights in the rig.
pub const NUM_POINT_LIGHTS: usize = 4;

/// Fixed world-space point-light positions.
pub const POINT_LIGHT_POSITIONS: [[f32; 3]; NUM_POINT_LIGHTS] = [
    [0.7, 0.2, 2.0],
    [2.3, -3.3, -4.0],
    [-4.0, 2.0, -12.0],
    [0.0, 0.0, -3.0],
];

/// World-space scale of the emissive cubes drawn at light positions.
pub const LIGHT_CUBE_SCALE: f32 = 0.2;

/// Directional light (sun): direction plus per-term colors.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLight {
    /// Direction the light travels (not toward the light).
    pub direction: [f32; 3],
    pub _pad0: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    pub _pad1: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    pub _pad3: f32,
}

/// Point light with quadratic distance attenuation.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLight {
    /// World-space position.
    pub position: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    /// Linear attenuation term.
    pub linear: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    pub _pad: f32,
}

/// Spot light pinned to the camera each frame (a headlamp).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLight {
    /// World-space position (camera eye).
    pub position: [f32; 3],
    /// Cosine of the inner cone angle.
    pub cut_off: f32,
    /// Cone axis (camera front).
    pub direction: [f32; 3],
    /// Cosine of the outer cone angle.
    pub outer_cut_off: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    /// Linear attenuation term.
    pub linear: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    /// Quadratic attenuation term.
    pub quadratic: f32,
}

/// Full lighting block shared by the mesh shader.
/// NOTE: Must match the WGSL struct layout exactly (416 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// The directional light.
    pub dir_light: DirectionalLight,
    /// The four point lights.
    pub point_lights: [PointLight; NUM_POINT_LIGHTS],
    /// The camera-attached spot light.
    pub spot_light: SpotLight,
    /// Material shininess exponent.
    pub shininess: f32,
    pub _pad: [f32; 3],
}

impl LightingUniform {
    /// Build the rig from tuning options. Base colors follow the demo
    /// scene; the option intensities scale them.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let dir_light = DirectionalLight {
            direction: [-0.2, -1.0, -0.3],
            _pad0: 0.0,
            ambient: splat(0.05 * options.ambient),
            _pad1: 0.0,
            diffuse: splat(0.4 * options.directional_intensity),
            _pad2: 0.0,
            specular: splat(0.5 * options.specular),
            _pad3: 0.0,
        };

        let mut point_lights = [PointLight {
            position: [0.0; 3],
            constant: 1.0,
            ambient: splat(0.2 * options.ambient),
            linear: 0.09,
            diffuse: splat(0.5 * options.point_intensity),
            quadratic: 0.032,
            specular: splat(options.specular),
            _pad: 0.0,
        }; NUM_POINT_LIGHTS];
        for (light, position) in
            point_lights.iter_mut().zip(POINT_LIGHT_POSITIONS)
        {
            light.position = position;
        }

        let spot_light = SpotLight {
            position: [0.0; 3],
            cut_off: 12.5_f32.to_radians().cos(),
            direction: [0.0, 0.0, -1.0],
            outer_cut_off: 15.0_f32.to_radians().cos(),
            ambient: [0.0; 3],
            constant: 1.0,
            diffuse: splat(options.spot_intensity),
            linear: 0.09,
            specular: splat(options.spot_intensity),
            quadratic: 0.032,
        };

        Self {
            dir_light,
            point_lights,
            spot_light,
            shininess: options.shininess,
            _pad: [0.0; 3],
        }
    }
}

fn splat(v: f32) -> [f32; 3] {
    [v, v, v]
}

/// Color the light cubes cycle through, driven by accumulated scene time.
#[must_use]
pub fn animated_light_color(time: f32) -> [f32; 3] {
    [
        (time * 2.0).sin(),
        (time * 1.3).sin(),
        (time * 0.7).sin(),
    ]
}

/// Lighting uniform buffer and bind group (group 1 in the mesh pipeline).
pub struct Lighting {
    /// CPU-side staging copy of the uniform contents.
    pub uniform: LightingUniform,
    /// Uniform buffer backing the bind group.
    pub buffer: wgpu::Buffer,
    /// Bind group layout.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group wrapping [`Self::buffer`].
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the rig and its GPU resources.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = LightingUniform::from_options(options);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Lighting Bind Group"),
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Write the current uniform contents to the GPU.
    pub fn update_gpu(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }

    /// Pin the spot light to the camera. Call each frame after the camera
    /// has been updated, before [`Self::update_gpu`].
    pub fn follow_camera(&mut self, position: Vec3, front: Vec3) {
        self.uniform.spot_light.position = position.to_array();
        self.uniform.spot_light.direction = front.to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_layout_matches_wgsl_block_size() {
        assert_eq!(std::mem::size_of::<DirectionalLight>(), 64);
        assert_eq!(std::mem::size_of::<PointLight>(), 64);
        assert_eq!(std::mem::size_of::<SpotLight>(), 80);
        assert_eq!(std::mem::size_of::<LightingUniform>(), 416);
    }

    #[test]
    fn point_lights_take_fixed_positions() {
        let uniform =
            LightingUniform::from_options(&LightingOptions::default());
        for (light, expected) in
            uniform.point_lights.iter().zip(POINT_LIGHT_POSITIONS)
        {
            assert_eq!(light.position, expected);
            assert_eq!(light.constant, 1.0);
            assert_eq!(light.linear, 0.09);
            assert_eq!(light.quadratic, 0.032);
        }
    }

    #[test]
    fn spot_cone_angles_are_cosines() {
        let uniform =
            LightingUniform::from_options(&LightingOptions::default());
        assert!(uniform.spot_light.cut_off > uniform.spot_light.outer_cut_off);
        assert!(uniform.spot_light.cut_off < 1.0);
    }

    #[test]
    fn animated_color_components_stay_bounded() {
        for step in 0..200 {
            let color = animated_light_color(step as f32 * 0.37);
            for channel in color {
                assert!((-1.0..=1.0).contains(&channel));
            }
        }
    }
}
