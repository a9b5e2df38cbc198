//! The render engine: owns every piece of GPU and scene state.
//!
//! One `MeshViewEngine` replaces the original demo's process-wide
//! globals — camera, timing, and model placement all live here and are
//! passed by reference into the code that needs them.

use std::path::Path;

use glam::{Mat4, Vec3};

use crate::camera::controller::CameraController;
use crate::camera::input::InputHandler;
use crate::error::FacetError;
use crate::gpu::depth::DepthTexture;
use crate::gpu::mesh_buffers::GpuMesh;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, Key};
use crate::lighting::{animated_light_color, Lighting, LightingUniform};
use crate::mesh::loader;
use crate::options::Options;
use crate::renderer::light_pass::LightCubePass;
use crate::renderer::mesh_pass::MeshPass;
use crate::util::frame_timing::FrameTiming;

/// Initial camera position, a few units back from the model.
const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 3.0);
/// Model translation rate (units/sec) while a model key is held.
const MODEL_MOVE_SPEED: f32 = 0.6;
/// Model spin rate (radians/sec) while Space is held.
const MODEL_SPIN_SPEED: f32 = 0.6;

/// Placement of the loaded mesh: translation plus rotation about +Y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelTransform {
    /// World-space translation.
    pub translation: Vec3,
    /// Accumulated rotation about the +Y axis, radians.
    pub angle: f32,
}

impl ModelTransform {
    /// Compose the model matrix (translate, then rotate).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_y(self.angle)
    }
}

/// The render engine. Create once, then drive with
/// [`handle_input`](Self::handle_input) / [`update`](Self::update) /
/// [`render`](Self::render) from the windowing loop.
pub struct MeshViewEngine {
    /// wgpu device/queue/surface owner.
    pub context: RenderContext,
    /// Camera state plus its GPU uniform.
    pub camera_controller: CameraController,
    /// Light rig plus its GPU uniform.
    pub lighting: Lighting,
    /// Held-key and cursor tracking.
    pub input_handler: InputHandler,
    /// Smoothed frame timing.
    pub frame_timing: FrameTiming,
    depth: DepthTexture,
    mesh_pass: MeshPass,
    light_pass: LightCubePass,
    mesh: GpuMesh,
    model: ModelTransform,
    options: Options,
    /// Accumulated scene time driving the light-color animation.
    elapsed: f32,
}

impl MeshViewEngine {
    /// Create an engine rendering the mesh at `mesh_path` to `window`.
    ///
    /// The mesh is parsed to completion before any GPU state is touched
    /// beyond context creation; a parse failure aborts engine construction.
    ///
    /// # Errors
    ///
    /// [`FacetError::Gpu`] when context initialization fails,
    /// [`FacetError::Mesh`] when the mesh cannot be loaded.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        mesh_path: &Path,
        options: Options,
    ) -> Result<Self, FacetError> {
        let context = RenderContext::new(window, size).await?;

        let mesh_data = loader::load(mesh_path)?;
        let mesh = GpuMesh::upload(&context.device, &mesh_data);

        let camera_controller =
            CameraController::new(&context, CAMERA_START, &options.camera);
        let lighting = Lighting::new(&context, &options.lighting);
        let depth = DepthTexture::new(&context.device, size.0, size.1);
        let mesh_pass = MeshPass::new(
            &context,
            &camera_controller.layout,
            &lighting.layout,
        );
        let light_pass =
            LightCubePass::new(&context, &camera_controller.layout);

        Ok(Self {
            context,
            camera_controller,
            lighting,
            input_handler: InputHandler::new(),
            frame_timing: FrameTiming::new(),
            depth,
            mesh_pass,
            light_pass,
            mesh,
            model: ModelTransform::default(),
            options,
            elapsed: 0.0,
        })
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options, re-deriving camera tuning and the light rig.
    pub fn set_options(&mut self, options: Options) {
        self.camera_controller.camera.movement_speed =
            options.camera.movement_speed;
        self.camera_controller.camera.mouse_sensitivity =
            options.camera.mouse_sensitivity;
        self.lighting.uniform =
            LightingUniform::from_options(&options.lighting);
        self.options = options;
    }

    /// Current model placement.
    #[must_use]
    pub fn model(&self) -> ModelTransform {
        self.model
    }

    /// Feed one input event. Returns true if the camera consumed it.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input_handler
            .handle_event(&mut self.camera_controller.camera, &event)
    }

    /// Advance one frame: apply held keys, animate the lights, and push
    /// all uniforms to the GPU. `dt` is the wall-clock delta measured
    /// once per loop iteration.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;

        self.input_handler
            .apply_movement(&mut self.camera_controller.camera, dt);
        self.apply_model_keys(dt);

        let (position, front) = {
            let camera = &self.camera_controller.camera;
            (camera.position, camera.front())
        };
        self.lighting.follow_camera(position, front);

        let cube_color = if self.options.lighting.animate_colors {
            animated_light_color(self.elapsed)
        } else {
            [1.0; 3]
        };

        let queue = &self.context.queue;
        self.camera_controller.update_gpu(queue);
        self.lighting.update_gpu(queue);
        self.mesh_pass.update_model(
            queue,
            self.model.matrix(),
            self.options.display.mesh_color,
        );
        self.light_pass.update_instances(queue, cube_color);
    }

    /// Model-placement keys: arrows move in X/Y, O/L in Z, Space spins.
    fn apply_model_keys(&mut self, dt: f32) {
        let step = MODEL_MOVE_SPEED * dt;
        let input = &self.input_handler;
        if input.is_pressed(Key::ArrowUp) {
            self.model.translation.y += step;
        }
        if input.is_pressed(Key::ArrowDown) {
            self.model.translation.y -= step;
        }
        if input.is_pressed(Key::ArrowLeft) {
            self.model.translation.x -= step;
        }
        if input.is_pressed(Key::ArrowRight) {
            self.model.translation.x += step;
        }
        if input.is_pressed(Key::O) {
            self.model.translation.z -= step;
        }
        if input.is_pressed(Key::L) {
            self.model.translation.z += step;
        }
        if input.is_pressed(Key::Space) {
            self.model.angle += MODEL_SPIN_SPEED * dt;
        }
    }

    /// Draw one frame: mesh pass, then (optionally) the light cubes.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired; the caller reconfigures via [`Self::resize`] on
    /// `Lost`/`Outdated`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let [r, g, b] = self.options.display.clear_color;
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            self.mesh_pass.draw(
                &mut render_pass,
                &self.mesh,
                &self.camera_controller.bind_group,
                &self.lighting.bind_group,
            );

            if self.options.display.show_light_cubes {
                self.light_pass.draw(
                    &mut render_pass,
                    &self.camera_controller.bind_group,
                );
            }
        }

        self.context.submit(encoder);
        frame.present();
        self.frame_timing.end_frame();
        Ok(())
    }

    /// Track a window resize: surface, projection aspect, depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera_controller.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_transform_is_identity() {
        assert_eq!(ModelTransform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn model_matrix_applies_translation_after_rotation() {
        let transform = ModelTransform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            angle: std::f32::consts::FRAC_PI_2,
        };
        // The origin is unaffected by rotation, then translated.
        let origin = transform.matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.truncate() - transform.translation).length() < 1e-5);

        // +X rotates to -Z (quarter turn about +Y), then translates.
        let x_axis = transform.matrix() * glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        let expected = transform.translation + Vec3::new(0.0, 0.0, -1.0);
        assert!((x_axis.truncate() - expected).length() < 1e-5);
    }
}
