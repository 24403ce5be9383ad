use glam::Mat4;
use viewer_core::mesh::{self, LineVertex, MeshData, MeshVertex, PointInstance};
use viewer_core::{
    Camera, CameraMarker, PreparedCloud, AMBIENT_INTENSITY, BACKGROUND_COLOR,
    DIRECTIONAL_INTENSITY, LIGHT_POSITION, MARKER_COLOR, MARKER_CONE_COLOR, MARKER_CONE_HEIGHT,
    MARKER_CONE_RADIUS, MARKER_CONE_SEGMENTS, MARKER_SPHERE_RADIUS, MARKER_SPHERE_SEGMENTS,
};
use web_sys as web;
use wgpu;
use wgpu::util::DeviceExt;

use crate::constants::MARKER_INSTANCE_CAPACITY;

mod helpers;
mod targets;

use helpers::{ScenePipelineDesc, UniformBinding};
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointGlobals {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshGlobals {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    lighting: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineGlobals {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MarkerInstance {
    model: [[f32; 4]; 4],
    // rgb + emissive intensity
    color: [f32; 4],
    // x: lit
    params: [f32; 4],
}

impl MarkerInstance {
    fn new(model: Mat4, rgb: [f32; 3], emissive: f32, lit: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], emissive],
            params: [if lit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

const POINT_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const MARKER_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4
];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

struct IndexedMesh {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl IndexedMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_count: mesh.indices.len() as u32,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    points_pipeline: wgpu::RenderPipeline,
    points_uniforms: UniformBinding,
    mesh_pipeline: wgpu::RenderPipeline,
    mesh_uniforms: UniformBinding,
    lines_pipeline: wgpu::RenderPipeline,
    lines_uniforms: UniformBinding,

    // Scene content
    cloud: Option<(wgpu::Buffer, u32)>,
    point_size: f32,
    helper_lines: Option<(wgpu::Buffer, u32)>,
    sphere: IndexedMesh,
    cone: IndexedMesh,
    marker_instances: wgpu::Buffer,
    marker_capacity: usize,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Colors are authored as display values, so prefer a non-sRGB target
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        // Point cloud: instanced camera-facing quads
        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(viewer_core::POINTS_WGSL.into()),
        });
        let points_uniforms = helpers::create_uniform_binding(
            &device,
            "points_uniforms",
            std::mem::size_of::<PointGlobals>() as u64,
            wgpu::ShaderStages::VERTEX,
        );
        let points_pipeline = helpers::make_scene_pipeline(
            &device,
            &points_uniforms.layout,
            ScenePipelineDesc {
                label: "points_pipeline",
                shader: &points_shader,
                vs_entry: "vs_points",
                fs_entry: "fs_points",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<PointInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &POINT_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: format,
            },
        );

        // Camera markers: sphere and cone meshes with per-instance transforms
        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(viewer_core::MESH_WGSL.into()),
        });
        let mesh_uniforms = helpers::create_uniform_binding(
            &device,
            "mesh_uniforms",
            std::mem::size_of::<MeshGlobals>() as u64,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let mesh_pipeline = helpers::make_scene_pipeline(
            &device,
            &mesh_uniforms.layout,
            ScenePipelineDesc {
                label: "mesh_pipeline",
                shader: &mesh_shader,
                vs_entry: "vs_mesh",
                fs_entry: "fs_mesh",
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MeshVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &MESH_ATTRS,
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &MARKER_ATTRS,
                    },
                ],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: format,
            },
        );

        // Grid and axes helpers
        let lines_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(viewer_core::LINES_WGSL.into()),
        });
        let lines_uniforms = helpers::create_uniform_binding(
            &device,
            "lines_uniforms",
            std::mem::size_of::<LineGlobals>() as u64,
            wgpu::ShaderStages::VERTEX,
        );
        let lines_pipeline = helpers::make_scene_pipeline(
            &device,
            &lines_uniforms.layout,
            ScenePipelineDesc {
                label: "lines_pipeline",
                shader: &lines_shader,
                vs_entry: "vs_lines",
                fs_entry: "fs_lines",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &LINE_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::LineList,
                color_format: format,
            },
        );

        let sphere = IndexedMesh::upload(
            &device,
            "marker_sphere",
            &mesh::uv_sphere(
                MARKER_SPHERE_RADIUS,
                MARKER_SPHERE_SEGMENTS,
                MARKER_SPHERE_SEGMENTS,
            ),
        );
        let cone = IndexedMesh::upload(
            &device,
            "marker_cone",
            &mesh::cone(MARKER_CONE_RADIUS, MARKER_CONE_HEIGHT, MARKER_CONE_SEGMENTS),
        );
        let marker_instances = create_marker_buffer(&device, MARKER_INSTANCE_CAPACITY);

        log::info!("[gpu] ready {}x{} format={:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            points_pipeline,
            points_uniforms,
            mesh_pipeline,
            mesh_uniforms,
            lines_pipeline,
            lines_uniforms,
            cloud: None,
            point_size: viewer_core::POINT_SIZE_MIN,
            helper_lines: None,
            sphere,
            cone,
            marker_instances,
            marker_capacity: MARKER_INSTANCE_CAPACITY,
            width,
            height,
            clear_color: wgpu::Color {
                r: BACKGROUND_COLOR[0] as f64,
                g: BACKGROUND_COLOR[1] as f64,
                b: BACKGROUND_COLOR[2] as f64,
                a: 1.0,
            },
        })
    }

    /// Replace the drawn point cloud.
    pub fn upload_cloud(&mut self, cloud: &PreparedCloud) {
        self.cloud = helpers::vertex_buffer(&self.device, "cloud_instances", &cloud.instances());
        self.point_size = cloud.point_size;
        log::info!(
            "[gpu] uploaded {} points (size {:.4})",
            cloud.cloud.len(),
            cloud.point_size
        );
    }

    /// Replace the grid and axes line list.
    pub fn upload_helpers(&mut self, lines: &[LineVertex]) {
        self.helper_lines = helpers::vertex_buffer(&self.device, "helper_lines", lines);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and depth target at the current size.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
    }

    fn write_marker_instances(&mut self, markers: &[CameraMarker]) -> u32 {
        if markers.is_empty() {
            return 0;
        }
        let mut instances = Vec::with_capacity(markers.len() * 2);
        instances.extend(
            markers
                .iter()
                .map(|m| MarkerInstance::new(m.sphere_model(), MARKER_COLOR, m.intensity, true)),
        );
        instances.extend(
            markers
                .iter()
                .map(|m| MarkerInstance::new(m.cone_model(), MARKER_CONE_COLOR, 0.0, false)),
        );
        if instances.len() > self.marker_capacity {
            self.marker_capacity = instances.len().next_power_of_two();
            self.marker_instances = create_marker_buffer(&self.device, self.marker_capacity);
        }
        self.queue.write_buffer(
            &self.marker_instances,
            0,
            bytemuck::cast_slice(&instances),
        );
        markers.len() as u32
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        markers: &[CameraMarker],
    ) -> Result<(), wgpu::SurfaceError> {
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();
        let view_proj = proj * view;

        let pg = PointGlobals {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            params: [self.point_size, 0.0, 0.0, 0.0],
        };
        let light = LIGHT_POSITION.normalize();
        let mg = MeshGlobals {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: [light.x, light.y, light.z, 0.0],
            lighting: [AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, 0.0, 0.0],
        };
        let lg = LineGlobals {
            view_proj: view_proj.to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.points_uniforms.buffer, 0, bytemuck::bytes_of(&pg));
        self.queue
            .write_buffer(&self.mesh_uniforms.buffer, 0, bytemuck::bytes_of(&mg));
        self.queue
            .write_buffer(&self.lines_uniforms.buffer, 0, bytemuck::bytes_of(&lg));
        let marker_count = self.write_marker_instances(markers);

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some((lines, count)) = &self.helper_lines {
                rpass.set_pipeline(&self.lines_pipeline);
                rpass.set_bind_group(0, &self.lines_uniforms.bind_group, &[]);
                rpass.set_vertex_buffer(0, lines.slice(..));
                rpass.draw(0..*count, 0..1);
            }

            if let Some((points, count)) = &self.cloud {
                rpass.set_pipeline(&self.points_pipeline);
                rpass.set_bind_group(0, &self.points_uniforms.bind_group, &[]);
                rpass.set_vertex_buffer(0, points.slice(..));
                rpass.draw(0..6, 0..*count);
            }

            if marker_count > 0 {
                rpass.set_pipeline(&self.mesh_pipeline);
                rpass.set_bind_group(0, &self.mesh_uniforms.bind_group, &[]);
                rpass.set_vertex_buffer(1, self.marker_instances.slice(..));

                rpass.set_vertex_buffer(0, self.sphere.vertices.slice(..));
                rpass.set_index_buffer(self.sphere.indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.sphere.index_count, 0, 0..marker_count);

                rpass.set_vertex_buffer(0, self.cone.vertices.slice(..));
                rpass.set_index_buffer(self.cone.indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(
                    0..self.cone.index_count,
                    0,
                    marker_count..marker_count * 2,
                );
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_marker_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (capacity.max(1) * std::mem::size_of::<MarkerInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
