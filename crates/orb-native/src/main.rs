use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use orb_core::constants::{
    DEFAULT_SKILLS, MARKER_RADIUS, MARKER_SECTORS, MARKER_STACKS, POINT_SPHERE_RADIUS,
    WIREFRAME_RADIUS, WIRE_ARC_STEPS, WIRE_MERIDIANS, WIRE_PARALLELS,
};
use orb_core::{mesh, ndc_from_css, OrbitState, Palette, SkillSphere, Theme};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    wire_color: [f32; 4],
    marker_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MarkerInstance {
    pos: [f32; 3],
    scale: f32,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    wire_pipeline: wgpu::RenderPipeline,
    wire_vb: wgpu::Buffer,
    wire_vertex_count: u32,
    marker_pipeline: wgpu::RenderPipeline,
    marker_vb: wgpu::Buffer,
    marker_ib: wgpu::Buffer,
    marker_index_count: u32,
    marker_instance_vb: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    wire_color: [f32; 4],
    marker_color: [f32; 4],
    width: u32,
    height: u32,
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        palette: &Palette,
        instance_capacity: usize,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, config.width, config.height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(orb_core::SCENE_WGSL.into()),
        });

        let wire_vertices =
            mesh::wireframe_sphere(WIREFRAME_RADIUS, WIRE_PARALLELS, WIRE_MERIDIANS, WIRE_ARC_STEPS);
        let wire_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("wire_vb"),
            contents: bytemuck::cast_slice(&wire_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let wire_vertex_count = wire_vertices.len() as u32;

        let (sphere_vertices, sphere_indices) = mesh::unit_sphere_mesh(MARKER_SECTORS, MARKER_STACKS);
        let marker_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marker_vb"),
            contents: bytemuck::cast_slice(&sphere_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let marker_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marker_ib"),
            contents: bytemuck::cast_slice(&sphere_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let marker_index_count = sphere_indices.len() as u32;

        let marker_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker_instance_vb"),
            size: (std::mem::size_of::<MarkerInstance>() * instance_capacity.max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let depth_write = wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        };
        let depth_test_only = wgpu::DepthStencilState {
            depth_write_enabled: false,
            ..depth_write.clone()
        };

        let marker_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("marker_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_marker"),
                buffers: &[
                    // slot 0: unit sphere mesh
                    wgpu::VertexBufferLayout {
                        array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        }],
                    },
                    // slot 1: per-marker position + scale
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 0,
                                shader_location: 1,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32,
                                offset: 12,
                                shader_location: 2,
                            },
                        ],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(depth_write),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_marker"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let wire_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("wire_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_wire"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(depth_test_only),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_wire"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            width: config.width,
            height: config.height,
            config,
            depth_view,
            wire_pipeline,
            wire_vb,
            wire_vertex_count,
            marker_pipeline,
            marker_vb,
            marker_ib,
            marker_index_count,
            marker_instance_vb,
            uniform_buffer,
            bind_group,
            wire_color: palette.wire_rgba,
            marker_color: palette.marker_rgba,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.width, self.height);
    }

    fn render(
        &mut self,
        orbit: &OrbitState,
        scene: &SkillSphere,
    ) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = orbit.camera(aspect);
        let uniforms = SceneUniforms {
            view_proj: (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d(),
            wire_color: self.wire_color,
            marker_color: self.marker_color,
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut instances: Vec<MarkerInstance> = Vec::with_capacity(scene.len());
        for (i, pos) in scene.marker_positions().iter().enumerate() {
            instances.push(MarkerInstance {
                pos: pos.to_array(),
                scale: MARKER_RADIUS * scene.marker_scale(i),
            });
        }
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.marker_instance_vb, 0, bytemuck::cast_slice(&instances));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
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
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.04,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !instances.is_empty() {
                rpass.set_pipeline(&self.marker_pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.marker_vb.slice(..));
                rpass.set_vertex_buffer(1, self.marker_instance_vb.slice(..));
                rpass.set_index_buffer(self.marker_ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.marker_index_count, 0, 0..instances.len() as u32);
            }

            rpass.set_pipeline(&self.wire_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.wire_vb.slice(..));
            rpass.draw(0..self.wire_vertex_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Text labels need the page's 2D canvas rasterizer; the preview draws
    // the shell and markers and logs hover changes instead.
    let labels: Vec<String> = DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    let mut scene = SkillSphere::new(labels, POINT_SPHERE_RADIUS);
    let mut orbit = OrbitState::default();
    let palette = Palette::for_theme(Theme::Dark);

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Skill Sphere (native preview)")
        .build(&event_loop)
        .expect("window");

    let mut state =
        pollster::block_on(GpuState::new(&window, &palette, scene.len())).expect("gpu");
    let mut cursor: Option<(f32, f32)> = None;
    let mut last_frame = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => state.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = (position.x as f32, position.y as f32);
                    cursor = Some((x, y));
                    if orbit.is_dragging() {
                        orbit.drag_to(x, y, state.height as f32);
                    }
                    if let Some(ndc) =
                        ndc_from_css(x, y, state.width as f32, state.height as f32)
                    {
                        let camera = orbit.camera(state.width as f32 / state.height.max(1) as f32);
                        let (ro, rd) = camera.ray_from_ndc(ndc);
                        let hit = scene.pick(ro, rd);
                        if scene.set_hovered(hit) {
                            log::info!("[hover] {}", scene.hovered_label().unwrap_or("none"));
                        }
                    }
                }
                WindowEvent::MouseInput {
                    state: button_state,
                    button: MouseButton::Left,
                    ..
                } => match button_state {
                    ElementState::Pressed => {
                        if let Some((x, y)) = cursor {
                            orbit.begin_drag(x, y);
                        }
                    }
                    ElementState::Released => orbit.end_drag(),
                },
                WindowEvent::CursorLeft { .. } => {
                    orbit.end_drag();
                    if scene.set_hovered(None) {
                        log::info!("[hover] none");
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = now - last_frame;
                last_frame = now;
                orbit.update(dt.as_secs_f32());
                match state.render(&orbit, &scene) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}
