use crate::{AppConfigs, Frame, World};
use anyhow::Context as _;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use wgpu::util::DeviceExt as _;
use winit::{
    dpi::PhysicalSize,
    event::{KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

#[derive(Debug)]
pub struct AppImpl<'window, W> {
    // World
    world: W,
    frame: Frame,
    frame_aspect: f32,

    // Window
    window: Arc<Window>,
    window_size: PhysicalSize<u32>,

    // Update cycle
    update_interval: Duration,
    last_update: Instant,

    // wgpu
    surface: wgpu::Surface<'window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    // Texture
    should_update_texture: bool,
    texture: wgpu::Texture,
    #[allow(unused)]
    texture_view: wgpu::TextureView,
    #[allow(unused)]
    texture_sampler: wgpu::Sampler,
    texture_bind_group: wgpu::BindGroup,

    // Rendering
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    indices_len: u32,
    render_pipeline: wgpu::RenderPipeline,
}

impl<W: World> AppImpl<'_, W> {
    #[inline]
    pub async fn new(
        configs: AppConfigs,
        mut world: W,
        event_loop: &ActiveEventLoop,
    ) -> anyhow::Result<Self> {
        let frame = world.init_frame();
        let frame_aspect = frame.width() as f32 / frame.height() as f32;

        let update_interval = { Duration::from_secs(1) / configs.updates_per_second };

        let (window, window_size) = {
            let window = event_loop.create_window(configs.window_attributes.clone())?;
            let size = window.inner_size();
            (Arc::new(window), size)
        };

        tracing::info!(
            frame_width = frame.width(),
            frame_height = frame.height(),
            updates_per_second = configs.updates_per_second,
            "window created"
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&Default::default())
            .await
            .context("adapter not found")?;

        let surface = instance.create_surface(Arc::clone(&window))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    ..Default::default()
                },
                None,
            )
            .await?;

        let surface_config = {
            let surface_caps = surface.get_capabilities(&adapter);
            let surface_format = surface_caps
                .formats
                .iter()
                .find(|f| f.is_srgb())
                .copied()
                .unwrap_or(surface_caps.formats[0]);

            let config = wgpu::SurfaceConfiguration {
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                format: surface_format,
                width: window_size.width,
                height: window_size.height,
                present_mode: surface_caps.present_modes[0],
                alpha_mode: surface_caps.alpha_modes[0],
                view_formats: vec![],
                desired_maximum_frame_latency: 2,
            };
            surface.configure(&device, &config);
            config
        };

        let (texture, texture_view, texture_sampler) =
            frame.create_texture(&device, &queue, Some("Frame Texture"))?;
        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("texture_bind_group_layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });
        let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("texture_bind_group"),
            layout: &texture_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture_sampler),
                },
            ],
        });

        let vertices = aspect_adjusted_vertices(frame_aspect, window_size);

        // We use wgpu::IndexFormat::Uint16
        #[rustfmt::skip]
        let indices: [u16; 6] = [
            0, 1, 2,
            2, 1, 3
        ];
        let indices_len = indices.len() as u32;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let render_pipeline = {
            let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[&texture_bind_group_layout],
                push_constant_ranges: &[],
            });
            let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Main Shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("main.wgsl").into()),
            });

            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Render Pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_config.format,
                        blend: Some(wgpu::BlendState {
                            alpha: wgpu::BlendComponent::REPLACE,
                            color: wgpu::BlendComponent::REPLACE,
                        }),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        Ok(Self {
            world,
            frame,
            frame_aspect,
            window,
            window_size,
            update_interval,
            last_update: Instant::now(),
            surface,
            device,
            queue,
            surface_config,
            should_update_texture: false,
            texture,
            texture_view,
            texture_sampler,
            texture_bind_group,
            vertex_buffer,
            index_buffer,
            indices_len,
            render_pipeline,
        })
    }

    #[inline]
    pub fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) -> anyhow::Result<()> {
        match event {
            WindowEvent::Resized(physical_size) => {
                self.resize(physical_size);
            }
            WindowEvent::CloseRequested => {
                tracing::info!("close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.render().unwrap();
                self.window.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard_input(event);
            }
            _ => (),
        }
        Ok(())
    }

    fn resize(&mut self, new_window_size: PhysicalSize<u32>) {
        if new_window_size == self.window_size {
            return;
        }
        self.window_size = new_window_size;
        if new_window_size.width == 0 || new_window_size.height == 0 {
            return;
        }

        self.surface_config.width = new_window_size.width;
        self.surface_config.height = new_window_size.height;
        self.surface.configure(&self.device, &self.surface_config);

        let vertices = aspect_adjusted_vertices(self.frame_aspect, self.window_size);
        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_update;
        if dt < self.update_interval {
            return;
        }

        self.last_update = self
            .last_update
            .checked_add(self.update_interval)
            .unwrap_or(now);

        self.world.update(&mut self.frame);
        self.should_update_texture = true;
    }

    fn render(&mut self) -> anyhow::Result<()> {
        if self.should_update_texture {
            self.frame.update_wgpu_texture(&self.texture, &self.queue);
            self.should_update_texture = false;
        }

        let output = self.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.texture_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..self.indices_len, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn keyboard_input(&mut self, event: KeyEvent) {
        self.world.keyboard_input(event, &mut self.frame);
        self.should_update_texture = true;
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
    tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2,
    ];

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A quad filling as much of the window as the frame's aspect ratio allows.
fn aspect_adjusted_vertices(frame_aspect: f32, window_size: PhysicalSize<u32>) -> [Vertex; 4] {
    let (x, y) = {
        let window_aspect = window_size.width as f32 / window_size.height as f32;
        let (x, y) = if window_aspect > frame_aspect {
            (frame_aspect / window_aspect, 1.0)
        } else {
            (1.0, window_aspect / frame_aspect)
        };
        // add margin
        let p = 0.999;
        (x * p, y * p)
    };

    // top_left
    // -1, 1
    //
    //        1, -1,
    //        bottom_right

    [
        Vertex {
            position: [-x, -y],
            tex_coords: [0.0, 1.0],
        },
        Vertex {
            position: [x, -y],
            tex_coords: [1.0, 1.0],
        },
        Vertex {
            position: [-x, y],
            tex_coords: [0.0, 0.0],
        },
        Vertex {
            position: [x, y],
            tex_coords: [1.0, 0.0],
        },
    ]
}
