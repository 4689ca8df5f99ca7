//! WebGPU render pipeline setup

use super::vertex::{Vertex, colors};

/// Vertices the scene buffer holds before its first growth
const INITIAL_VERTEX_CAPACITY: usize = 4096;

/// Main render state
pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    /// Reused every frame, regrown when a scene outgrows it
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    /// Viewport size in pixels
    pub size: (u32, u32),
    /// Logical game screen (width, height) for coordinate mapping
    pub screen: (f32, f32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        screen: (f32, f32),
    ) -> Self {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("lunar-lander-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .expect("Failed to create device");

        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Flat-colour triangles, no bind groups
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
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
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
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
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

        Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            size: (width, height),
            screen,
        }
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Convert game pixels (y-down) to normalized device coordinates
    pub fn screen_to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        screen_to_ndc(self.screen, self.size, x, y)
    }

    /// Upload vertices and render
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        let ndc_vertices: Vec<Vertex> = vertices
            .iter()
            .map(|v| {
                let (x, y) = self.screen_to_ndc(v.position[0], v.position[1]);
                Vertex::new(x, y, v.color)
            })
            .collect();

        let capacity = grown_capacity(self.vertex_capacity, ndc_vertices.len());
        if capacity != self.vertex_capacity {
            log::debug!("Growing vertex buffer to {} vertices", capacity);
            self.vertex_buffer = create_vertex_buffer(&self.device, capacity);
            self.vertex_capacity = capacity;
        }
        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&ndc_vertices));
        let vertex_count = ndc_vertices.len() as u32;

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        // Space is cleared to the background colour before the scene draws
        {
            let [r, g, b, a] = colors::BACKGROUND;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..vertex_count, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Capacity needed for `needed` vertices, doubling from `current`
fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut capacity = current.max(1);
    while capacity < needed {
        capacity *= 2;
    }
    capacity
}

/// Map the logical screen onto the viewport, letterboxing to keep its aspect
pub fn screen_to_ndc(screen: (f32, f32), viewport: (u32, u32), x: f32, y: f32) -> (f32, f32) {
    let (sw, sh) = screen;
    let (vw, vh) = (viewport.0 as f32, viewport.1 as f32);
    let screen_aspect = sw / sh;
    let view_aspect = vw / vh;

    let nx = x / sw * 2.0 - 1.0;
    let ny = 1.0 - y / sh * 2.0;

    if view_aspect > screen_aspect {
        // Viewport wider than the game: pillarbox
        (nx * screen_aspect / view_aspect, ny)
    } else {
        // Viewport taller than the game: letterbox
        (nx, ny * view_aspect / screen_aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_ndc() {
        let screen = (800.0, 600.0);
        assert_eq!(screen_to_ndc(screen, (800, 600), 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(screen_to_ndc(screen, (800, 600), 800.0, 600.0), (1.0, -1.0));
        assert_eq!(screen_to_ndc(screen, (1600, 1200), 400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn test_vertex_capacity_grows_by_doubling() {
        assert_eq!(grown_capacity(4096, 0), 4096);
        assert_eq!(grown_capacity(4096, 4096), 4096);
        assert_eq!(grown_capacity(4096, 4097), 8192);
        assert_eq!(grown_capacity(4096, 20_000), 32_768);
    }

    #[test]
    fn test_wide_viewport_pillarboxes() {
        let (x, y) = screen_to_ndc((800.0, 600.0), (1600, 600), 800.0, 0.0);
        assert!((x - 0.5).abs() < 1e-6);
        assert_eq!(y, 1.0);
    }

    #[test]
    fn test_tall_viewport_letterboxes() {
        let (x, y) = screen_to_ndc((800.0, 600.0), (800, 1200), 0.0, 600.0);
        assert_eq!(x, -1.0);
        assert!((y + 0.5).abs() < 1e-6);
    }
}
