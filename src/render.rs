use crate::config::{BACKGROUND_COLOR, CELL_COLOR, PREVIEW_ALPHA};
use crate::grid::Grid;
use wgpu;

pub type Rgba = [u8; 4];

/// Colors used to rasterize the grid.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub alive: [u8; 3],
    pub dead: [u8; 3],
    /// Opacity of the cursor preview, 0-255
    pub preview_alpha: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: CELL_COLOR,
            dead: BACKGROUND_COLOR,
            preview_alpha: PREVIEW_ALPHA,
        }
    }
}

impl Palette {
    fn cell(&self, alive: bool) -> [u8; 3] {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }

    /// Color of a cell under the cursor: the opposite state's color blended
    /// over the cell's own.
    fn preview(&self, alive: bool) -> [u8; 3] {
        blend(self.cell(alive), self.cell(!alive), self.preview_alpha)
    }
}

/// Source-over blend of `top` onto `base` with the given opacity.
pub fn blend(base: [u8; 3], top: [u8; 3], alpha: u8) -> [u8; 3] {
    let a = alpha as u32;
    let mix = |b: u8, t: u8| ((t as u32 * a + b as u32 * (255 - a) + 127) / 255) as u8;
    [mix(base[0], top[0]), mix(base[1], top[1]), mix(base[2], top[2])]
}

/// Texels per texture row, padded so each row is a multiple of
/// `COPY_BYTES_PER_ROW_ALIGNMENT` bytes.
pub fn padded_row_len(width: usize) -> usize {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT as usize / std::mem::size_of::<Rgba>();
    (width + align - 1) / align * align
}

/// Writes one texel per cell into `pixels`, whose rows are `stride` texels
/// apart. `hover` highlights the cell under the cursor.
pub fn rasterize(grid: &Grid, hover: Option<(i64, i64)>, palette: &Palette, pixels: &mut [Rgba], stride: usize) {
    for (y, row) in grid.rows().enumerate() {
        let out = &mut pixels[y * stride..y * stride + row.len()];
        for (texel, &alive) in out.iter_mut().zip(row) {
            let [r, g, b] = palette.cell(alive);
            *texel = [r, g, b, 255];
        }
    }

    if let Some((x, y)) = hover {
        if x >= 0 && y >= 0 && (x as usize) < grid.width() && (y as usize) < grid.height() {
            let [r, g, b] = palette.preview(grid.get(x, y));
            pixels[y as usize * stride + x as usize] = [r, g, b, 255];
        }
    }
}

/// Owns the cell texture and the pipeline that stretches it over the window.
pub struct GridRenderer {
    pub palette: Palette,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    width: u32,
    height: u32,
    stride: usize,
    staging: Vec<Rgba>,
}

impl GridRenderer {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat, grid_width: usize, grid_height: usize) -> Self {
        let width = grid_width as u32;
        let height = grid_height as u32;
        let stride = padded_row_len(grid_width);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Cell Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Cell Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Render Bind Group Layout"),
            entries: &[
                // Sampler (Binding 0)
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                // Cell texture (Binding 1)
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Render Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::Sampler(&sampler) },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&texture_view) },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Render Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../render.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(target_format.into())],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            palette: Palette::default(),
            texture,
            bind_group,
            pipeline,
            width,
            height,
            stride,
            staging: vec![[0; 4]; stride * grid_height],
        }
    }

    /// Rasterizes the grid and copies it into the cell texture.
    pub fn upload(&mut self, queue: &wgpu::Queue, grid: &Grid, hover: Option<(i64, i64)>) {
        rasterize(grid, hover, &self.palette, &mut self.staging, self.stride);

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(&self.staging),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some((self.stride * std::mem::size_of::<Rgba>()) as u32),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }

    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.draw(0..3, 0..1); // Draw full-screen triangle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALIVE: Rgba = [255, 100, 0, 255];
    const DEAD: Rgba = [0, 0, 0, 255];

    fn render(grid: &Grid, hover: Option<(i64, i64)>) -> (Vec<Rgba>, usize) {
        let stride = padded_row_len(grid.width());
        let mut pixels = vec![[9; 4]; stride * grid.height()];
        rasterize(grid, hover, &Palette::default(), &mut pixels, stride);
        (pixels, stride)
    }

    #[test]
    fn test_padded_row_len() {
        // 256-byte rows hold 64 RGBA texels.
        assert_eq!(padded_row_len(1), 64);
        assert_eq!(padded_row_len(64), 64);
        assert_eq!(padded_row_len(200), 256);
    }

    #[test]
    fn test_rasterize_alive_and_dead() {
        let grid: Grid = "o.\n.o".parse().unwrap();
        let (pixels, stride) = render(&grid, None);
        assert_eq!(pixels[0], ALIVE);
        assert_eq!(pixels[1], DEAD);
        assert_eq!(pixels[stride], DEAD);
        assert_eq!(pixels[stride + 1], ALIVE);
        // Row padding is left untouched.
        assert_eq!(pixels[2], [9; 4]);
    }

    #[test]
    fn test_preview_over_dead_cell() {
        let grid = Grid::new(2, 2);
        let (pixels, stride) = render(&grid, Some((1, 1)));
        assert_eq!(pixels[stride + 1], [100, 39, 0, 255]);
        assert_eq!(pixels[0], DEAD);
    }

    #[test]
    fn test_preview_over_live_cell() {
        let grid: Grid = "o".parse().unwrap();
        let (pixels, _) = render(&grid, Some((0, 0)));
        assert_eq!(pixels[0], [155, 61, 0, 255]);
    }

    #[test]
    fn test_preview_outside_grid_is_ignored() {
        let grid = Grid::new(2, 1);
        let (pixels, _) = render(&grid, Some((2, 0)));
        assert_eq!(&pixels[..2], &[DEAD, DEAD]);
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend([10, 20, 30], [200, 200, 200], 0), [10, 20, 30]);
        assert_eq!(blend([10, 20, 30], [200, 200, 200], 255), [200, 200, 200]);
    }
}
