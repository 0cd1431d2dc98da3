use std::path::Path;

/// A GPU texture plus its default view.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl Texture {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Depth attachment sized to the viewport (or the shadow map).
    pub fn depth(device: &wgpu::Device, width: u32, height: u32, label: &str) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    fn from_pixels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        pixels: &[u8],
        format: wgpu::TextureFormat,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    /// 1x1 single-color texture, used as the fallback for any map that
    /// fails to load.
    pub fn solid(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: [u8; 4],
        format: wgpu::TextureFormat,
        label: &str,
    ) -> Self {
        Self::from_pixels(device, queue, 1, 1, &rgba, format, label)
    }

    /// Decode an image file and upload it.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        format: wgpu::TextureFormat,
        label: &str,
    ) -> anyhow::Result<Self> {
        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self::from_pixels(
            device, queue, width, height, &image, format, label,
        ))
    }
}

/// The four material maps the lit pass samples.
///
/// Loading never fails: a missing or undecodable file logs a warning and
/// binds a neutral 1x1 fallback instead, and rendering proceeds.
pub struct MaterialMaps {
    pub color: Texture,
    pub normal: Texture,
    pub displacement: Texture,
    pub roughness: Texture,
}

const FALLBACK_COLOR: [u8; 4] = [255, 255, 255, 255];
const FALLBACK_NORMAL: [u8; 4] = [128, 128, 255, 255];
const FALLBACK_DISPLACEMENT: [u8; 4] = [0, 0, 0, 255];
const FALLBACK_ROUGHNESS: [u8; 4] = [204, 204, 204, 255];

impl MaterialMaps {
    pub fn load(device: &wgpu::Device, queue: &wgpu::Queue, dir: Option<&Path>) -> Self {
        let load_or = |name: &str, fallback: [u8; 4], format| match dir {
            Some(dir) => {
                let path = dir.join(name);
                match Texture::load(device, queue, &path, format, name) {
                    Ok(texture) => texture,
                    Err(err) => {
                        log::warn!("failed to load {}: {err}; using fallback", path.display());
                        Texture::solid(device, queue, fallback, format, name)
                    }
                }
            }
            None => Texture::solid(device, queue, fallback, format, name),
        };

        Self {
            color: load_or(
                "color.png",
                FALLBACK_COLOR,
                wgpu::TextureFormat::Rgba8UnormSrgb,
            ),
            normal: load_or(
                "normal.png",
                FALLBACK_NORMAL,
                wgpu::TextureFormat::Rgba8Unorm,
            ),
            displacement: load_or(
                "displacement.png",
                FALLBACK_DISPLACEMENT,
                wgpu::TextureFormat::Rgba8Unorm,
            ),
            roughness: load_or(
                "roughness.png",
                FALLBACK_ROUGHNESS,
                wgpu::TextureFormat::Rgba8Unorm,
            ),
        }
    }

    /// The all-fallback set; the ground plane binds this.
    pub fn neutral(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::load(device, queue, None)
    }
}
