use blackhole_core::{AssetError, TextureFilter, TextureKind, TextureSet};
use wgpu::util::DeviceExt;

/// RGBA8 pixels ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// 1×1 stand-in for a texture that failed to load.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![128, 128, 128, 255],
        }
    }
}

/// Decode PNG or JPEG bytes for `kind`.
pub fn decode(kind: TextureKind, bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|e| AssetError::Load {
        name: kind.file_name().to_string(),
        reason: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("[assets] decoded {} ({width}x{height})", kind.file_name());
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

// Lookup tables hold data, not colour, so skip the sRGB decode for them.
fn format_for(kind: TextureKind) -> wgpu::TextureFormat {
    match kind {
        TextureKind::Spectra => wgpu::TextureFormat::Rgba8Unorm,
        _ => wgpu::TextureFormat::Rgba8UnormSrgb,
    }
}

pub(crate) fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    textures: &TextureSet<DecodedImage>,
) -> TextureSet<wgpu::TextureView> {
    textures.as_ref().map_with_kind(|kind, img| {
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(kind.name()),
                size: wgpu::Extent3d {
                    width: img.width,
                    height: img.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: format_for(kind),
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &img.rgba,
        );
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    })
}

pub(crate) fn sampler(device: &wgpu::Device, filter: TextureFilter) -> wgpu::Sampler {
    let (mode, label) = match filter {
        TextureFilter::Linear => (wgpu::FilterMode::Linear, "linear_sampler"),
        TextureFilter::Nearest => (wgpu::FilterMode::Nearest, "nearest_sampler"),
    };
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(label),
        // panoramas wrap horizontally; lookups clamp their own coordinates
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: mode,
        min_filter: mode,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
