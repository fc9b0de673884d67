//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“剪贴板原始字节 → PNG 字节”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. PNG 原样透传（不解码、不重编码，保证字节完全一致）
//! 2. TIFF 读取 header 尺寸并按像素 / 内存上限快速拒绝
//! 3. 完整解码
//! 4. 在内存中重新编码为 PNG

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

use crate::clipboard::RasterFormat;

use super::{ImageConfig, ImageError};

/// 把剪贴板中的图片字节整理为 PNG 字节。
pub(crate) fn normalize_to_png(
    format: RasterFormat,
    bytes: Vec<u8>,
    config: &ImageConfig,
) -> Result<Vec<u8>, ImageError> {
    match format {
        RasterFormat::Png => Ok(bytes),
        RasterFormat::Tiff => convert_tiff_to_png(&bytes, config),
    }
}

/// TIFF → PNG。
pub(crate) fn convert_tiff_to_png(bytes: &[u8], config: &ImageConfig) -> Result<Vec<u8>, ImageError> {
    let (header_width, header_height) = inspect_dimensions(bytes, ImageFormat::Tiff)?;
    validate_pixel_limits(config, header_width, header_height)?;
    validate_decoded_memory_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Tiff)
        .map_err(|e| ImageError::Decode(format!("TIFF 解码失败：{}", e)))?;

    let (width, height) = decoded.dimensions();
    validate_pixel_limits(config, width, height)?;
    validate_decoded_memory_limits(config, width, height)?;

    let png = encode_png(&decoded)?;

    log::debug!(
        "🔁 TIFF 已转换为 PNG - 尺寸: {}x{} 输入: {} bytes 输出: {} bytes",
        width,
        height,
        bytes.len(),
        png.len()
    );

    Ok(png)
}

/// 将 RGBA 像素缓冲编码为 PNG（系统剪贴板只给出原始像素时使用）。
pub(crate) fn encode_rgba_as_png(width: u32, height: u32, rgba: Vec<u8>) -> Result<Vec<u8>, ImageError> {
    let buffer = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ImageError::InvalidFormat(format!("RGBA 数据长度与尺寸 {}x{} 不匹配", width, height)))?;
    encode_png(&DynamicImage::ImageRgba8(buffer))
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| ImageError::Encode(format!("PNG 编码失败：{}", e)))?;
    Ok(cursor.into_inner())
}

/// 仅通过内存中的图片头信息读取宽高。
fn inspect_dimensions(bytes: &[u8], format: ImageFormat) -> Result<(u32, u32), ImageError> {
    image::ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| ImageError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
}

/// 校验像素数量是否超过配置上限。
fn validate_pixel_limits(config: &ImageConfig, width: u32, height: u32) -> Result<(), ImageError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| ImageError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(ImageError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}

fn validate_decoded_memory_limits(config: &ImageConfig, width: u32, height: u32) -> Result<(), ImageError> {
    let estimated = (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| ImageError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

    if estimated > config.max_decoded_bytes {
        return Err(ImageError::ResourceLimit(format!(
            "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
            estimated as f64 / 1024.0 / 1024.0,
            config.max_decoded_bytes as f64 / 1024.0 / 1024.0
        )));
    }

    Ok(())
}
