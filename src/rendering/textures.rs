//! Procedural textures: bird discs, the dot drawn on family parents, and the snow flake
//! used by the mouse emitter. Everything is RGBA8, rows top to bottom.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

pub const BIRD_TEXTURE_SIZE: u32 = 256;
pub const DOT_TEXTURE_SIZE: u32 = 128;
pub const SNOW_TEXTURE_SIZE: u32 = 16;

pub const BIRD_YELLOW: [u8; 3] = [250, 204, 40];
pub const BIRD_RED: [u8; 3] = [214, 48, 49];
pub const BIRD_BLUE: [u8; 3] = [52, 120, 230];

/// Fraction of a pixel covered by a circle of `radius` centered at `center`
/// (one-pixel linear edge falloff).
fn coverage(px: f32, py: f32, center: Vec2, radius: f32) -> f32 {
    let d = Vec2::new(px, py).distance(center);
    (radius - d + 0.5).clamp(0.0, 1.0)
}

fn blend_over(dst: &mut [u8], src: [u8; 3], alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = alpha + da * (1.0 - alpha);
    for c in 0..3 {
        let s = src[c] as f32;
        let d = dst[c] as f32;
        let v = if out_a > 0.0 {
            (s * alpha + d * da * (1.0 - alpha)) / out_a
        } else {
            0.0
        };
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Solid anti-aliased disc of `radius` pixels centered in a `size`×`size` image.
pub fn disc_pixels(size: u32, radius: f32, rgb: [u8; 3]) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let center = Vec2::splat(size as f32 * 0.5);
    for y in 0..size {
        for x in 0..size {
            let a = coverage(x as f32 + 0.5, y as f32 + 0.5, center, radius);
            let i = ((y * size + x) * 4) as usize;
            blend_over(&mut data[i..i + 4], rgb, a);
        }
    }
    data
}

/// Round bird: body disc plus an eye looking to the upper right.
pub fn bird_pixels(size: u32, body: [u8; 3]) -> Vec<u8> {
    let s = size as f32;
    let mut data = disc_pixels(size, s * 0.45, body);
    let eye = Vec2::new(s * 0.64, s * 0.36);
    let pupil = Vec2::new(s * 0.67, s * 0.35);
    let beak = Vec2::new(s * 0.86, s * 0.52);
    for y in 0..size {
        for x in 0..size {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let i = ((y * size + x) * 4) as usize;
            let px_slice = &mut data[i..i + 4];
            blend_over(px_slice, [255, 140, 0], coverage(px, py, beak, s * 0.07));
            blend_over(px_slice, [255, 255, 255], coverage(px, py, eye, s * 0.11));
            blend_over(px_slice, [20, 20, 20], coverage(px, py, pupil, s * 0.05));
        }
    }
    data
}

/// Soft radial flake: opaque white in the middle fading quadratically to the edge.
pub fn snow_pixels(size: u32) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let center = Vec2::splat(size as f32 * 0.5);
    let radius = size as f32 * 0.5;
    for y in 0..size {
        for x in 0..size {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
            let t = (1.0 - d / radius).clamp(0.0, 1.0);
            let i = ((y * size + x) * 4) as usize;
            data[i..i + 3].copy_from_slice(&[255, 255, 255]);
            data[i + 3] = (t * t * 255.0).round() as u8;
        }
    }
    data
}

pub fn rgba_image(size: u32, data: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
}

#[derive(Debug, Clone, Default)]
pub struct TextureHandles {
    pub bird_yellow: Handle<Image>,
    pub bird_red: Handle<Image>,
    pub bird_blue: Handle<Image>,
    pub dot: Handle<Image>,
    pub snow: Handle<Image>,
}

pub fn build_textures(images: &mut Assets<Image>) -> TextureHandles {
    let bird = |images: &mut Assets<Image>, rgb| {
        images.add(rgba_image(BIRD_TEXTURE_SIZE, bird_pixels(BIRD_TEXTURE_SIZE, rgb)))
    };
    TextureHandles {
        bird_yellow: bird(images, BIRD_YELLOW),
        bird_red: bird(images, BIRD_RED),
        bird_blue: bird(images, BIRD_BLUE),
        // White so the sprite color decides the tint and alpha.
        dot: images.add(rgba_image(
            DOT_TEXTURE_SIZE,
            disc_pixels(DOT_TEXTURE_SIZE, DOT_TEXTURE_SIZE as f32 * 0.5, [255, 255, 255]),
        )),
        snow: images.add(rgba_image(SNOW_TEXTURE_SIZE, snow_pixels(SNOW_TEXTURE_SIZE))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(data: &[u8], size: u32, x: u32, y: u32) -> u8 {
        data[((y * size + x) * 4 + 3) as usize]
    }

    #[test]
    fn dot_is_opaque_inside_and_clear_outside() {
        let size = DOT_TEXTURE_SIZE;
        let data = disc_pixels(size, size as f32 * 0.5, [255, 255, 255]);
        assert_eq!(data.len(), (size * size * 4) as usize);
        assert_eq!(alpha_at(&data, size, size / 2, size / 2), 255);
        assert_eq!(alpha_at(&data, size, 0, 0), 0);
        assert_eq!(alpha_at(&data, size, size - 1, size - 1), 0);
    }

    #[test]
    fn bird_keeps_body_color_away_from_face() {
        let size = 64;
        let data = bird_pixels(size, BIRD_RED);
        // Lower-left quadrant of the body.
        let i = ((44 * size + 20) * 4) as usize;
        assert_eq!(&data[i..i + 4], &[214, 48, 49, 255]);
    }

    #[test]
    fn snow_fades_toward_edge() {
        let data = snow_pixels(SNOW_TEXTURE_SIZE);
        let center = alpha_at(&data, SNOW_TEXTURE_SIZE, 8, 8);
        let edge = alpha_at(&data, SNOW_TEXTURE_SIZE, 8, 15);
        assert!(center > edge);
        assert_eq!(alpha_at(&data, SNOW_TEXTURE_SIZE, 0, 0), 0);
    }
}
