//! Tile image loading, socket glyph synthesis and PNG export of solved grids

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::algorithm::executor::Solver;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::{BasePattern, edge_at};

/// Background behind unsolved cells
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Outline of cells still waiting to collapse
const PENDING_OUTLINE: Rgba<u8> = Rgba([70, 70, 70, 255]);
/// Center mark of synthesized glyphs
const GLYPH_CENTER: Rgba<u8> = Rgba([211, 211, 211, 255]);

/// Colors assigned to socket characters by code point
const SOCKET_PALETTE: [Rgba<u8>; 8] = [
    Rgba([30, 30, 30, 255]),
    Rgba([0, 128, 128, 255]),
    Rgba([255, 165, 0, 255]),
    Rgba([135, 206, 235, 255]),
    Rgba([128, 0, 128, 255]),
    Rgba([0, 128, 0, 255]),
    Rgba([255, 215, 0, 255]),
    Rgba([128, 0, 0, 255]),
];

/// Load `dir/{i}.png` for every image index, scaled to `tile_pixels`
///
/// # Errors
///
/// Returns `ImageLoad` naming the first file that cannot be read or decoded
pub fn load_tile_images(dir: &Path, count: usize, tile_pixels: u32) -> Result<Vec<RgbaImage>> {
    (0..count)
        .map(|index| {
            let path = dir.join(format!("{index}.png"));
            let loaded = image::open(&path)
                .map_err(|source| AlgorithmError::ImageLoad {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            Ok(fit_to_tile(&loaded, tile_pixels))
        })
        .collect()
}

/// Draw one glyph per base pattern from its edge sockets
pub fn synthesize_tile_images(patterns: &[BasePattern], tile_pixels: u32) -> Vec<RgbaImage> {
    patterns
        .iter()
        .map(|pattern| socket_glyph(pattern, tile_pixels))
        .collect()
}

/// Paint each socket character along its edge, clockwise
///
/// Segment `c` of an edge with `n` characters covers the `c`-th `1/n` of that
/// edge in clockwise traversal, so rotating the glyph matches rotating the
/// sockets.
pub fn socket_glyph(pattern: &BasePattern, tile_pixels: u32) -> RgbaImage {
    let size = tile_pixels.max(1);
    let band = (size / 6).max(1);
    let mut glyph = RgbaImage::from_pixel(size, size, BACKGROUND);

    for direction in Direction::ALL {
        let socket = edge_at(pattern.edges(), direction).as_str();
        let segments = socket.chars().count() as u32;
        if segments == 0 {
            continue;
        }

        for (position, character) in (0_u32..).zip(socket.chars()) {
            let start = position * size / segments;
            let end = (position + 1) * size / segments;
            let length = end.saturating_sub(start);
            let (x, y, width, height) = match direction {
                Direction::Up => (start, 0, length, band),
                Direction::Right => (size - band, start, band, length),
                Direction::Down => (size - end, size - band, length, band),
                Direction::Left => (0, size - end, band, length),
            };
            fill_rect(&mut glyph, (x, y), (width, height), socket_color(character));
        }
    }

    let center = size / 2;
    let mark = band.max(2) / 2;
    fill_rect(
        &mut glyph,
        (center.saturating_sub(mark), center.saturating_sub(mark)),
        (mark * 2, mark * 2),
        GLYPH_CENTER,
    );
    glyph
}

/// Palette color for a socket character
pub fn socket_color(character: char) -> Rgba<u8> {
    let slot = (character as usize) % SOCKET_PALETTE.len();
    SOCKET_PALETTE.get(slot).copied().unwrap_or(BACKGROUND)
}

/// Render the solved half and reconstruct mirrored halves by reflection
///
/// Tile handles index into `images`. Collapsed cells draw their image turned
/// clockwise by the tile's rotation; pending cells draw an outline.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas size overflows `u32` pixels per axis (`InvalidParameter`)
/// - A tile's handle has no image (`InvalidTileIndex`)
pub fn render_grid(
    solver: &Solver<usize>,
    images: &[RgbaImage],
    tile_pixels: u32,
) -> Result<RgbaImage> {
    let size = tile_pixels.max(1);
    let (dim_x, dim_y) = solver.dims();
    let symmetry = solver.symmetry();
    let solved_width = canvas_extent(dim_x, size, false)?;
    let solved_height = canvas_extent(dim_y, size, false)?;
    let width = canvas_extent(dim_x, size, symmetry.mirror_x())?;
    let height = canvas_extent(dim_y, size, symmetry.mirror_y())?;

    let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);

    for ((i, j), _) in solver.grid().positioned_cells() {
        let origin = (i as u32 * size, j as u32 * size);
        let Some(tile) = solver.tile_at(i, j) else {
            outline_rect(&mut canvas, origin, size, PENDING_OUTLINE);
            continue;
        };

        let image = images
            .get(*tile.image())
            .ok_or(AlgorithmError::InvalidTileIndex {
                index: *tile.image(),
                max_tiles: images.len(),
            })?;
        let rotated = rotate_clockwise(&fit_to_tile(image, size), tile.rotation());
        imageops::replace(&mut canvas, &rotated, i64::from(origin.0), i64::from(origin.1));
    }

    if symmetry.mirror_x() {
        let left = imageops::crop_imm(&canvas, 0, 0, solved_width, solved_height).to_image();
        let reflected = imageops::flip_horizontal(&left);
        imageops::replace(&mut canvas, &reflected, i64::from(solved_width), 0);
    }

    if symmetry.mirror_y() {
        let top = imageops::crop_imm(&canvas, 0, 0, width, solved_height).to_image();
        let reflected = imageops::flip_vertical(&top);
        imageops::replace(&mut canvas, &reflected, 0, i64::from(solved_height));
    }

    Ok(canvas)
}

/// Save a rendered grid as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: PathBuf::from(output_path),
            source: e,
        })
}

/// Pixel extent of `cells` tiles, doubled for a mirrored axis
fn canvas_extent(cells: usize, size: u32, mirrored: bool) -> Result<u32> {
    let factor = if mirrored { 2 } else { 1 };
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(size))
        .and_then(|extent| extent.checked_mul(factor))
        .ok_or_else(|| {
            invalid_parameter(
                "tile_size",
                &size,
                &format!("{cells} cells of {size} pixels overflow the canvas"),
            )
        })
}

fn fit_to_tile(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        image.clone()
    } else {
        imageops::resize(image, size, size, FilterType::Triangle)
    }
}

fn rotate_clockwise(image: &RgbaImage, quarter_turns: usize) -> RgbaImage {
    match quarter_turns % 4 {
        1 => imageops::rotate90(image),
        2 => imageops::rotate180(image),
        3 => imageops::rotate270(image),
        _ => image.clone(),
    }
}

fn fill_rect(image: &mut RgbaImage, origin: (u32, u32), extent: (u32, u32), color: Rgba<u8>) {
    for y in origin.1..origin.1.saturating_add(extent.1) {
        for x in origin.0..origin.0.saturating_add(extent.0) {
            if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}

fn outline_rect(image: &mut RgbaImage, origin: (u32, u32), size: u32, color: Rgba<u8>) {
    let (x0, y0) = origin;
    let last = size.saturating_sub(1);
    for offset in 0..size {
        for (x, y) in [
            (x0 + offset, y0),
            (x0 + offset, y0 + last),
            (x0, y0 + offset),
            (x0 + last, y0 + offset),
        ] {
            if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}
