//! Bitmap snapshots of a grid: one RGBA pixel per cell.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::domain::{Cell, Grid, Position};
use crate::error::PersistenceError;

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn from_channel(value: u8) -> f32 {
    value as f32 / 255.0
}

/// Render the grid into an in-memory image
pub fn to_image(grid: &Grid) -> Result<RgbaImage, PersistenceError> {
    let (width, height) = grid.size();
    let too_large = || PersistenceError::TooLarge { width, height };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;

    let mut image = RgbaImage::new(w, h);
    for (pos, cell) in grid.iter_cells() {
        let pixel = Rgba(cell.to_array().map(to_channel));
        image.put_pixel(pos.x as u32, pos.y as u32, pixel);
    }
    Ok(image)
}

/// Decode an image into a fresh grid of the same dimensions
pub fn from_image(image: &RgbaImage) -> Result<Grid, PersistenceError> {
    let (w, h) = image.dimensions();
    let mut grid = Grid::new(w as usize, h as usize);
    for (x, y, pixel) in image.enumerate_pixels() {
        let cell = Cell::from_array(pixel.0.map(from_channel));
        grid.set(Position::new(x as i32, y as i32), cell)?;
    }
    Ok(grid)
}

/// Write `grid` to `path`; the format follows the file extension
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    to_image(grid)?.save(path)?;
    log::info!("saved {}x{} snapshot to {}", grid.size().0, grid.size().1, path.display());
    Ok(())
}

/// Replace `grid`'s contents with the snapshot at `path`.
///
/// The whole file is decoded and checked before `grid` is touched, so any
/// failure leaves the current generation intact.
pub fn load(grid: &mut Grid, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgba8();

    let expected = grid.size();
    let found = image.dimensions();
    if (found.0 as usize, found.1 as usize) != expected {
        return Err(PersistenceError::DimensionMismatch { expected, found });
    }

    let loaded = from_image(&image)?;
    grid.copy_from(&loaded)?;
    log::info!("loaded snapshot from {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LiveColor;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("color_life_{}_{name}", std::process::id()))
    }

    fn seeded_grid() -> Grid {
        let mut grid = Grid::new(6, 4);
        grid.set(Position::new(0, 0), Cell::LIVE).unwrap();
        let color = LiveColor::Gradient.color_at(Position::new(3, 2), grid.size());
        grid.set(Position::new(3, 2), color).unwrap();
        grid
    }

    #[test]
    fn test_channels_quantize() {
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(2.0), 255);
        assert_eq!(from_channel(255), 1.0);
    }

    #[test]
    fn test_save_then_load_restores_cells() {
        let path = temp_path("roundtrip.png");
        let grid = seeded_grid();
        save(&grid, &path).unwrap();

        let mut restored = Grid::new(6, 4);
        load(&mut restored, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored.population(), 2);
        assert_eq!(restored.get(Position::new(0, 0)), Ok(Cell::LIVE));
        let original = grid.get(Position::new(3, 2)).unwrap();
        let loaded = restored.get(Position::new(3, 2)).unwrap();
        for (a, b) in original.to_array().iter().zip(loaded.to_array()) {
            assert!((a - b).abs() <= 1.0 / 255.0, "channel drifted: {a} vs {b}");
        }
    }

    #[test]
    fn test_missing_file_leaves_grid_intact() {
        let mut grid = seeded_grid();
        let before = grid.clone();
        let result = load(&mut grid, temp_path("does_not_exist.png"));
        assert!(matches!(result, Err(PersistenceError::Image(_))));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_wrong_dimensions_leave_grid_intact() {
        let path = temp_path("small.png");
        save(&Grid::new(3, 3), &path).unwrap();

        let mut grid = seeded_grid();
        let before = grid.clone();
        let result = load(&mut grid, &path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(PersistenceError::DimensionMismatch {
                expected: (6, 4),
                found: (3, 3)
            })
        ));
        assert_eq!(grid, before);
    }
}
