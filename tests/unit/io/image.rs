//! Tests for glyph synthesis, grid rendering with reflection and PNG export

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tilecollapse::io::configuration::SolverConfig;
    use tilecollapse::io::image::{
        export_png, load_tile_images, render_grid, socket_color, socket_glyph,
    };
    use tilecollapse::spatial::tiles::{BasePattern, TileCatalog};
    use tilecollapse::{AlgorithmError, Solver};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn uniform_solver(config: SolverConfig) -> Solver<usize> {
        let catalog = TileCatalog::indexed(&[BasePattern::new(["x", "x", "x", "x"])])
            .expect("valid catalog");
        Solver::new(catalog, config).expect("valid dimensions")
    }

    // Left half red, right half blue
    fn split_image(size: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, _| if x < size / 2 { RED } else { BLUE })
    }

    // Tests socket characters are painted clockwise along each edge
    // Breaks if the bottom edge is painted left to right
    #[test]
    fn test_socket_glyph_segments() {
        let pattern = BasePattern::new(["ab", "0", "ab", "1"]);
        let glyph = socket_glyph(&pattern, 60);

        assert_eq!(glyph.dimensions(), (60, 60));
        assert_eq!(*glyph.get_pixel(15, 2), socket_color('a'));
        assert_eq!(*glyph.get_pixel(45, 2), socket_color('b'));
        assert_eq!(*glyph.get_pixel(45, 57), socket_color('a'));
        assert_eq!(*glyph.get_pixel(15, 57), socket_color('b'));
        assert_eq!(*glyph.get_pixel(57, 30), socket_color('0'));
        assert_eq!(*glyph.get_pixel(2, 30), socket_color('1'));
        assert_ne!(socket_color('0'), socket_color('1'));
    }

    // Tests pending cells render as an outline on the background
    #[test]
    fn test_render_pending_cells() {
        let solver = uniform_solver(SolverConfig::square(2));
        let rendered = render_grid(&solver, &[split_image(4)], 4).expect("handles resolve");

        assert_eq!(rendered.dimensions(), (8, 8));
        assert_eq!(*rendered.get_pixel(0, 0), Rgba([70, 70, 70, 255]));
        assert_eq!(*rendered.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
    }

    // Tests the solved half is reflected across a mirrored axis
    #[test]
    fn test_render_reflects_mirrored_half() {
        let config = SolverConfig {
            dim_x: 2,
            dim_y: 1,
            mirror_x: true,
            ..SolverConfig::default()
        };
        let mut solver = uniform_solver(config);
        assert!(solver.run(10).expect("single tile never contradicts"));

        let rendered = render_grid(&solver, &[split_image(4)], 4).expect("handles resolve");

        assert_eq!(rendered.dimensions(), (8, 4));
        assert_eq!(*rendered.get_pixel(0, 0), RED);
        assert_eq!(*rendered.get_pixel(3, 0), BLUE);
        assert_eq!(*rendered.get_pixel(4, 0), BLUE);
        assert_eq!(*rendered.get_pixel(7, 0), RED);
    }

    // Tests collapsed tiles draw their image turned by the tile's rotation
    #[test]
    fn test_render_applies_rotation() {
        let catalog = TileCatalog::indexed(&[BasePattern::new(["a", "b", "c", "d"])])
            .expect("valid catalog");
        let mut solver = Solver::new(catalog, SolverConfig::square(1)).expect("valid dimensions");
        assert!(solver.run(10).expect("one cell never contradicts"));
        let rotation = solver.tile_at(0, 0).map(|tile| tile.rotation()).expect("collapsed");

        let marked = RgbaImage::from_fn(4, 4, |x, y| if (x, y) == (0, 0) { RED } else { BLUE });
        let rendered = render_grid(&solver, &[marked], 4).expect("handles resolve");

        let corner = match rotation {
            0 => (0, 0),
            1 => (3, 0),
            2 => (3, 3),
            _ => (0, 3),
        };
        assert_eq!(*rendered.get_pixel(corner.0, corner.1), RED);
    }

    // Tests a tile handle without an image is reported
    #[test]
    fn test_render_missing_image() {
        let mut solver = uniform_solver(SolverConfig::square(1));
        solver.run(10).expect("single tile never contradicts");

        let result = render_grid(&solver, &[], 4);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidTileIndex { index: 0, .. })
        ));
    }

    // Tests a canvas wider than u32 pixels is refused instead of overflowing
    #[test]
    fn test_render_rejects_oversized_canvas() {
        let config = SolverConfig {
            dim_x: 5000,
            dim_y: 1,
            ..SolverConfig::default()
        };
        let solver = uniform_solver(config);

        let result = render_grid(&solver, &[], 1_000_000);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));
    }

    // Tests an odd mirrored extent renders one column short
    #[test]
    fn test_render_odd_mirrored_extent() {
        let config = SolverConfig {
            dim_x: 5,
            dim_y: 1,
            mirror_x: true,
            ..SolverConfig::default()
        };
        let mut solver = uniform_solver(config);
        assert!(solver.run(10).expect("single tile never contradicts"));
        assert_eq!(solver.dims(), (2, 1));

        let rendered = render_grid(&solver, &[split_image(4)], 4).expect("handles resolve");
        assert_eq!(rendered.dimensions(), (16, 4));
    }

    // Tests exported PNGs can be loaded back as tile images
    #[test]
    fn test_export_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let tiles_dir = temp_dir.path().join("tiles");

        export_png(&split_image(8), &tiles_dir.join("0.png")).expect("export succeeds");
        assert!(tiles_dir.join("0.png").exists());

        let loaded = load_tile_images(&tiles_dir, 1, 4).expect("tile loads");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.first().map(RgbaImage::dimensions), Some((4, 4)));
    }

    // Tests a missing tile file names its path
    #[test]
    fn test_load_missing_tile() {
        let temp_dir = tempfile::tempdir().expect("temp dir");

        let result = load_tile_images(temp_dir.path(), 2, 4);
        let Err(AlgorithmError::ImageLoad { path, .. }) = result else {
            unreachable!("missing file must fail to load");
        };
        assert!(path.ends_with("0.png"));
    }
}
