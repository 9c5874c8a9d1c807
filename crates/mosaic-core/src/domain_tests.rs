//! Domain-critical regression tests for mosaic-core.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use std::sync::Arc;

    use crate::api::{MosaicBuilder, MosaicError};
    use crate::color::{Lab, Rgb};
    use crate::editor::{BoardLayout, EditorOptions, EditorSession, Point, ZoomLimits};
    use crate::output::MosaicResult;
    use crate::palette::Palette;
    use crate::partition::{assemble, GridSpec};
    use crate::quantize::{RasterError, SourceRaster};

    fn two_tone() -> Palette {
        Palette::from_hex(&[("K", "#000000"), ("W", "#FFFFFF")]).unwrap()
    }

    fn small_palette() -> Palette {
        Palette::from_hex(&[
            ("Black", "#000000"),
            ("White", "#FFFFFF"),
            ("Red", "#C91A09"),
            ("Blue", "#0055BF"),
            ("Green", "#237841"),
            ("Yellow", "#F2CD37"),
        ])
        .unwrap()
    }

    /// Deterministic pseudo-random raster.
    fn noisy(width: u32, height: u32, seed: u32) -> SourceRaster {
        let mut state = seed.wrapping_mul(2_654_435_761).max(1);
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xFF) as u8
        };
        let pixels = (0..width * height)
            .map(|_| Rgb::new(next(), next(), next()))
            .collect();
        SourceRaster::new(width, height, pixels).unwrap()
    }

    // ========================================================================
    // Pipeline contract
    // ========================================================================

    /// If this breaks, the basic pipeline contract is gone: a 2x2 dark-grey
    /// raster on a 1x1 grid of tile 2 must become one board of four K cells.
    #[test]
    fn test_minimal_example() {
        let builder = MosaicBuilder::new(two_tone()).tile_size(2);
        let grid = builder.grid("1x1").unwrap();
        let raster = SourceRaster::filled(2, 2, Rgb::new(10, 10, 10)).unwrap();
        let mosaic = builder.build(&raster, &grid).unwrap();

        assert_eq!(mosaic.total_cells(), 4);
        let usage = mosaic.color_usage().entries();
        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].color.name, "K");
        assert_eq!(usage[0].count, 4);
        assert_eq!(mosaic.boards().len(), 1);
        let board = mosaic.boards().get("A1").unwrap();
        assert!(board.pixels().iter().all(|&c| c == Rgb::BLACK));
    }

    /// If this breaks, quantized pixels have escaped the palette or usage no
    /// longer adds up to the pixel count.
    #[test]
    fn test_quantized_pixels_are_palette_colors() {
        let palette = small_palette();
        let builder = MosaicBuilder::new(palette.clone()).tile_size(4);
        let grid = builder.grid("3x2").unwrap();
        let raster = noisy(12, 8, 7);
        let mosaic = builder.build(&raster, &grid).unwrap();

        for &px in mosaic.quantized().pixels() {
            assert!(palette.position_of(px).is_some(), "{} not in palette", px);
        }
        assert_eq!(mosaic.color_usage().total(), 96);
        assert_eq!(mosaic.total_cells(), 96);
    }

    /// If this breaks, quantization is not a pure function of its input.
    #[test]
    fn test_pipeline_is_deterministic() {
        let builder = MosaicBuilder::new(small_palette()).tile_size(4);
        let grid = builder.grid("2x2").unwrap();
        let raster = noisy(8, 8, 42);
        let a = builder.build(&raster, &grid).unwrap();
        let b = builder.build(&raster, &grid).unwrap();
        assert_eq!(a, b);
    }

    /// If this breaks, a palette color survives quantization changed, which
    /// means the Lab conversion or the scan is no longer exact.
    #[test]
    fn test_palette_colors_are_fixed_points() {
        let palette = small_palette();
        for entry in palette.iter() {
            assert_eq!(palette.nearest(entry.rgb).rgb, entry.rgb, "{}", entry);
        }
    }

    /// If this breaks, a cell was matched to a color that is not the
    /// nearest in L*a*b*, or a tie went to a later entry.
    #[test]
    fn test_every_cell_matches_brute_force_nearest() {
        let palette = small_palette();
        let builder = MosaicBuilder::new(palette.clone()).tile_size(4);
        let grid = builder.grid("2x2").unwrap();

        for seed in [1, 9, 23, 77] {
            let raster = noisy(8, 8, seed);
            let mosaic = builder.build(&raster, &grid).unwrap();

            for (&src, &out) in raster.pixels().iter().zip(mosaic.quantized().pixels()) {
                let lab = Lab::from(src);
                let dists: Vec<f64> = (0..palette.len())
                    .map(|i| lab.distance(palette.lab(i)))
                    .collect();
                let min = dists.iter().copied().fold(f64::MAX, f64::min);
                let first = dists.iter().position(|&d| d == min).unwrap();

                let matched = palette.position_of(out).unwrap();
                assert_eq!(dists[matched], min, "{src} -> {out} is not nearest");
                assert_eq!(matched, first, "{src} tie went past entry {first}");
            }
        }
    }

    /// Equidistant candidates go to the earliest palette entry.
    #[test]
    fn test_equidistant_tie_takes_first_entry() {
        let palette = Palette::from_hex(&[("W", "#FFFFFF"), ("K", "#000000"), ("W2", "#FFFFFF")])
            .unwrap();
        let builder = MosaicBuilder::new(palette).tile_size(1);
        let grid = builder.grid("1x1").unwrap();
        let raster = SourceRaster::filled(1, 1, Rgb::new(250, 250, 250)).unwrap();
        let mosaic = builder.build(&raster, &grid).unwrap();
        assert_eq!(mosaic.color_usage().entries()[0].color.name, "W");
    }

    /// If this breaks, tie-breaking no longer prefers the earliest entry.
    #[test]
    fn test_duplicate_values_resolve_to_first_name() {
        let palette =
            Palette::from_hex(&[("First", "#808080"), ("Second", "#808080"), ("W", "#FFFFFF")])
                .unwrap();
        let builder = MosaicBuilder::new(palette).tile_size(1);
        let grid = builder.grid("1x1").unwrap();
        let raster = SourceRaster::filled(1, 1, Rgb::new(120, 120, 120)).unwrap();
        let mosaic = builder.build(&raster, &grid).unwrap();
        assert_eq!(mosaic.color_usage().entries()[0].color.name, "First");
    }

    /// If this breaks, a misfit raster produces partial output instead of
    /// being rejected.
    #[test]
    fn test_contract_violations_fail_fast() {
        let builder = MosaicBuilder::new(two_tone()).tile_size(4);
        let grid = builder.grid("2x2").unwrap();

        let misaligned = SourceRaster::filled(6, 8, Rgb::BLACK).unwrap();
        assert!(matches!(
            builder.build(&misaligned, &grid),
            Err(MosaicError::Raster(RasterError::NotTileAligned { .. }))
        ));

        let oversized = SourceRaster::filled(12, 8, Rgb::BLACK).unwrap();
        assert!(matches!(
            builder.build(&oversized, &grid),
            Err(MosaicError::Raster(RasterError::GridMismatch { .. }))
        ));

        let undersized = SourceRaster::filled(4, 4, Rgb::BLACK).unwrap();
        assert!(matches!(
            builder.build(&undersized, &grid),
            Err(MosaicError::Raster(RasterError::GridMismatch { .. }))
        ));

        assert!(matches!(builder.grid("0"), Err(MosaicError::Grid(_))));
    }

    // ========================================================================
    // Partitioning
    // ========================================================================

    /// If this breaks, boards no longer tile the quantized raster exactly.
    #[test]
    fn test_reassembly_reproduces_raster() {
        let builder = MosaicBuilder::new(small_palette()).tile_size(4);
        let grid = builder.grid("4x2").unwrap();
        let raster = noisy(16, 8, 3);
        let mosaic = builder.build(&raster, &grid).unwrap();

        assert_eq!(&assemble(mosaic.boards()), mosaic.quantized());
    }

    /// If this breaks, board labels or their order changed.
    #[test]
    fn test_two_by_two_labels() {
        let builder = MosaicBuilder::new(two_tone()).tile_size(2);
        let grid = builder.grid("2x2").unwrap();
        let raster = SourceRaster::filled(4, 4, Rgb::BLACK).unwrap();
        let mosaic = builder.build(&raster, &grid).unwrap();
        let ids: Vec<&str> = mosaic.boards().iter().map(|b| b.id()).collect();
        assert_eq!(ids, ["A1", "B1", "A2", "B2"]);
    }

    /// If this breaks, a raster smaller than the grid is padded again and
    /// a huge board count turns a tiny upload into a huge allocation.
    #[test]
    fn test_small_raster_on_large_grid_is_rejected() {
        let builder = MosaicBuilder::new(two_tone()).tile_size(2);
        let raster = SourceRaster::filled(2, 2, Rgb::BLACK).unwrap();

        for boards in ["2x2", "1000000"] {
            let grid = builder.grid(boards).unwrap();
            assert_eq!(
                builder.build(&raster, &grid),
                Err(MosaicError::Raster(RasterError::GridMismatch {
                    width: 2,
                    height: 2,
                    grid_width: grid.width(),
                    grid_height: grid.height(),
                }))
            );
        }
    }

    /// If this breaks, color usage no longer accounts for every cell.
    #[test]
    fn test_usage_covers_every_cell() {
        let builder = MosaicBuilder::new(small_palette()).tile_size(2);
        for (boards, w, h) in [("1x1", 2, 2), ("2x2", 4, 4), ("3x2", 6, 4), ("5", 6, 6)] {
            let grid = builder.grid(boards).unwrap();
            let mosaic = builder.build(&noisy(w, h, w * h), &grid).unwrap();
            assert_eq!(mosaic.color_usage().total(), mosaic.total_cells(), "{boards}");
        }
    }

    // ========================================================================
    // Editing
    // ========================================================================

    fn session(tile: u32) -> EditorSession {
        let palette = small_palette();
        let builder = MosaicBuilder::new(palette.clone()).tile_size(tile);
        let grid = GridSpec::new(2, 2, tile).unwrap();
        let raster = noisy(2 * tile, 2 * tile, 11);
        let mosaic = builder.build(&raster, &grid).unwrap();
        let options = EditorOptions {
            layout: BoardLayout {
                cell_size: 1.0,
                board_gap: 0.0,
            },
            zoom_limits: ZoomLimits::default(),
        };
        EditorSession::with_options(mosaic, Arc::new(palette), options)
    }

    /// If this breaks, a long edit history no longer unwinds to the
    /// original boards, or redo no longer replays it.
    #[test]
    fn test_undo_all_then_redo_all() {
        let mut s = session(8);
        let original = s.boards().clone();
        let colors = [Rgb::BLACK, Rgb::WHITE, Rgb::new(0x23, 0x78, 0x41)];

        for stroke in 0..10u32 {
            let color = colors[stroke as usize % colors.len()];
            s.begin_paint(Point::new(stroke as f64 + 0.5, 0.5), color);
            for step in 0..6u32 {
                let v = ((stroke * 7 + step * 3) % 16) as f64 + 0.5;
                s.continue_paint(Point::new(v, (step * 2) as f64 + 0.5));
            }
            s.end_paint();
        }
        let edited = s.boards().clone();

        while s.undo() {}
        assert_eq!(s.boards(), &original);
        while s.redo() {}
        assert_eq!(s.boards(), &edited);
    }

    /// If this breaks, a stroke crossing the same cell twice records the
    /// painted color as the cell's original.
    #[test]
    fn test_first_touch_wins_across_stroke() {
        let mut s = session(4);
        let original = s.boards().clone();
        s.begin_paint(Point::new(0.5, 0.5), Rgb::new(0xC9, 0x1A, 0x09));
        s.continue_paint(Point::new(1.5, 0.5));
        s.continue_paint(Point::new(0.5, 0.5));
        s.continue_paint(Point::new(5.5, 5.5));
        s.end_paint();

        s.undo();
        assert_eq!(s.boards(), &original);
    }

    /// If this breaks, snapshots after editing drift from the live boards.
    #[test]
    fn test_snapshot_matches_boards() {
        let mut s = session(4);
        s.begin_paint(Point::new(6.5, 6.5), Rgb::BLACK);
        s.end_paint();
        let snap = s.snapshot();
        let rebuilt = MosaicResult::from_boards(s.boards().clone(), &small_palette());
        assert_eq!(snap, rebuilt);
        assert_eq!(snap.quantized().get(6, 6), Some(Rgb::BLACK));
        assert_eq!(snap.color_usage().total(), snap.total_cells());
    }
}
