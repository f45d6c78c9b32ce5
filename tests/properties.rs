use proptest::prelude::*;
use rsans::{
    cga_quantize, char_to_cp437, grid_to_ans_bytes, nearest_cga_index, unicode_to_cp437,
    AnsiCell, AnsiGrid, RgbColor, CGA_PALETTE, ANSI_ROWS,
};

fn rgb() -> impl Strategy<Value = RgbColor> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(RgbColor::from)
}

proptest! {
    #[test]
    fn quantize_lands_in_palette(color in rgb()) {
        let q = cga_quantize(color);
        prop_assert!(CGA_PALETTE.contains(&q));
        prop_assert_eq!(q, CGA_PALETTE[nearest_cga_index(color) as usize]);
    }

    #[test]
    fn quantize_picks_minimum_distance(color in rgb()) {
        let best = color.distance_sq(&cga_quantize(color));
        for entry in CGA_PALETTE.iter() {
            prop_assert!(best <= color.distance_sq(entry));
        }
    }

    #[test]
    fn printable_ascii_is_identity(cp in 0x20u8..=0x7E) {
        let s = (cp as char).to_string();
        prop_assert_eq!(unicode_to_cp437(&s), cp);
        prop_assert_eq!(char_to_cp437(cp as char), cp);
    }

    #[test]
    fn export_length_law(
        cells in proptest::collection::vec((any::<char>(), rgb(), rgb()), 1..40),
        start in 0usize..2000,
        title in "[ -~]{0,60}",
    ) {
        let mut grid = AnsiGrid::default();
        for (i, (ch, fg, bg)) in cells.into_iter().enumerate() {
            let pos = start + i;
            grid.set(pos % 80, (pos / 80) % 25, AnsiCell::new(ch, fg, bg));
        }
        let ans = grid_to_ans_bytes(&grid);
        let file = rsans::export_ans_file(&grid, &title);
        prop_assert_eq!(file.len(), ans.len() + 1 + 128);
        prop_assert_eq!(file[ans.len()], 0x1A);
        prop_assert!(ans.ends_with(b"\x1b[0m"));
        let crlf = ans.windows(2).filter(|w| *w == b"\r\n").count();
        prop_assert!(crlf >= ANSI_ROWS);
        let sauce = &file[ans.len() + 1..];
        let size = u32::from_le_bytes([sauce[90], sauce[91], sauce[92], sauce[93]]);
        prop_assert_eq!(size as usize, ans.len());
    }
}
