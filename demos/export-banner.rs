use rsans::{AnsiCell, AnsiGrid, ExportOptions, ANSI_COLS, CGA_PALETTE};

fn main() {
    let mut grid = AnsiGrid::default();

    // Frame
    let frame = (CGA_PALETTE[11], CGA_PALETTE[4]);
    grid.print(0, 0, &format!("╔{}╗", "═".repeat(ANSI_COLS - 2)), Some(frame));
    for row in 1..24 {
        grid.set(0, row, AnsiCell::cga('║', 11, 4));
        grid.set(ANSI_COLS - 1, row, AnsiCell::cga('║', 11, 4));
    }
    grid.print(0, 24, &format!("╚{}╝", "═".repeat(ANSI_COLS - 2)), Some(frame));

    // Shaded band with every background color
    for bg in 0..16u8 {
        let col = 8 + bg as usize * 4;
        grid.fill_area(col..col + 4, 8..12, AnsiCell::cga('▒', 15 - bg, bg));
    }
    let text = (CGA_PALETTE[15], CGA_PALETTE[0]);
    grid.print(30, 14, "Hello from rsans!", Some(text));

    let options = ExportOptions::default()
        .with_title("rsans banner")
        .with_author("asciimoth");
    grid.to_ans_file("banner.ans", &options).unwrap();
    println!("wrote banner.ans");
}
