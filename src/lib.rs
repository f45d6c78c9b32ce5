//! Export of 80x25 colored character grids as classic `.ans` ANSI art
//! files with a SAUCE metadata trailer.
pub mod colors;
pub mod content;
pub mod cp437;
pub mod error;
pub mod export;
pub mod sauce;
pub mod sgr;
mod helpers;

pub use colors::{cga_quantize, nearest_cga_index, RgbColor, CGA_PALETTE};
pub use content::{AnsiCell, AnsiGrid, ANSI_COLS, ANSI_ROWS};
pub use cp437::{char_to_cp437, cp437_to_char, unicode_to_cp437, CP437_TABLE};
pub use error::{Error, Result};
pub use export::{export_ans_file, export_ans_file_with, write_ans_file, ExportOptions};
pub use sauce::{build_sauce_record, SauceRecord};
pub use sgr::{grid_to_ans_bytes, SgrPair};
