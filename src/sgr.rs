use crate::{
    colors::nearest_cga_index,
    content::{AnsiCell, AnsiGrid},
    cp437::char_to_cp437,
};

/// Sequence that restores default rendition.
pub const SGR_RESET: &[u8] = b"\x1b[0m";
/// Line terminator between rows.
pub const CRLF: &[u8] = b"\r\n";

/// A pair of CGA palette indices (0..16) for foreground and background.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SgrPair {
    pub fg: u8,
    pub bg: u8,
}

impl SgrPair {
    /// Quantizes the cell colors to the CGA palette.
    pub fn from_cell(cell: &AnsiCell) -> Self {
        Self {
            fg: nearest_cga_index(cell.fg),
            bg: nearest_cga_index(cell.bg),
        }
    }

    /// Returns a full reset-and-set SGR sequence for this pair.
    ///
    /// Bright foregrounds set bold (`1`), bright backgrounds set blink (`5`),
    /// which iCE color viewers show as a bright background.
    pub fn to_sgr(&self) -> String {
        let mut seq = String::from("\x1b[0");
        if self.fg >= 8 {
            seq.push_str(";1");
        }
        if self.bg >= 8 {
            seq.push_str(";5");
        }
        seq += format!(";3{};4{}m", self.fg % 8, self.bg % 8).as_str();
        seq
    }

    /// Returns the SGR sequence only if this pair differs from the previous one;
    /// otherwise returns empty string.
    pub fn to_sgr_rel(&self, prev: &Option<Self>) -> String {
        if Some(*self) != *prev {
            self.to_sgr()
        } else {
            "".into()
        }
    }
}

/// Encodes one row, appending escapes, CP437 bytes and the CRLF terminator
/// to `out`. Returns the number of escape sequences written.
pub(crate) fn encode_row(row: &[AnsiCell], out: &mut Vec<u8>) -> usize {
    let mut prev: Option<SgrPair> = None;
    let mut escapes = 0;
    for cell in row {
        let pair = SgrPair::from_cell(cell);
        let sgr = pair.to_sgr_rel(&prev);
        if !sgr.is_empty() {
            out.extend_from_slice(sgr.as_bytes());
            escapes += 1;
        }
        prev = Some(pair);
        out.push(char_to_cp437(cell.text));
    }
    out.extend_from_slice(CRLF);
    escapes
}

/// Encodes the grid as ANSI art bytes: every row with its color escapes and
/// CP437 characters, each row ended by CRLF, then a final reset.
///
/// The color state is not carried across rows so every row starts with a
/// fresh escape sequence.
pub fn grid_to_ans_bytes(grid: &AnsiGrid) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.width() * grid.height() * 2);
    let mut escapes = 0;
    for row in grid.rows() {
        escapes += encode_row(row, &mut out);
    }
    out.extend_from_slice(SGR_RESET);
    tracing::debug!(
        rows = grid.height(),
        escapes,
        bytes = out.len(),
        "encoded ansi grid"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ANSI_COLS, ANSI_ROWS};
    use pretty_assertions::assert_eq;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn sgr_dark_on_dark() {
        assert_eq!(SgrPair { fg: 7, bg: 0 }.to_sgr(), "\x1b[0;37;40m");
        assert_eq!(SgrPair { fg: 1, bg: 4 }.to_sgr(), "\x1b[0;31;44m");
    }

    #[test]
    fn sgr_bright_folds_into_bold_and_blink() {
        assert_eq!(SgrPair { fg: 15, bg: 0 }.to_sgr(), "\x1b[0;1;37;40m");
        assert_eq!(SgrPair { fg: 3, bg: 12 }.to_sgr(), "\x1b[0;5;33;44m");
        assert_eq!(SgrPair { fg: 8, bg: 9 }.to_sgr(), "\x1b[0;1;5;30;41m");
    }

    #[test]
    fn sgr_rel_suppresses_same_pair() {
        let pair = SgrPair { fg: 2, bg: 0 };
        assert_eq!(pair.to_sgr_rel(&None), pair.to_sgr());
        assert_eq!(pair.to_sgr_rel(&Some(pair)), "");
        assert_eq!(
            pair.to_sgr_rel(&Some(SgrPair { fg: 2, bg: 1 })),
            pair.to_sgr()
        );
    }

    #[test]
    fn run_emits_one_escape() {
        let cell = AnsiCell::cga('A', 7, 0);
        let mut out = Vec::new();
        let escapes = encode_row(&[cell, cell], &mut out);
        assert_eq!(escapes, 1);
        assert_eq!(out, b"\x1b[0;37;40mAA\r\n".to_vec());
    }

    #[test]
    fn color_change_emits_new_escape() {
        let row = [
            AnsiCell::cga('a', 7, 0),
            AnsiCell::cga('b', 14, 0),
            AnsiCell::cga('c', 14, 0),
            AnsiCell::cga('d', 14, 9),
        ];
        let mut out = Vec::new();
        assert_eq!(encode_row(&row, &mut out), 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[0;37;40ma\x1b[0;1;36;40mbc\x1b[0;1;5;36;41md\r\n"
        );
    }

    #[test]
    fn off_palette_colors_are_quantized() {
        let cell = AnsiCell::new(
            'x',
            "fa5050".parse().unwrap(),
            "0a0a0a".parse().unwrap(),
        );
        let mut out = Vec::new();
        encode_row(&[cell], &mut out);
        assert_eq!(out, b"\x1b[0;1;31;40mx\r\n".to_vec());
    }

    #[test]
    fn non_ascii_written_as_single_bytes() {
        let row = [AnsiCell::cga('█', 7, 0), AnsiCell::cga('🎉', 7, 0)];
        let mut out = Vec::new();
        encode_row(&row, &mut out);
        assert_eq!(&out[10..], &[0xDB, 0x20, b'\r', b'\n']);
    }

    #[test]
    fn every_row_restarts_color_state() {
        let grid = AnsiGrid::default();
        let bytes = grid_to_ans_bytes(&grid);
        assert_eq!(count(&bytes, b"\x1b[0;37;40m"), ANSI_ROWS);
        assert_eq!(count(&bytes, CRLF), ANSI_ROWS);
        assert!(bytes.ends_with(b"\r\n\x1b[0m"));
        assert_eq!(
            bytes.len(),
            ANSI_ROWS * (10 + ANSI_COLS + 2) + SGR_RESET.len()
        );
    }
}
