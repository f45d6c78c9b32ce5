//! Code page 437 character codec.
//!
//! CP437 is the character set of the IBM PC text mode, so ANSI art viewers
//! expect every cell to be a single CP437 byte. Printable ASCII maps onto
//! itself; everything else goes through [`CP437_TABLE`].

/// Byte emitted for characters that have no CP437 representation.
pub const SPACE: u8 = 0x20;

/// The CP437 glyph set; the index is the byte code.
pub static CP437_TABLE: [char; 256] = [
    '\u{0000}', '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼',
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼',
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '~', '⌂',
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Converts a single character to its CP437 byte.
///
/// Printable ASCII (`0x20..=0x7E`) is returned as is without consulting the
/// table. Characters missing from the table become a space.
pub fn char_to_cp437(ch: char) -> u8 {
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) {
        return cp as u8;
    }
    match CP437_TABLE.iter().position(|&c| c == ch) {
        Some(idx) => idx as u8,
        None => {
            tracing::trace!(ch = %ch.escape_unicode(), "no cp437 glyph, using space");
            SPACE
        }
    }
}

/// Converts a cell string to its CP437 byte.
///
/// The string must hold exactly one character to be looked up; empty
/// strings and multi-character graphemes (emoji sequences and the like)
/// become a space.
pub fn unicode_to_cp437(s: &str) -> u8 {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => char_to_cp437(ch),
        _ => SPACE,
    }
}

/// Returns the glyph for a CP437 byte.
pub fn cp437_to_char(byte: u8) -> char {
    CP437_TABLE[byte as usize]
}

/// Encodes every character of a string with [`char_to_cp437`].
pub fn encode_str(s: &str) -> Vec<u8> {
    s.chars().map(char_to_cp437).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn printable_ascii_is_identity() {
        for cp in 0x20u8..=0x7E {
            assert_eq!(char_to_cp437(cp as char), cp);
            assert_eq!(CP437_TABLE[cp as usize], cp as char);
        }
    }

    #[test]
    fn empty_and_unmapped_become_space() {
        assert_eq!(unicode_to_cp437(""), SPACE);
        assert_eq!(unicode_to_cp437("🎉"), SPACE);
        assert_eq!(unicode_to_cp437("★"), SPACE);
        assert_eq!(unicode_to_cp437("ab"), SPACE);
    }

    #[test]
    fn dos_symbol_glyphs() {
        assert_eq!(unicode_to_cp437("☺"), 0x01);
        assert_eq!(unicode_to_cp437("♥"), 0x03);
        assert_eq!(unicode_to_cp437("▼"), 0x1F);
        assert_eq!(unicode_to_cp437("⌂"), 0x7F);
        assert_eq!(unicode_to_cp437("\u{0000}"), 0x00);
    }

    #[test]
    fn box_drawing_and_blocks() {
        assert_eq!(encode_str("┌──┐"), vec![0xDA, 0xC4, 0xC4, 0xBF]);
        assert_eq!(encode_str("╔═╗"), vec![0xC9, 0xCD, 0xBB]);
        assert_eq!(encode_str("░▒▓█"), vec![0xB0, 0xB1, 0xB2, 0xDB]);
        assert_eq!(encode_str("▄▌▐▀"), vec![0xDC, 0xDD, 0xDE, 0xDF]);
    }

    #[test]
    fn accented_and_math() {
        assert_eq!(encode_str("Café"), vec![0x43, 0x61, 0x66, 0x82]);
        assert_eq!(unicode_to_cp437("Ç"), 0x80);
        assert_eq!(unicode_to_cp437("ƒ"), 0x9F);
        assert_eq!(unicode_to_cp437("ß"), 0xE1);
        assert_eq!(unicode_to_cp437("■"), 0xFE);
        assert_eq!(unicode_to_cp437("\u{00A0}"), 0xFF);
    }

    #[test]
    fn table_round_trips() {
        for byte in 0u8..=255 {
            assert_eq!(char_to_cp437(cp437_to_char(byte)), byte);
        }
    }
}
