use crate::cp437::char_to_cp437;

/// Writes `text` into `field`, truncating to the field length and padding
/// the remainder with `pad`. ASCII is copied byte for byte, anything else
/// goes through the CP437 codec. Returns true if the text was truncated.
pub(crate) fn put_text_field(field: &mut [u8], text: &str, pad: u8) -> bool {
    let mut chars = text.chars();
    for slot in field.iter_mut() {
        *slot = match chars.next() {
            Some(ch) if ch.is_ascii() => ch as u8,
            Some(ch) => char_to_cp437(ch),
            None => pad,
        };
    }
    chars.next().is_some()
}
