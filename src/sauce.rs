//! SAUCE metadata record.
//!
//! SAUCE is a fixed 128 byte trailer that ANSI art viewers read to learn the
//! title, author, canvas size and rendering flags of a file. Multi-byte
//! integers are little-endian.

use chrono::{Datelike, NaiveDate};
use std::convert::TryFrom;

use crate::{
    content::{ANSI_COLS, ANSI_ROWS},
    helpers::put_text_field,
};

/// Size of a serialized record.
pub const SAUCE_LEN: usize = 128;
pub const SAUCE_ID: &[u8; 5] = b"SAUCE";
pub const SAUCE_VERSION: &[u8; 2] = b"00";

pub const TITLE_LEN: usize = 35;
pub const AUTHOR_LEN: usize = 20;
pub const GROUP_LEN: usize = 20;
pub const TINFOS_LEN: usize = 22;

/// `DataType` value for character based files.
pub const DATA_TYPE_CHARACTER: u8 = 1;
/// `FileType` value for ANSI files within the character data type.
pub const FILE_TYPE_ANSI: u8 = 1;
/// `TFlags` bit selecting bright backgrounds instead of blink.
pub const TFLAG_ICE_COLORS: u8 = 0x01;
/// Font name stored in `TInfoS`.
pub const FONT_IBM_VGA: &str = "IBM VGA";

// Field offsets.
const OFF_VERSION: usize = 5;
const OFF_TITLE: usize = 7;
const OFF_AUTHOR: usize = 42;
const OFF_GROUP: usize = 62;
const OFF_DATE: usize = 82;
const OFF_FILE_SIZE: usize = 90;
const OFF_DATA_TYPE: usize = 94;
const OFF_FILE_TYPE: usize = 95;
const OFF_TINFO1: usize = 96;
const OFF_TINFO2: usize = 98;
const OFF_TFLAGS: usize = 105;
const OFF_TINFOS: usize = 106;

/// The fields of a SAUCE record describing an ANSI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SauceRecord {
    pub title: String,
    /// Left blank (spaces) when unset.
    pub author: Option<String>,
    /// Left blank (spaces) when unset.
    pub group: Option<String>,
    pub date: NaiveDate,
    /// Length of the art payload, without the EOF marker and this record.
    pub file_size: u32,
    pub data_type: u8,
    pub file_type: u8,
    /// Width in characters.
    pub t_info1: u16,
    /// Height in characters.
    pub t_info2: u16,
    pub t_flags: u8,
    pub t_info_s: String,
}

impl SauceRecord {
    /// Creates a record for an 80x25 iCE color ANSI file dated today.
    pub fn new(title: &str, file_size: usize) -> Self {
        Self::with_date(title, file_size, chrono::Local::now().date_naive())
    }

    /// Creates a record for an 80x25 iCE color ANSI file with a fixed date.
    /// Sizes beyond `u32::MAX` saturate.
    pub fn with_date(title: &str, file_size: usize, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            author: None,
            group: None,
            date,
            file_size: u32::try_from(file_size).unwrap_or(u32::MAX),
            data_type: DATA_TYPE_CHARACTER,
            file_type: FILE_TYPE_ANSI,
            t_info1: ANSI_COLS as u16,
            t_info2: ANSI_ROWS as u16,
            t_flags: TFLAG_ICE_COLORS,
            t_info_s: FONT_IBM_VGA.into(),
        }
    }

    /// Serializes the record. Text fields longer than their slot are
    /// truncated; shorter ones are padded with spaces (`TInfoS` with NULs).
    pub fn to_bytes(&self) -> [u8; SAUCE_LEN] {
        let mut buf = [0u8; SAUCE_LEN];
        buf[..OFF_VERSION].copy_from_slice(SAUCE_ID);
        buf[OFF_VERSION..OFF_TITLE].copy_from_slice(SAUCE_VERSION);

        if put_text_field(&mut buf[OFF_TITLE..OFF_AUTHOR], &self.title, b' ') {
            tracing::debug!(title = %self.title, max = TITLE_LEN, "sauce title truncated");
        }
        let author = self.author.as_deref().unwrap_or("");
        if put_text_field(&mut buf[OFF_AUTHOR..OFF_GROUP], author, b' ') {
            tracing::debug!(author, max = AUTHOR_LEN, "sauce author truncated");
        }
        let group = self.group.as_deref().unwrap_or("");
        if put_text_field(&mut buf[OFF_GROUP..OFF_DATE], group, b' ') {
            tracing::debug!(group, max = GROUP_LEN, "sauce group truncated");
        }
        put_text_field(&mut buf[OFF_DATE..OFF_FILE_SIZE], &date_field(self.date), b'0');

        buf[OFF_FILE_SIZE..OFF_DATA_TYPE].copy_from_slice(&self.file_size.to_le_bytes());
        buf[OFF_DATA_TYPE] = self.data_type;
        buf[OFF_FILE_TYPE] = self.file_type;
        buf[OFF_TINFO1..OFF_TINFO2].copy_from_slice(&self.t_info1.to_le_bytes());
        buf[OFF_TINFO2..OFF_TINFO2 + 2].copy_from_slice(&self.t_info2.to_le_bytes());
        // TInfo3, TInfo4 and the comment count stay zero
        buf[OFF_TFLAGS] = self.t_flags;
        put_text_field(&mut buf[OFF_TINFOS..], &self.t_info_s, 0);
        buf
    }
}

/// Formats the `YYYYMMDD` date field. Years outside 0..=9999 are clamped so
/// the field always holds eight ASCII digits.
fn date_field(date: NaiveDate) -> String {
    let year = date.year().max(0).min(9999);
    if year != date.year() {
        tracing::debug!(%date, year, "sauce date year clamped");
    }
    format!("{:04}{:02}{:02}", year, date.month(), date.day())
}

/// Builds the serialized SAUCE record for an 80x25 ANSI file of
/// `file_size` bytes, dated today.
pub fn build_sauce_record(title: &str, file_size: usize) -> [u8; SAUCE_LEN] {
    SauceRecord::new(title, file_size).to_bytes()
}
