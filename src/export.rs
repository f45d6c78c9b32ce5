use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::content::AnsiGrid;
use crate::error::Result;
use crate::sauce::{SauceRecord, SAUCE_LEN};
use crate::sgr::grid_to_ans_bytes;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "untitled";
/// MS-DOS end of file marker; viewers stop rendering here.
pub const EOF_MARKER: u8 = 0x1A;

/// Settings for an `.ans` export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub title: String,
    pub author: Option<String>,
    pub group: Option<String>,
    /// Date stored in the SAUCE record; today when `None`.
    pub date: Option<NaiveDate>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            author: None,
            group: None,
            date: None,
        }
    }
}

impl ExportOptions {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.into());
        self
    }
    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.into());
        self
    }
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Builds the SAUCE record for a payload of `file_size` bytes.
    pub fn sauce(&self, file_size: usize) -> SauceRecord {
        let mut record = match self.date {
            Some(date) => SauceRecord::with_date(&self.title, file_size, date),
            None => SauceRecord::new(&self.title, file_size),
        };
        record.author = self.author.clone();
        record.group = self.group.clone();
        record
    }
}

/// Exports the grid as a complete `.ans` file: the encoded art, the EOF
/// marker and a SAUCE record carrying `title`.
pub fn export_ans_file(grid: &AnsiGrid, title: &str) -> Vec<u8> {
    export_ans_file_with(grid, &ExportOptions::default().with_title(title))
}

/// Same as [`export_ans_file`] with full control over the SAUCE fields.
pub fn export_ans_file_with(grid: &AnsiGrid, options: &ExportOptions) -> Vec<u8> {
    let ans = grid_to_ans_bytes(grid);
    let file_size = ans.len();
    let sauce = options.sauce(file_size).to_bytes();

    let mut out = Vec::with_capacity(file_size + 1 + SAUCE_LEN);
    out.extend_from_slice(&ans);
    out.push(EOF_MARKER);
    out.extend_from_slice(&sauce);
    tracing::debug!(
        title = %options.title,
        file_size,
        total = out.len(),
        "exported ans file"
    );
    out
}

/// Writes the exported file to `w`.
pub fn write_ans_file<W: Write>(
    w: &mut W,
    grid: &AnsiGrid,
    options: &ExportOptions,
) -> Result<()> {
    w.write_all(&export_ans_file_with(grid, options))?;
    w.flush()?;
    Ok(())
}

impl AnsiGrid {
    /// Writes the grid as an `.ans` file.
    pub fn to_ans_file<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ExportOptions,
    ) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        write_ans_file(&mut file, self, options)
    }
}
