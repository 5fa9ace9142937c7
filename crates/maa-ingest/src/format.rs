use std::fmt;

/// Input formats, dispatched on filename extension only. Content sniffing
/// is deliberately not done: the upload boundary already trusts the name
/// it stored the bytes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Tsv,
    Xlsx,
    Xls,
}

impl FileFormat {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 4] = ["csv", "tsv", "xlsx", "xls"];

    /// Resolves a format from the filename's extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
        }
    }

    /// Delimiter byte for the delimited-text formats.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Xlsx | Self::Xls => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
