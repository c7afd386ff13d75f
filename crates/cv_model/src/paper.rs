//! Supported paper sizes

use serde::{Deserialize, Serialize};

/// Paper sizes a résumé can be laid out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaperSize {
    /// ISO A4 (210mm x 297mm)
    #[default]
    A4,
    /// US Letter (8.5" x 11")
    #[serde(rename = "LETTER")]
    Letter,
}

impl PaperSize {
    /// Every supported paper size, in menu order
    pub const ALL: [PaperSize; 2] = [PaperSize::A4, PaperSize::Letter];

    /// Get display name for the paper size
    pub fn display_name(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
        }
    }
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
