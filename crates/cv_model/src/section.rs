//! The paginated résumé sections

use serde::{Deserialize, Serialize};

/// One of the variable-length lists split across pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
    Certificates,
}

impl SectionKind {
    /// Every paginated section, in rendering order
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Certificates,
    ];

    /// Get display name for the section heading
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Certificates => "Certificates",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Item count of each paginated section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionLengths {
    pub experience: usize,
    pub education: usize,
    pub certificates: usize,
}

impl SectionLengths {
    pub fn new(experience: usize, education: usize, certificates: usize) -> Self {
        Self {
            experience,
            education,
            certificates,
        }
    }

    pub fn get(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Experience => self.experience,
            SectionKind::Education => self.education,
            SectionKind::Certificates => self.certificates,
        }
    }
}
