//! Résumé document - personal details, ordered sections and the portfolio gallery

use crate::{ItemId, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Personal Details
// =============================================================================

/// Header block shown on the first page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    /// Photo as a data URL or remote reference
    pub photo: Option<String>,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub location: String,
    pub bio: String,
    pub religion: String,
    /// Date of birth, ISO `YYYY-MM-DD`
    pub dob: String,
}

// =============================================================================
// Section Entries
// =============================================================================

/// A position held, listed under Experience
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default)]
    pub id: ItemId,
    pub job_title: String,
    pub company: String,
    /// ISO `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: String,
    /// ISO `YYYY-MM-DD`; empty while the position is current
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub is_current: bool,
    /// Free text, one bullet per line
    #[serde(default)]
    pub description: String,
}

impl WorkExperience {
    pub fn new(job_title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            job_title: job_title.into(),
            company: company.into(),
            ..Default::default()
        }
    }
}

/// A degree or course, listed under Education
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub id: ItemId,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl Education {
    pub fn new(degree: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            degree: degree.into(),
            institution: institution.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    /// Issue date, ISO `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
}

impl Certificate {
    pub fn new(name: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            issuer: issuer.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
}

// =============================================================================
// Portfolio Gallery
// =============================================================================

/// A showcased project in the portfolio gallery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    #[serde(default)]
    pub id: ItemId,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    /// Image as a data URL or remote reference
    #[serde(default)]
    pub image: Option<String>,
}

impl PortfolioItem {
    pub fn new(project_name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id: ItemId::new(),
            project_name: project_name.into(),
            image,
            ..Default::default()
        }
    }

    /// Whether the item can be placed in the gallery.
    /// Both an image and a project name are required.
    pub fn is_presentable(&self) -> bool {
        let has_image = self.image.as_deref().is_some_and(|image| !image.is_empty());
        has_image && !self.project_name.is_empty()
    }
}

// =============================================================================
// Document
// =============================================================================

/// The complete résumé document.
///
/// List order is the author's chosen order (chronological or curated) and
/// is preserved on every page the document is laid out on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvDocument {
    pub personal: PersonalInfo,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub hobbies: Vec<Hobby>,
    pub portfolio: Vec<PortfolioItem>,
}

impl CvDocument {
    /// Create a document with no content
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a document from the presentation layer's JSON form.
    ///
    /// Entries without an `id` are given a fresh random one, so parsing the
    /// same id-less JSON twice yields documents that compare unequal. Give
    /// every entry an `id` when documents are to be compared.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Item counts of the paginated sections
    pub fn section_lengths(&self) -> crate::SectionLengths {
        crate::SectionLengths {
            experience: self.experience.len(),
            education: self.education.len(),
            certificates: self.certificates.len(),
        }
    }
}
