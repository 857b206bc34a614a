//! Page content: decoded from `content/portfolio.json` at startup and resolved
//! against the public base path the site is deployed under.

use serde::Deserialize;
use thiserror::Error;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");
const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");
const PDF_DIRECTORY: &str = "pdf";
const PDF_THUMB_DIRECTORY: &str = "images";

pub const EXPECTED_VIDEO_COUNT: usize = 5;
/// Videos shown beside the profile card; the rest go in the row below.
pub const TOP_VIDEO_COUNT: usize = 3;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to decode portfolio content: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("gallery must contain at least one image")]
    EmptyGallery,
    #[error("expected {expected} videos, found {found}")]
    VideoCount { expected: usize, found: usize },
    #[error("link `{label}` has no target")]
    MissingHref { label: String },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub hero: Hero,
    pub gallery: GallerySource,
    pub profile: Profile,
    pub videos: Vec<Video>,
    pub footer: Footer,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub title: String,
    pub accent: String,
    pub taglines: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GallerySource {
    pub directory: String,
    pub count: usize,
    pub extension: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub photo: String,
    pub korean_name: String,
    pub english_name: String,
    pub phone: String,
    pub email: String,
    pub education: String,
    pub instagram: Link,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Video {
    pub source: String,
    pub poster: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub team_projects: ProjectColumn,
    pub pdfs: PdfColumn,
    pub site: SiteColumn,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProjectColumn {
    pub heading: String,
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub image: String,
    pub alt: String,
    pub link: Link,
    pub role: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PdfColumn {
    pub heading: String,
    pub description: String,
    pub documents: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteColumn {
    pub heading: String,
    pub image: String,
    pub link: Link,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(PORTFOLIO_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.gallery.count == 0 {
            return Err(ContentError::EmptyGallery);
        }

        if self.videos.len() != EXPECTED_VIDEO_COUNT {
            return Err(ContentError::VideoCount {
                expected: EXPECTED_VIDEO_COUNT,
                found: self.videos.len(),
            });
        }

        let links = std::iter::once(&self.profile.instagram)
            .chain(self.footer.team_projects.projects.iter().map(|p| &p.link))
            .chain(std::iter::once(&self.footer.site.link));
        for link in links {
            if link.href.trim().is_empty() {
                return Err(ContentError::MissingHref {
                    label: link.label.clone(),
                });
            }
        }

        Ok(())
    }

    /// Gallery image URLs, numbered from 1.
    pub fn gallery_images(&self) -> Vec<String> {
        let GallerySource {
            directory,
            count,
            extension,
        } = &self.gallery;
        (1..=*count)
            .map(|number| asset_url(&format!("{directory}/{number}.{extension}")))
            .collect()
    }

    pub fn top_videos(&self) -> &[Video] {
        &self.videos[..TOP_VIDEO_COUNT.min(self.videos.len())]
    }

    pub fn bottom_videos(&self) -> &[Video] {
        &self.videos[TOP_VIDEO_COUNT.min(self.videos.len())..]
    }
}

pub fn asset_url(path: &str) -> String {
    join_asset_path(PUBLIC_URL.unwrap_or(""), path)
}

pub fn pdf_url(name: &str) -> String {
    asset_url(&format!("{PDF_DIRECTORY}/{name}.pdf"))
}

pub fn pdf_thumb_url(name: &str) -> String {
    asset_url(&format!("{PDF_THUMB_DIRECTORY}/{name}.png"))
}

fn join_asset_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Splits a multi-line description into display lines.
pub fn text_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
}
