//! ProjectDetails: Modal Content Model
//!
//! Parsed from a project card's dataset attributes. A missing or
//! unparseable links payload is an explicit "no links" state, never a
//! failed modal open; blank image entries are filtered before they
//! reach the carousel.

use serde::{Deserialize, Serialize};

use crate::ui::carousel::Carousel;

// =============================================================================
// Types
// =============================================================================

/// One external link shown in the modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// Everything the modal displays for one project card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub links: Vec<ProjectLink>,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse the links dataset attribute (a JSON array). Anything that
/// does not parse folds to the empty list.
pub fn parse_links(json: &str) -> Vec<ProjectLink> {
    serde_json::from_str(json).unwrap_or_default()
}

impl ProjectDetails {
    /// Assemble from raw dataset values as read off a project card.
    /// `extra_images` is a comma-separated list; `links_json` a JSON
    /// array of `{label, url}` objects.
    pub fn from_dataset(
        title: Option<String>,
        description: Option<String>,
        image: Option<String>,
        extra_images: Option<String>,
        links_json: Option<String>,
    ) -> Self {
        let mut images: Vec<String> = Vec::new();
        if let Some(primary) = image {
            let primary = primary.trim();
            if !primary.is_empty() {
                images.push(primary.to_string());
            }
        }
        if let Some(extras) = extra_images {
            for part in extras.split(',') {
                let part = part.trim();
                if !part.is_empty() {
                    images.push(part.to_string());
                }
            }
        }

        let links = links_json.as_deref().map(parse_links).unwrap_or_default();

        Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            images,
            links,
        }
    }

    /// Carousel over this project's images
    pub fn carousel(&self) -> Carousel {
        Carousel::from_images(self.images.clone())
    }
}

// =============================================================================
// Tests
// =============================================================================
