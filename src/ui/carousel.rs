//! Carousel: Modal Image Ring
//!
//! Current index into a blank-filtered image list, moved by next and
//! previous controls with wraparound. Every operation on an empty list
//! is a no-op; a populated carousel keeps its index in `[0, len)` at
//! all times.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Build from a primary image plus zero or more extras; blank
    /// entries are filtered out everywhere.
    pub fn new(primary: &str, extras: &[String]) -> Self {
        let mut images: Vec<String> = Vec::with_capacity(1 + extras.len());
        if !primary.trim().is_empty() {
            images.push(primary.trim().to_string());
        }
        for extra in extras {
            let extra = extra.trim();
            if !extra.is_empty() {
                images.push(extra.to_string());
            }
        }
        Self { images, index: 0 }
    }

    pub fn from_images(images: Vec<String>) -> Self {
        let images = images
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        Self { images, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Image at the current index, if any
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advance with wraparound; returns the new current image
    pub fn next(&mut self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.images.len();
        self.current()
    }

    /// Step back with wraparound; returns the new current image
    pub fn prev(&mut self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        self.index = (self.index + self.images.len() - 1) % self.images.len();
        self.current()
    }
}

// =============================================================================
// Tests
// =============================================================================
