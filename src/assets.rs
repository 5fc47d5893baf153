//! Story and background resources
//!
//! Resources are read through an [`AssetSource`]: either the set embedded in
//! the binary or a directory on disk.

use std::io::ErrorKind;
use std::path::PathBuf;

use rand::seq::SliceRandom;
use rand::Rng;
use rust_embed::Embed;
use serde::Deserialize;
use tracing::info;

use crate::config::{BACKGROUND_INDEX_FILE, STORIES_FILE};
use crate::error::ResourceError;

/// Resources compiled into the binary
#[derive(Embed)]
#[folder = "resources/"]
pub struct EmbeddedResources;

/// Anything that can hand out resource files by relative path
pub trait AssetSource {
    /// Read the whole file at `path`
    fn fetch(&self, path: &str) -> Result<Vec<u8>, ResourceError>;
}

impl AssetSource for EmbeddedResources {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        EmbeddedResources::get(path)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }
}

/// Resources read from a directory at runtime
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirectorySource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ResourceError::NotFound(full.display().to_string()),
            _ => ResourceError::Unreadable {
                path: full.display().to_string(),
                source: e,
            },
        })
    }
}

/// A story: a title and the lines revealed one per food eaten
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    pub title: String,
    pub steps: Vec<String>,
}

impl Story {
    /// Dialogue line for the given score, cycling through the steps
    pub fn line_for(&self, score: u32) -> String {
        let step = &self.steps[score as usize % self.steps.len()];
        format!("'{}' - {}", self.title, step)
    }
}

#[derive(Debug, Deserialize)]
struct BackgroundIndex {
    backgrounds: Vec<String>,
}

/// Load all stories; every story must have at least one step
pub fn load_stories(source: &dyn AssetSource) -> Result<Vec<Story>, ResourceError> {
    let bytes = source.fetch(STORIES_FILE)?;
    let stories: Vec<Story> =
        serde_json::from_slice(&bytes).map_err(|e| ResourceError::malformed(STORIES_FILE, e))?;

    if stories.is_empty() {
        return Err(ResourceError::malformed(STORIES_FILE, "no stories"));
    }
    if let Some(story) = stories.iter().find(|s| s.steps.is_empty()) {
        return Err(ResourceError::malformed(
            STORIES_FILE,
            format!("story '{}' has no steps", story.title),
        ));
    }

    Ok(stories)
}

/// Load the list of background image paths
pub fn load_background_index(source: &dyn AssetSource) -> Result<Vec<String>, ResourceError> {
    let bytes = source.fetch(BACKGROUND_INDEX_FILE)?;
    let index: BackgroundIndex = serde_json::from_slice(&bytes)
        .map_err(|e| ResourceError::malformed(BACKGROUND_INDEX_FILE, e))?;

    if index.backgrounds.is_empty() {
        return Err(ResourceError::malformed(BACKGROUND_INDEX_FILE, "no backgrounds"));
    }

    Ok(index.backgrounds)
}

/// The story and background picked for this run
#[derive(Debug, Clone)]
pub struct Selection {
    pub story: Story,
    pub background_path: String,
    /// Raw (still encoded) background image
    pub background: Vec<u8>,
}

/// Pick a random story and background and read the background file
pub fn select<R: Rng + ?Sized>(
    source: &dyn AssetSource,
    rng: &mut R,
) -> Result<Selection, ResourceError> {
    let stories = load_stories(source)?;
    let backgrounds = load_background_index(source)?;

    // Both lists were checked to be non-empty
    let story = stories
        .choose(rng)
        .cloned()
        .ok_or_else(|| ResourceError::malformed(STORIES_FILE, "no stories"))?;
    let background_path = backgrounds
        .choose(rng)
        .cloned()
        .ok_or_else(|| ResourceError::malformed(BACKGROUND_INDEX_FILE, "no backgrounds"))?;

    info!(title = %story.title, steps = story.steps.len(), "Story selected");
    info!(path = %background_path, "Background selected");

    let background = source.fetch(&background_path)?;

    Ok(Selection {
        story,
        background_path,
        background,
    })
}
