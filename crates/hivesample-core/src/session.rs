use std::path::PathBuf;

use tracing::warn;

use crate::config::DebayerConfig;
use crate::photo::Photo;

/// The working set of photos opened for review, with a cursor.
#[derive(Debug, Default)]
pub struct PhotoSet {
    photos: Vec<Photo>,
    current: Option<usize>,
}

impl PhotoSet {
    /// Open every path, skipping files that fail to load or are not photos.
    pub fn open<I>(paths: I, debayer_config: &DebayerConfig) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let photos: Vec<Photo> = paths
            .into_iter()
            .filter_map(|path| match Photo::open(&path, debayer_config) {
                Ok(photo) => Some(photo),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping file");
                    None
                }
            })
            .collect();
        let current = if photos.is_empty() { None } else { Some(0) };
        Self { photos, current }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Photo> {
        self.current.map(|i| &self.photos[i])
    }

    pub fn current_mut(&mut self) -> Option<&mut Photo> {
        self.current.map(|i| &mut self.photos[i])
    }

    /// Move to the next photo, stopping at the last one.
    pub fn step_forward(&mut self) -> Option<&Photo> {
        if let Some(i) = self.current {
            self.current = Some((i + 1).min(self.photos.len() - 1));
        }
        self.current()
    }

    /// Move to the previous photo, stopping at the first one.
    pub fn step_back(&mut self) -> Option<&Photo> {
        if let Some(i) = self.current {
            self.current = Some(i.saturating_sub(1));
        }
        self.current()
    }

    pub fn has_next(&self) -> bool {
        self.current.is_some_and(|i| i + 1 < self.photos.len())
    }

    pub fn has_previous(&self) -> bool {
        self.current.is_some_and(|i| i > 0)
    }
}
