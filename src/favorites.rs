//! Favourite colour storage.
//!
//! [`FavoritesStore`] is the seam between the light panel and wherever saved
//! samples live. Two stores are provided: [`JsonFavoritesStore`] keeps a JSON
//! file on disk, [`MemoryFavoritesStore`] keeps everything in memory.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sample::ColorSample;

/// Current favourites file format version.
pub const FAVORITES_VERSION: u32 = 1;

/// Errors raised while saving, loading or deleting favourites.
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O error while reading or writing the favourites file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Favourites file could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No sample with this id exists
    #[error("Favourite not found: {0}")]
    NotFound(u64),

    /// File written by a newer version of the app
    #[error("Unsupported favourites version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Highest version this build reads
        supported: u32,
    },
}

/// Save, list and delete favourite colours.
pub trait FavoritesStore {
    /// Capture and persist a new sample, returning it.
    fn save(
        &mut self,
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
    ) -> Result<ColorSample, StorageError>;

    /// All samples, newest first.
    fn list_all(&self) -> Vec<ColorSample>;

    /// Remove the sample with `id`.
    fn delete(&mut self, id: u64) -> Result<(), StorageError>;
}

impl<T: FavoritesStore + ?Sized> FavoritesStore for Box<T> {
    fn save(
        &mut self,
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
    ) -> Result<ColorSample, StorageError> {
        (**self).save(hue_position, brightness_percent, screen_brightness)
    }

    fn list_all(&self) -> Vec<ColorSample> {
        (**self).list_all()
    }

    fn delete(&mut self, id: u64) -> Result<(), StorageError> {
        (**self).delete(id)
    }
}

/// Newest first; ids break ties so samples saved within one clock tick keep
/// a stable order.
fn newest_first(a: &ColorSample, b: &ColorSample) -> Ordering {
    b.captured_at()
        .cmp(&a.captured_at())
        .then_with(|| b.id().cmp(&a.id()))
}

/// On-disk layout of the favourites file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    next_id: u64,
    samples: Vec<ColorSample>,
}

impl FavoritesFile {
    fn empty() -> Self {
        Self {
            version: FAVORITES_VERSION,
            next_id: 1,
            samples: Vec::new(),
        }
    }

    fn push(
        &mut self,
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
    ) -> ColorSample {
        let sample = ColorSample::new(
            self.next_id,
            hue_position,
            brightness_percent,
            screen_brightness,
        );
        self.next_id += 1;
        self.samples.push(sample.clone());
        sample
    }

    fn remove(&mut self, id: u64) -> Result<ColorSample, StorageError> {
        let index = self
            .samples
            .iter()
            .position(|s| s.id() == id)
            .ok_or(StorageError::NotFound(id))?;
        Ok(self.samples.remove(index))
    }

    fn sorted(&self) -> Vec<ColorSample> {
        let mut samples = self.samples.clone();
        samples.sort_by(newest_first);
        samples
    }
}

/// Favourites kept only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct MemoryFavoritesStore {
    file: FavoritesFile,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        Self {
            file: FavoritesFile::empty(),
        }
    }
}

impl Default for MemoryFavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesStore for MemoryFavoritesStore {
    fn save(
        &mut self,
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
    ) -> Result<ColorSample, StorageError> {
        Ok(self
            .file
            .push(hue_position, brightness_percent, screen_brightness))
    }

    fn list_all(&self) -> Vec<ColorSample> {
        self.file.sorted()
    }

    fn delete(&mut self, id: u64) -> Result<(), StorageError> {
        self.file.remove(id).map(|_| ())
    }
}

/// Favourites persisted to a JSON file.
///
/// Every mutation rewrites the whole file through a sibling `.tmp` file and a
/// rename. When the write fails the in-memory list is restored, so memory
/// never holds samples the file does not.
#[derive(Debug)]
pub struct JsonFavoritesStore {
    path: PathBuf,
    file: FavoritesFile,
}

impl JsonFavoritesStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(json) => {
                let file: FavoritesFile = serde_json::from_str(&json)?;
                if file.version > FAVORITES_VERSION {
                    return Err(StorageError::UnsupportedVersion {
                        found: file.version,
                        supported: FAVORITES_VERSION,
                    });
                }
                log::debug!(
                    "Loaded {} favourites from {}",
                    file.samples.len(),
                    path.display()
                );
                file
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No favourites file at {}, starting empty", path.display());
                FavoritesFile::empty()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.file)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Persist, or restore `backup` if persisting fails.
    fn commit(&mut self, backup: FavoritesFile) -> Result<(), StorageError> {
        if let Err(e) = self.persist() {
            self.file = backup;
            return Err(e);
        }
        Ok(())
    }
}

impl FavoritesStore for JsonFavoritesStore {
    fn save(
        &mut self,
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
    ) -> Result<ColorSample, StorageError> {
        let backup = self.file.clone();
        let sample = self
            .file
            .push(hue_position, brightness_percent, screen_brightness);
        self.commit(backup)?;
        Ok(sample)
    }

    fn list_all(&self) -> Vec<ColorSample> {
        self.file.sorted()
    }

    fn delete(&mut self, id: u64) -> Result<(), StorageError> {
        let backup = self.file.clone();
        self.file.remove(id)?;
        self.commit(backup)
    }
}
