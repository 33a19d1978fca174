//! Image set management.
//!
//! The image set is the full collection supplied by the caller. A playlist is
//! derived from it for every fresh run: optionally shuffled with an injected
//! [`RandomSource`], then optionally truncated to a configured count.
//!
//! Image content is never opened here. An [`ImageRef`] only carries enough to
//! be forwarded to a renderer and to be named in a session summary.

pub mod loader;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

pub use loader::{load_paths, LoadOptions, DEFAULT_EXTENSIONS};

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// A path the caller's rendering path can resolve.
    Path(PathBuf),
    /// Raw bytes already held in memory, with a caller-chosen name.
    Bytes { name: String, data: Arc<[u8]> },
}

/// Opaque handle to one image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    source: ImageSource,
    thumbnail: Option<String>,
}

impl ImageRef {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ImageSource::Path(path.into()),
            thumbnail: None,
        }
    }

    pub fn from_bytes(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            source: ImageSource::Bytes {
                name: name.into(),
                data: data.into(),
            },
            thumbnail: None,
        }
    }

    /// Attach a thumbnail reference produced by the surrounding application.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ImageSource::Path(p) => Some(p),
            ImageSource::Bytes { .. } => None,
        }
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    /// Persistable identifier: the path for file images, the name otherwise.
    pub fn identifier(&self) -> String {
        match &self.source {
            ImageSource::Path(p) => p.to_string_lossy().into_owned(),
            ImageSource::Bytes { name, .. } => name.clone(),
        }
    }
}

/// Uniform random index source used for shuffling.
///
/// Every `rand` generator is a `RandomSource`; tests may supply their own to
/// get a fixed permutation.
pub trait RandomSource {
    /// Returns a value uniformly drawn from `0..upper`. `upper` is never 0.
    fn next_below(&mut self, upper: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn entropy_rng() -> Pcg64 {
    Pcg64::from_entropy()
}

/// The full image collection for a slideshow.
///
/// Replaced wholesale by [`ImageSet::set_images`]; never edited in place.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    images: Vec<ImageRef>,
}

impl ImageSet {
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    pub fn set_images(&mut self, images: Vec<ImageRef>) {
        self.images = images;
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// A set is ready to play once it holds at least one image.
    pub fn is_ready(&self) -> bool {
        !self.images.is_empty()
    }

    /// Derive the playlist for one run.
    ///
    /// With `randomize` the whole set is Fisher–Yates shuffled using `rng`.
    /// A `limit` in `1..len` keeps only the first `limit` entries; any other
    /// limit (including 0) keeps everything.
    pub fn prepare_playlist<R>(&self, randomize: bool, limit: usize, rng: &mut R) -> Vec<ImageRef>
    where
        R: RandomSource + ?Sized,
    {
        let mut playlist = self.images.clone();
        if randomize {
            shuffle(&mut playlist, rng);
        }
        if limit > 0 && limit < playlist.len() {
            playlist.truncate(limit);
        }
        playlist
    }
}

fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}
