// SPDX-License-Identifier: LGPL-3.0-only

//! Image data handed out by the standard asset provider.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::canvas::Picture;
use crate::geometry::Size;

/// An RGBA8 raster image, premultiplied alpha off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Arc<Vec<u8>>,
}

impl Pixmap {
    /// Wrap raw RGBA8 data. Returns `None` if the buffer length does not match.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data: Arc::new(data),
        })
    }

    /// A fully transparent pixmap.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: Arc::new(vec![0; width as usize * height as usize * 4]),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels.
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// The RGBA8 bytes, row major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Shared handle to the bytes.
    pub fn shared_data(&self) -> Arc<Vec<u8>> {
        self.data.clone()
    }

    /// The pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// A copy with every pixel mapped through `f`.
    pub fn map_pixels(&self, f: impl Fn([u8; 4]) -> [u8; 4]) -> Pixmap {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&f([px[0], px[1], px[2], px[3]]));
        }
        Pixmap {
            width: self.width,
            height: self.height,
            data: Arc::new(out),
        }
    }
}

/// Image data of any supported origin.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetImage {
    /// Decoded pixels.
    Pixmap(Pixmap),
    /// A file on disk, for instance a freedesktop theme icon.
    Path(PathBuf),
    /// A named bundled resource such as `:/lookfeel/common/file-16.png`.
    Resource(String),
    /// A vector glyph generated by the engine.
    Picture(Arc<Picture>),
}

impl AssetImage {
    /// Intrinsic size, if the image carries one.
    pub fn size(&self) -> Option<Size> {
        match self {
            AssetImage::Pixmap(p) => Some(p.size()),
            AssetImage::Picture(p) => Some(p.size()),
            AssetImage::Path(_) | AssetImage::Resource(_) => None,
        }
    }
}

/// A multi-resolution icon: square extent to image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    images: BTreeMap<i32, AssetImage>,
}

impl IconSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image for an extent.
    pub fn add(&mut self, extent: i32, image: AssetImage) {
        self.images.insert(extent, image);
    }

    /// Builder form of [IconSet::add].
    pub fn with(mut self, extent: i32, image: AssetImage) -> Self {
        self.add(extent, image);
        self
    }

    /// True if the set has no image.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The extents available, ascending.
    pub fn sizes(&self) -> Vec<i32> {
        self.images.keys().copied().collect()
    }

    /// The image for `extent`: exact match, else the smallest larger one,
    /// else the largest available.
    pub fn best(&self, extent: i32) -> Option<&AssetImage> {
        self.images
            .range(extent..)
            .next()
            .or_else(|| self.images.iter().next_back())
            .map(|(_, image)| image)
    }

    /// Iterate `(extent, image)` pairs, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &AssetImage)> {
        self.images.iter().map(|(k, v)| (*k, v))
    }
}

/// Resolves bundled resource names to decoded pixels.
///
/// The engine only names bundled images. Callers that ship the files plug
/// in a source so painters can draw them as pixels.
pub trait AssetSource: Send + Sync {
    /// Load the named resource.
    fn load(&self, name: &str) -> Option<Pixmap>;
}

/// Errors while loading image files.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The data is not a supported image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an encoded image (PNG and the other formats `image` knows).
pub fn decode_pixmap(bytes: &[u8]) -> Result<Pixmap, AssetError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(Pixmap {
        width,
        height,
        data: Arc::new(decoded.into_raw()),
    })
}

/// Read and decode an image file.
pub fn load_pixmap(path: &Path) -> Result<Pixmap, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_pixmap(&bytes)
}

/// An [AssetSource] reading `:/`-prefixed names from a directory.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Serve resources from `root`, stripping the `:/` prefix from names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssetSource {
    fn load(&self, name: &str) -> Option<Pixmap> {
        let relative = name.trim_start_matches(":/");
        let path = self.root.join(relative);
        if !path.is_file() {
            return None;
        }
        match load_pixmap(&path) {
            Ok(pixmap) => Some(pixmap),
            Err(e) => {
                log::warn!("Failed to load asset {}: {}", name, e);
                None
            },
        }
    }
}
