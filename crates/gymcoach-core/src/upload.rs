//! Media selection and validation for the uploaders.
//!
//! Dropped files are checked against the uploader's accepted MIME types;
//! files chosen through the picker are already constrained by its filter.

use std::path::Path;

use base64::Engine;
use bytes::Bytes;

use crate::error::{CoachError, CoachResult};

/// Videos above this size are shown without an inline preview.
pub const VIDEO_PREVIEW_LIMIT_BYTES: usize = 32 * 1024 * 1024;

const VIDEO_SUBTYPES: &[&str] = &["mp4", "mov", "avi", "quicktime", "x-msvideo"];

/// What an uploader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Whether a MIME type passes this uploader's drop check.
    pub fn accepts_mime(&self, mime: &str) -> bool {
        let mime = mime.trim().to_ascii_lowercase();
        match self {
            MediaKind::Image => mime.starts_with("image/"),
            MediaKind::Video => mime
                .strip_prefix("video/")
                .map(|sub| VIDEO_SUBTYPES.contains(&sub))
                .unwrap_or(false),
        }
    }

    /// Extensions offered by the file picker.
    pub fn picker_extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Video => &["mp4", "mov", "avi"],
            MediaKind::Image => &["png", "jpg", "jpeg", "webp", "gif", "bmp"],
        }
    }

    pub fn picker_label(&self) -> &'static str {
        match self {
            MediaKind::Video => "videos",
            MediaKind::Image => "images",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            MediaKind::Video => ".mp4, .mov, .avi",
            MediaKind::Image => ".png, .jpg, .webp",
        }
    }
}

/// MIME type implied by a file extension.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "webm" => "video/webm",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// MIME type of an encoded image, sniffed from its header bytes.
pub fn sniff_image_mime(data: &[u8]) -> Option<&'static str> {
    let format = image::guess_format(data).ok()?;
    Some(format.to_mime_type())
}

/// A file held in memory, ready to preview or upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, deriving its MIME type from the extension.
    ///
    /// Image content is sniffed so a mislabelled extension still reports the
    /// real format.
    pub fn open(path: impl AsRef<Path>) -> CoachResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let mut mime = mime_for_extension(ext);
        if mime.starts_with("image/") || mime == "application/octet-stream" {
            if let Some(sniffed) = sniff_image_mime(&data) {
                mime = sniffed;
            }
        }
        tracing::debug!(name = %name, mime, size = data.len(), "Loaded media file");
        Ok(Self::new(name, mime, data))
    }

    /// Read a file and require it to match `kind`.
    pub fn open_as(path: impl AsRef<Path>, kind: MediaKind) -> CoachResult<Self> {
        let file = Self::open(path)?;
        file.ensure_kind(kind)?;
        Ok(file)
    }

    pub fn ensure_kind(&self, kind: MediaKind) -> CoachResult<()> {
        if kind.accepts_mime(&self.mime) {
            Ok(())
        } else {
            Err(CoachError::UnsupportedMedia {
                name: self.name.clone(),
                mime: self.mime.clone(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Size in megabytes with one decimal, e.g. `"12.3 MB"`.
    pub fn display_size(&self) -> String {
        format!("{:.1} MB", self.bytes.len() as f64 / 1024.0 / 1024.0)
    }

    /// `data:` URI for an inline preview.
    ///
    /// Returns `None` for videos too large to inline.
    pub fn data_uri(&self) -> Option<String> {
        if self.mime.starts_with("video/") && self.bytes.len() > VIDEO_PREVIEW_LIMIT_BYTES {
            return None;
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        Some(format!("data:{};base64,{}", self.mime, encoded))
    }
}

/// Resolve a drop onto an uploader.
///
/// Only the first file counts. Returns it when its type is accepted;
/// otherwise the uploader keeps its current state.
pub fn accept_drop(kind: MediaKind, files: Vec<MediaFile>) -> Option<MediaFile> {
    let first = files.into_iter().next()?;
    if kind.accepts_mime(&first.mime) {
        Some(first)
    } else {
        tracing::debug!(name = %first.name, mime = %first.mime, "Ignoring dropped file");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Smallest valid PNG header: signature plus the start of an IHDR chunk.
    const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13, b'I', b'H', b'D', b'R',
    ];

    #[test]
    fn test_video_mime_check() {
        let kind = MediaKind::Video;
        assert!(kind.accepts_mime("video/mp4"));
        assert!(kind.accepts_mime("video/quicktime"));
        assert!(kind.accepts_mime("video/x-msvideo"));
        assert!(!kind.accepts_mime("video/webm"));
        assert!(!kind.accepts_mime("image/png"));
        assert!(!kind.accepts_mime(""));
    }

    #[test]
    fn test_image_mime_check() {
        assert!(MediaKind::Image.accepts_mime("image/png"));
        assert!(MediaKind::Image.accepts_mime("image/svg+xml"));
        assert!(!MediaKind::Image.accepts_mime("video/mp4"));
    }

    #[test]
    fn test_drop_uses_first_file_only() {
        let files = vec![
            MediaFile::new("notes.txt", "text/plain", vec![1u8]),
            MediaFile::new("squat.mp4", "video/mp4", vec![2u8]),
        ];
        assert!(accept_drop(MediaKind::Video, files).is_none());

        let files = vec![MediaFile::new("squat.mp4", "video/mp4", vec![2u8])];
        let accepted = accept_drop(MediaKind::Video, files).unwrap();
        assert_eq!(accepted.name, "squat.mp4");

        assert!(accept_drop(MediaKind::Image, Vec::new()).is_none());
    }

    #[test]
    fn test_display_size() {
        let file = MediaFile::new("a.mp4", "video/mp4", vec![0u8; 1024 * 1024 * 3 / 2]);
        assert_eq!(file.display_size(), "1.5 MB");
    }

    #[test]
    fn test_data_uri() {
        let file = MediaFile::new("a.png", "image/png", vec![1u8, 2, 3]);
        assert_eq!(file.data_uri().as_deref(), Some("data:image/png;base64,AQID"));

        let big = MediaFile::new("a.mp4", "video/mp4", vec![0u8; VIDEO_PREVIEW_LIMIT_BYTES + 1]);
        assert!(big.data_uri().is_none());
    }

    #[test]
    fn test_open_derives_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lift.MOV");
        std::fs::write(&path, b"not really a video").unwrap();

        let file = MediaFile::open(&path).unwrap();
        assert_eq!(file.name, "lift.MOV");
        assert_eq!(file.mime, "video/quicktime");
        assert!(MediaFile::open_as(&path, MediaKind::Image).is_err());
    }

    #[test]
    fn test_open_sniffs_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(PNG_HEADER).unwrap();

        let file = MediaFile::open_as(&path, MediaKind::Image).unwrap();
        assert_eq!(file.mime, "image/png");
    }
}
