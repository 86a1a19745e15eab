//! Provider wire-shape encoding for resolved attachments
//!
//! Images keep remote URLs as references (the provider dereferences them);
//! audio is always inlined as base64, local or remote. That asymmetry matches
//! the provider wire formats and must not be collapsed in either direction.

use std::ffi::OsStr;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use url::Url;

use super::resolver::{self, Fetcher};
use crate::core::types::content::{AudioData, ContentPart, ImageSource, ImageUrl};
use crate::core::types::errors::{AttachmentKind, ContentError};

/// Fallback audio container format when the source carries no extension
const DEFAULT_AUDIO_FORMAT: &str = "wav";

/// Encode one image source as a content part.
///
/// Remote sources become URL references without any I/O; local sources are
/// read fully and inlined as base64 with a MIME type derived from the file
/// extension alone (no content sniffing).
pub fn image_part(source: &str) -> Result<ContentPart, ContentError> {
    resolver::validate_source(AttachmentKind::Image, source)?;

    if resolver::is_remote(source) {
        return Ok(ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: source.to_string(),
                detail: None,
            },
        });
    }

    let bytes = resolver::read_local(AttachmentKind::Image, source)?;
    Ok(ContentPart::Image {
        source: ImageSource {
            media_type: image_media_type(source),
            data: STANDARD.encode(bytes),
        },
    })
}

/// Encode one audio source as a content part.
///
/// Bytes are always inlined: local sources are read from disk, remote
/// sources are fetched through the injected [`Fetcher`].
pub fn audio_part(source: &str, fetcher: &dyn Fetcher) -> Result<ContentPart, ContentError> {
    resolver::validate_source(AttachmentKind::Audio, source)?;

    let bytes = if resolver::is_remote(source) {
        resolver::fetch_remote(AttachmentKind::Audio, source, fetcher)?
    } else {
        resolver::read_local(AttachmentKind::Audio, source)?
    };

    Ok(ContentPart::Audio {
        audio: AudioData {
            data: STANDARD.encode(bytes),
            format: audio_format(source),
        },
    })
}

/// MIME type from the file extension alone, as `image/<extension>`.
///
/// Known limitation: the extension is trusted, not verified against the
/// actual bytes.
fn image_media_type(source: &str) -> String {
    format!("image/{}", extension_of(source).unwrap_or_default())
}

/// Audio container format from the source's extension, defaulting to wav.
///
/// For remote sources the extension is taken from the URL's path component so
/// query strings and fragments do not leak into the format.
fn audio_format(source: &str) -> String {
    let path = if resolver::is_remote(source) {
        match Url::parse(source) {
            Ok(url) => url.path().to_string(),
            Err(_) => source.to_string(),
        }
    } else {
        source.to_string()
    };

    extension_of(&path).unwrap_or_else(|| DEFAULT_AUDIO_FORMAT.to_string())
}

fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_string)
}
