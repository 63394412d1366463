use std::fmt;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
    Webp,
}

impl ImageType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(ImageType::Jpeg),
            "image/png" => Some(ImageType::Png),
            "image/webp" => Some(ImageType::Webp),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Webp => "image/webp",
        }
    }

    /// Extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageType::Jpeg => ".jpg",
            ImageType::Png => ".png",
            ImageType::Webp => ".webp",
        }
    }

    /// Whether `bytes` starts with this format's signature.
    pub fn matches_magic(&self, bytes: &[u8]) -> bool {
        match self {
            ImageType::Jpeg => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
            ImageType::Png => bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
            ImageType::Webp => {
                bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarValidationError {
    Empty,
    TooLarge { max_bytes: usize, actual_bytes: usize },
    UnsupportedType(String),
    ContentMismatch(ImageType),
}

impl fmt::Display for AvatarValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvatarValidationError::Empty => write!(f, "The uploaded image is empty"),
            AvatarValidationError::TooLarge {
                max_bytes,
                actual_bytes,
            } => write!(
                f,
                "Image too large (max {} bytes, got {} bytes)",
                max_bytes, actual_bytes
            ),
            AvatarValidationError::UnsupportedType(mime) => {
                write!(f, "Unsupported image type: {}", mime)
            }
            AvatarValidationError::ContentMismatch(expected) => {
                write!(f, "File content is not a valid {}", expected.mime())
            }
        }
    }
}

impl std::error::Error for AvatarValidationError {}

#[derive(Debug, Clone)]
pub struct AvatarPolicy {
    pub max_bytes: usize,
}

impl Default for AvatarPolicy {
    fn default() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }
}

impl AvatarPolicy {
    pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Reads `AVATAR_MAX_BYTES`, defaulting to 5 MiB.
    pub fn from_env() -> Self {
        let max_bytes = std::env::var("AVATAR_MAX_BYTES")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse::<usize>()
                    .expect("AVATAR_MAX_BYTES must be a positive integer")
            })
            .unwrap_or(Self::DEFAULT_MAX_BYTES);

        Self { max_bytes }
    }

    /// Checks size, declared type and the file signature, in that order.
    pub fn validate(
        &self,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<ImageType, AvatarValidationError> {
        if bytes.is_empty() {
            return Err(AvatarValidationError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(AvatarValidationError::TooLarge {
                max_bytes: self.max_bytes,
                actual_bytes: bytes.len(),
            });
        }

        let mime = content_type.split(';').next().unwrap_or_default();
        let image_type = ImageType::from_mime(mime)
            .ok_or_else(|| AvatarValidationError::UnsupportedType(mime.trim().to_string()))?;

        if !image_type.matches_magic(bytes) {
            return Err(AvatarValidationError::ContentMismatch(image_type));
        }

        Ok(image_type)
    }
}

pub fn pending_avatar_key(user_id: UserId, image_type: ImageType) -> String {
    format!("avatars/pending/{}{}", user_id, image_type.extension())
}

/// The confirmed key keeps the pending image's extension.
pub fn confirmed_avatar_key(user_id: UserId, pending_key: &str) -> String {
    let ext = pending_key
        .rsplit_once('.')
        .map(|(_, ext)| format!(".{}", ext))
        .unwrap_or_default();
    format!("avatars/{}{}", user_id, ext)
}
