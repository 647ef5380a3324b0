//! Configuration options for the portfolio client

use std::time::Duration;

/// Default storage bucket for uploaded project images
pub const DEFAULT_MEDIA_BUCKET: &str = "projectimages";

/// Configuration options for the portfolio client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout; `None` leaves requests unbounded
    pub request_timeout: Option<Duration>,

    /// Object-storage settings for the image upload side-channel
    pub media: Option<MediaOptions>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: None,
            media: None,
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the media upload settings
    pub fn with_media(mut self, value: MediaOptions) -> Self {
        self.media = Some(value);
        self
    }
}

/// Object-storage settings for image uploads
#[derive(Debug, Clone)]
pub struct MediaOptions {
    /// Base URL of the storage service
    pub url: String,

    /// API key sent with upload requests
    pub key: String,

    /// Bucket uploaded images land in
    pub bucket: String,
}

impl MediaOptions {
    /// Create media settings for the given storage service
    pub fn new(url: &str, key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            key: key.to_string(),
            bucket: DEFAULT_MEDIA_BUCKET.to_string(),
        }
    }

    /// Set the target bucket
    pub fn with_bucket(mut self, value: &str) -> Self {
        self.bucket = value.to_string();
        self
    }
}
