//! Image uploads to the object-storage bucket

use chrono::Utc;
use log::debug;
use reqwest::{multipart, Client};

use crate::config::MediaOptions;
use crate::error::Error;

/// Cache lifetime, in seconds, stamped on uploaded objects
const CACHE_CONTROL_SECONDS: &str = "3600";

/// Client for the image upload side-channel.
///
/// Uploads land in one public bucket and the returned URL goes into the
/// record that references the image, so the upload has to complete before
/// the create or update that uses it.
#[derive(Debug)]
pub struct MediaClient {
    /// Base URL of the storage service
    url: String,

    /// API key sent with every upload
    key: String,

    /// Target bucket
    bucket: String,

    /// HTTP client used for requests
    client: Client,
}

impl MediaClient {
    pub(crate) fn new(options: &MediaOptions, client: Client) -> Self {
        Self {
            url: options.url.clone(),
            key: options.key.clone(),
            bucket: options.bucket.clone(),
            client,
        }
    }

    fn object_endpoint(&self, object: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.url, self.bucket, object)
    }

    /// Public URL of an object in the bucket
    pub fn public_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.url, self.bucket, object
        )
    }

    /// Bucket object name for an upload: millisecond timestamp, then the
    /// original file name, then the original extension again.
    ///
    /// The doubled extension is what the backend has always stored, and
    /// existing object URLs depend on it.
    pub fn object_name(original_name: &str, timestamp_ms: i64) -> String {
        let extension = original_name.rsplit('.').next().unwrap_or(original_name);
        format!("{}{}.{}", timestamp_ms, original_name, extension)
    }

    /// Upload an image and return its public URL.
    ///
    /// The object name carries a timestamp prefix so repeated uploads of the
    /// same file never collide; upserts stay disabled.
    pub async fn upload(&self, original_name: &str, data: Vec<u8>) -> Result<String, Error> {
        let object = Self::object_name(original_name, Utc::now().timestamp_millis());
        let url = self.object_endpoint(&object);

        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(data).file_name(object.clone()),
        );

        debug!("uploading {} to bucket {}", object, self.bucket);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.key)
            .header("Cache-Control", CACHE_CONTROL_SECONDS)
            .header("x-upsert", "false")
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::media(format!(
                "Upload failed with status {}: {}",
                status, text
            )));
        }

        Ok(self.public_url(&object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_name_prefixes_timestamp_and_repeats_extension() {
        assert_eq!(
            MediaClient::object_name("photo.png", 1_700_000_000_000),
            "1700000000000photo.png.png"
        );
    }

    #[test]
    fn object_name_without_extension_repeats_whole_name() {
        assert_eq!(MediaClient::object_name("diagram", 42), "42diagram.diagram");
    }

    #[test]
    fn public_url_points_into_the_bucket() {
        let options = MediaOptions::new("https://media.example.com", "service-key");
        let media = MediaClient::new(&options, Client::new());

        assert_eq!(
            media.public_url("17photo.png.png"),
            "https://media.example.com/storage/v1/object/public/projectimages/17photo.png.png"
        );
    }
}
