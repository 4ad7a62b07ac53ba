//! Templates published as zip archives over HTTP(S).

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::{Error, Result};
use crate::loader::archive::{staging_dir, unpack};
use crate::loader::{LoadedTemplate, TemplateLoader};

/// File name of the downloaded archive inside the staging directory.
pub const ARCHIVE_FILE: &str = "template.zip";

fn acquisition_error(url: &str, reason: impl ToString) -> Error {
    Error::AcquisitionError {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Builds the HTTP client used for downloads. Requests never time out.
pub fn default_client() -> Result<Client> {
    Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| Error::ConfigError(format!("unable to create HTTP client: {}", e)))
}

/// Streams the body of a GET on `url` into `dest`.
///
/// # Errors
/// * `Error::AcquisitionError` if the request or the transfer fails
/// * `Error::DownloadStatusError` if the server answers with a non-success status
pub fn download<P: AsRef<Path>>(client: &Client, url: &str, dest: P) -> Result<u64> {
    debug!("Downloading '{}'", url);
    let mut response = client
        .get(url)
        .send()
        .map_err(|e| acquisition_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::DownloadStatusError {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut out = File::create(dest.as_ref()).map_err(|e| acquisition_error(url, e))?;
    let written = response
        .copy_to(&mut out)
        .map_err(|e| acquisition_error(url, e))?;
    debug!(
        "Downloaded {} bytes to '{}'",
        written,
        dest.as_ref().display()
    );
    Ok(written)
}

/// Loader for remote zip archives.
pub struct RemoteLoader<S: AsRef<str>> {
    url: S,
    client: Option<Client>,
}

impl<S: AsRef<str>> RemoteLoader<S> {
    pub fn new(url: S) -> Self {
        Self { url, client: None }
    }

    /// Uses `client` instead of [`default_client`].
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}

impl<S: AsRef<str>> TemplateLoader for RemoteLoader<S> {
    /// Downloads the archive into a fresh staging directory and extracts it there.
    /// The staging directory is removed on every exit path.
    fn load(&self) -> Result<LoadedTemplate> {
        let url = self.url.as_ref();
        let client = match &self.client {
            Some(client) => client.clone(),
            None => default_client()?,
        };

        let staging = staging_dir()?;
        let archive_path = staging.path().join(ARCHIVE_FILE);
        download(&client, url, &archive_path)?;
        let root = unpack(&archive_path, staging.path())?;
        Ok(LoadedTemplate::staged(root, staging))
    }
}
