//! Remote overlay catalog: wire model, decoding, and the cached service.

use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use url::Url;

/// Errors from the overlay listing path.
///
/// Surfaced to the user as-is, with an explicit user-triggered retry; the
/// core never retries on its own.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Transport-level failure reported by the fetch collaborator.
    #[error("overlay request failed: {0}")]
    Fetch(String),
    /// The feed body did not match the expected shape.
    #[error("overlay feed decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Boxed future for async collaborator calls (runtime-agnostic).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A selectable overlay image in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub id: String,
    pub name: String,
    pub url: Url,
}

impl<'de> Deserialize<'de> for Overlay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // The feed carries numeric ids, an optional display name, and a
        // source URL that must parse.
        #[derive(Deserialize)]
        struct Raw {
            id: i64,
            overlay_name: Option<String>,
            source_url: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        let url = Url::parse(&raw.source_url)
            .map_err(|_| serde::de::Error::custom("invalid source_url"))?;
        Ok(Overlay {
            id: raw.id.to_string(),
            name: raw.overlay_name.unwrap_or_else(|| "Overlay".to_string()),
            url,
        })
    }
}

/// One category block in the remote feed.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlayCategory {
    pub id: i64,
    pub title: String,
    pub items: Vec<Overlay>,
}

/// Decode the raw feed body into the flat overlay list, category items in
/// feed order.
pub fn decode_catalog(body: &[u8]) -> OverlayResult<Vec<Overlay>> {
    let categories: Vec<OverlayCategory> = serde_json::from_slice(body)?;
    Ok(categories
        .into_iter()
        .flat_map(|category| category.items)
        .collect())
}

/// Fetch collaborator: produces the raw overlay feed body.
pub trait OverlayFetcher {
    fn fetch(&self) -> BoxFuture<'_, OverlayResult<Vec<u8>>>;
}

/// Overlay listing service with an explicitly-owned cache.
///
/// The fetcher is injected and the cache lives on this value rather than in
/// a process-wide singleton. Every call goes through `&mut self`, so
/// refreshes are serialized by the exclusive borrow: overlapping forced
/// refreshes cannot be expressed.
#[derive(Debug)]
pub struct OverlayService<F> {
    fetcher: F,
    cache: Option<Vec<Overlay>>,
}

impl<F: OverlayFetcher> OverlayService<F> {
    /// Create a service around the given fetcher, with a cold cache.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: None,
        }
    }

    /// Return the overlay listing, fetching and re-caching when the cache is
    /// cold or `force_refresh` is set.
    pub async fn fetch_overlays(&mut self, force_refresh: bool) -> OverlayResult<Vec<Overlay>> {
        if !force_refresh {
            if let Some(cache) = &self.cache {
                log::debug!("overlay cache hit: {} overlays", cache.len());
                return Ok(cache.clone());
            }
        }

        let body = self.fetcher.fetch().await?;
        let overlays = decode_catalog(&body)?;
        log::info!("overlay feed refreshed: {} overlays", overlays.len());
        self.cache = Some(overlays.clone());
        Ok(overlays)
    }

    /// Drop the cached listing.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}
