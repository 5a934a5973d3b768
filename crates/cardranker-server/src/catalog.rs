use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::info;

/// A votable catalog entry with displayable art.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    data: Vec<RawCard>,
    next_page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    id: String,
    name: String,
    #[serde(default)]
    type_line: String,
    image_uris: Option<ImageUris>,
}

#[derive(Debug, Deserialize)]
struct ImageUris {
    normal: String,
}

/// Process-scoped cache of the card catalog. Cold until the first
/// `cards()` call, reused for the process lifetime, refetched only
/// through `refresh()`.
pub struct CatalogCache {
    client: reqwest::Client,
    search_url: String,
    cards: RwLock<Option<Arc<Vec<Card>>>>,
}

impl CatalogCache {
    /// No I/O happens here; the first `cards()` call fetches.
    pub fn new(base_url: &str, set_code: &str) -> Self {
        CatalogCache {
            client: reqwest::Client::new(),
            search_url: format!(
                "{}/cards/search?order=set&q=e%3A{}&unique=prints",
                base_url, set_code
            ),
            cards: RwLock::new(None),
        }
    }

    /// Cached card list, fetching the full catalog on first use.
    pub async fn cards(&self) -> Result<Arc<Vec<Card>>, reqwest::Error> {
        if let Some(cards) = &*self.cards.read().await {
            return Ok(cards.clone());
        }

        let mut guard = self.cards.write().await;
        // Another task may have fetched while we waited for the write lock.
        if let Some(cards) = &*guard {
            return Ok(cards.clone());
        }

        let fetched = Arc::new(self.fetch_all().await?);
        *guard = Some(fetched.clone());
        Ok(fetched)
    }

    /// Drop the cached list and refetch the full catalog.
    pub async fn refresh(&self) -> Result<Arc<Vec<Card>>, reqwest::Error> {
        let mut guard = self.cards.write().await;
        let fetched = Arc::new(self.fetch_all().await?);
        *guard = Some(fetched.clone());
        Ok(fetched)
    }

    /// Walk the paginated search endpoint, following the `next_page`
    /// cursor until none remains. Keeps only entries with displayable
    /// imagery, skipping basic lands and duplicate names.
    async fn fetch_all(&self) -> Result<Vec<Card>, reqwest::Error> {
        let mut cards = Vec::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut url = Some(self.search_url.clone());

        while let Some(page_url) = url {
            let page: SearchPage = self
                .client
                .get(&page_url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            for raw in page.data {
                let Some(images) = raw.image_uris else {
                    continue;
                };
                if raw.type_line.starts_with("Basic Land") {
                    continue;
                }
                if !seen_names.insert(raw.name.clone()) {
                    continue;
                }
                cards.push(Card {
                    id: raw.id,
                    name: raw.name,
                    image_url: images.normal,
                });
            }

            url = page.next_page;
        }

        info!("fetched {} votable cards from catalog", cards.len());
        Ok(cards)
    }
}
