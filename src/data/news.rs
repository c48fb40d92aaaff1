use serde::Deserialize;
use tracing::info;

use crate::data::{send_authorized, DataClient};
use crate::error::Result;

const ENDPOINT: &str = "news headlines";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsHeadlinesResponse {
    #[serde(default)]
    pub data: Vec<Headline>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    #[serde(default)]
    pub story_id: String,
    #[serde(default)]
    pub news_item: NewsItem,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default)]
    pub item_meta: ItemMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMeta {
    #[serde(default)]
    pub title: Vec<TextValue>,
    pub version_created: Option<TextValue>,
}

/// `{"$": "..."}` wrapper used by the news payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    #[serde(rename = "$", default)]
    pub value: String,
}

impl Headline {
    pub fn title(&self) -> &str {
        self.news_item
            .item_meta
            .title
            .first()
            .map(|t| t.value.as_str())
            .unwrap_or_default()
    }

    pub fn version_created(&self) -> &str {
        self.news_item
            .item_meta
            .version_created
            .as_ref()
            .map(|v| v.value.as_str())
            .unwrap_or_default()
    }
}

impl DataClient {
    pub async fn news_headlines(&self, access_token: &str, symbol: &str, limit: u32) -> Result<NewsHeadlinesResponse> {
        let url = self.endpoints().news_url();
        info!("Requesting News Headlines from {}?query={}&limit={}", url, symbol, limit);

        let limit = limit.to_string();
        let request = self.client.get(&url).query(&[("query", symbol), ("limit", limit.as_str())]);
        send_authorized(ENDPOINT, access_token, request).await
    }
}
