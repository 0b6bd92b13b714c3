use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::COINCAP;
use crate::domain::{Asset, AssetHistoryPoint};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the full asset list snapshot.
    async fn fetch_assets(&self) -> Result<Vec<Asset>>;

    /// Fetch the hourly price history of one asset, oldest sample first.
    async fn fetch_history(&self, asset_id: &str) -> Result<Vec<AssetHistoryPoint>>;
}

/// Every CoinCap response wraps its payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

pub struct CoinCapProvider {
    client: Client,
    base_url: Url,
}

impl CoinCapProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid API base url '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("API base url '{}' cannot take a path", base_url));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(COINCAP.client.timeout_ms))
            .user_agent(COINCAP.client.user_agent)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// `<base>/assets`
    pub fn assets_url(&self) -> Url {
        self.endpoint(&[COINCAP.api.assets_path])
    }

    /// `<base>/assets/{id}/history?interval=h1`
    pub fn history_url(&self, asset_id: &str) -> Url {
        let mut url = self.endpoint(&[
            COINCAP.api.assets_path,
            asset_id,
            COINCAP.api.history_path,
        ]);
        url.query_pairs_mut()
            .append_pair("interval", COINCAP.api.history_interval);
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // checked in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_data<T>(&self, url: Url) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?;

        let envelope: Envelope<T> = response
            .json()
            .await
            .with_context(|| format!("could not decode response from {}", url))?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl MarketDataProvider for CoinCapProvider {
    async fn fetch_assets(&self) -> Result<Vec<Asset>> {
        self.get_data(self.assets_url()).await
    }

    async fn fetch_history(&self, asset_id: &str) -> Result<Vec<AssetHistoryPoint>> {
        self.get_data(self.history_url(asset_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls_from_base() {
        let provider = CoinCapProvider::new("https://api.coincap.io/v2").unwrap();
        assert_eq!(
            provider.assets_url().as_str(),
            "https://api.coincap.io/v2/assets"
        );
        assert_eq!(
            provider.history_url("bitcoin").as_str(),
            "https://api.coincap.io/v2/assets/bitcoin/history?interval=h1"
        );
    }

    #[test]
    fn trailing_slash_and_odd_ids_are_handled() {
        let provider = CoinCapProvider::new("http://localhost:8080/v2/").unwrap();
        assert_eq!(
            provider.assets_url().as_str(),
            "http://localhost:8080/v2/assets"
        );
        assert_eq!(
            provider.history_url("usd coin").as_str(),
            "http://localhost:8080/v2/assets/usd%20coin/history?interval=h1"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(CoinCapProvider::new("not a url").is_err());
        assert!(CoinCapProvider::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn envelope_unwraps_asset_list() {
        let json = r#"{"data":[{"id":"bitcoin","rank":"1","symbol":"BTC","name":"Bitcoin",
            "supply":"1","maxSupply":null,"marketCapUsd":"2","volumeUsd24Hr":"3",
            "priceUsd":"4","changePercent24Hr":"5","vwap24Hr":"6"}],"timestamp":1}"#;
        let envelope: Envelope<Vec<Asset>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].symbol, "BTC");
    }

    const ASSET_LIST_BODY: &str = r#"{"data":[
        {"id":"bitcoin","rank":"1","symbol":"BTC","name":"Bitcoin","supply":"19750000",
         "maxSupply":"21000000","marketCapUsd":"1300000000000","volumeUsd24Hr":"25000000000",
         "priceUsd":"65821.32","changePercent24Hr":"-1.23","vwap24Hr":"66010.77"},
        {"id":"ethereum","rank":"2","symbol":"ETH","name":"Ethereum","supply":"120000000",
         "maxSupply":null,"marketCapUsd":"400000000000","volumeUsd24Hr":"12000000000",
         "priceUsd":"3300.5","changePercent24Hr":"2.5","vwap24Hr":"3280.1"}
    ],"timestamp":1718452800000}"#;

    #[tokio::test]
    async fn fetch_assets_unwraps_the_data_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/assets")
            .match_header("user-agent", COINCAP.client.user_agent)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ASSET_LIST_BODY)
            .expect(1)
            .create_async()
            .await;

        let provider = CoinCapProvider::new(&format!("{}/v2", server.url())).unwrap();
        let assets = provider.fetch_assets().await.unwrap();

        mock.assert_async().await;
        let ids: Vec<_> = assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["bitcoin", "ethereum"]);
        assert_eq!(assets[1].max_supply, None);
    }

    #[tokio::test]
    async fn error_status_becomes_an_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/assets")
            .with_status(500)
            .with_body("upstream down")
            .create_async()
            .await;

        let provider = CoinCapProvider::new(&format!("{}/v2", server.url())).unwrap();
        let err = provider.fetch_assets().await.unwrap_err();

        mock.assert_async().await;
        let message = format!("{:#}", err);
        assert!(message.contains("returned an error status"), "{}", message);
        assert!(message.contains("500"), "{}", message);
    }

    #[tokio::test]
    async fn undecodable_body_becomes_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/assets")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let provider = CoinCapProvider::new(&format!("{}/v2", server.url())).unwrap();
        let err = provider.fetch_assets().await.unwrap_err();
        assert!(format!("{:#}", err).contains("could not decode"));
    }

    #[tokio::test]
    async fn fetch_history_requests_hourly_interval() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/assets/bitcoin/history")
            .match_query(mockito::Matcher::UrlEncoded(
                "interval".into(),
                "h1".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"data":[
                    {"priceUsd":"65000.1","time":1718449200000,"date":"2024-06-15T11:00:00.000Z"},
                    {"priceUsd":"65100.2","time":1718452800000,"date":"2024-06-15T12:00:00.000Z"}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let provider = CoinCapProvider::new(&format!("{}/v2/", server.url())).unwrap();
        let history = provider.fetch_history("bitcoin").await.unwrap();

        mock.assert_async().await;
        assert_eq!(history.len(), 2);
        assert!(history[0].time < history[1].time);
        assert_eq!(history[1].price(), Some(65100.2));
    }
}
