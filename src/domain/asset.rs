use serde::{Deserialize, Deserializer, Serialize};

/// One tradable instrument's market snapshot, as sent by the assets endpoint.
///
/// Numeric fields stay as the decimal text the API sends; parse them with
/// [`parse_decimal`] (or the accessors below) before comparing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rank: String,
    pub symbol: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supply: String,
    /// `None` means uncapped supply.
    #[serde(default)]
    pub max_supply: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub market_cap_usd: String,
    #[serde(rename = "volumeUsd24Hr", default, deserialize_with = "null_as_empty")]
    pub volume_usd_24h: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_usd: String,
    #[serde(rename = "changePercent24Hr", default, deserialize_with = "null_as_empty")]
    pub change_percent_24h: String,
    #[serde(rename = "vwap24Hr", default, deserialize_with = "null_as_empty")]
    pub vwap_24h: String,
}

impl Asset {
    pub fn price(&self) -> Option<f64> {
        parse_decimal(&self.price_usd)
    }

    pub fn market_cap(&self) -> Option<f64> {
        parse_decimal(&self.market_cap_usd)
    }

    pub fn volume_24h(&self) -> Option<f64> {
        parse_decimal(&self.volume_usd_24h)
    }

    pub fn change_percent(&self) -> Option<f64> {
        parse_decimal(&self.change_percent_24h)
    }

    /// Display form of the rank, e.g. `#1`.
    pub fn rank_label(&self) -> String {
        format!("#{}", self.rank)
    }
}

/// Parses the API's decimal text. Anything that is not a finite number is `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// The API occasionally sends `null` for a numeric field; keep the record and let parsing fail later.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
