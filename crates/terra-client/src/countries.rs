//! Country lookups against the REST Countries v3.1 API.
//!
//! Upstream records use nested and list-shaped fields (`name.common`,
//! `capital[0]`). [`RestCountry`] mirrors that wire shape and
//! [`RestCountry::into_record`] flattens it into a [`CountryRecord`].

use std::collections::BTreeMap;

use serde::Deserialize;
use terra_core::{CountryCode, CountryRecord, Region};

use crate::error::CountriesApiError;
use crate::{decode, CountriesClient};

// -- Wire types ---------------------------------------------------------------

/// Country object as returned by the upstream API.
///
/// Every field is defaulted: field-restricted fetches (`?fields=`) omit
/// whatever was not requested. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestCountry {
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub name: Option<CountryName>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub borders: Option<Vec<CountryCode>>,
}

/// The `name` object; only the common name is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: Option<String>,
}

impl RestCountry {
    /// Flatten into a [`CountryRecord`]. Returns `None` when `cca3` is
    /// missing or malformed, since the record would have no key.
    pub fn into_record(self) -> Option<CountryRecord> {
        let raw = self.cca3?;
        let code = match CountryCode::new(&raw) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(cca3 = %raw, "dropping upstream record: {e}");
                return None;
            }
        };
        Some(CountryRecord {
            code,
            name: self.name.and_then(|n| n.common),
            capital: self.capital.and_then(|c| c.into_iter().next()),
            population: self.population.unwrap_or(0),
            languages: self.languages.unwrap_or_default(),
            region: self.region,
            borders: self.borders.unwrap_or_default(),
        })
    }
}

/// `/alpha/{code}` answers with an array; some deployments answer with a
/// bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<RestCountry>),
    One(Box<RestCountry>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<RestCountry> {
        match self {
            Self::Many(v) => v,
            Self::One(c) => vec![*c],
        }
    }
}

fn into_records(countries: Vec<RestCountry>) -> Vec<CountryRecord> {
    let fetched = countries.len();
    let records: Vec<CountryRecord> = countries
        .into_iter()
        .filter_map(RestCountry::into_record)
        .collect();
    if records.len() < fetched {
        tracing::warn!(
            dropped = fetched - records.len(),
            "upstream records without a usable cca3 were dropped"
        );
    }
    records
}

fn join_codes(codes: &[CountryCode]) -> String {
    codes
        .iter()
        .map(CountryCode::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

// -- Operations ---------------------------------------------------------------

impl CountriesClient {
    /// Look up one country by code.
    ///
    /// Calls `GET {base_url}/alpha/{code}`. Returns `Ok(None)` on 404, on
    /// 400 (the provider's answer to an unrecognized code), and on an
    /// empty body.
    pub async fn fetch_by_code(
        &self,
        code: &CountryCode,
    ) -> Result<Option<CountryRecord>, CountriesApiError> {
        let endpoint = format!("GET /alpha/{code}");
        let url = self.url(&format!("alpha/{code}"));

        let resp = self.get(&endpoint, &url).await?;
        if matches!(
            resp.status(),
            reqwest::StatusCode::NOT_FOUND | reqwest::StatusCode::BAD_REQUEST
        ) {
            return Ok(None);
        }

        let body: OneOrMany = decode(&endpoint, resp).await?;
        Ok(into_records(body.into_vec()).into_iter().next())
    }

    /// Look up several countries at once.
    ///
    /// Calls `GET {base_url}/alpha?codes={a,b,...}`. Codes the provider does
    /// not know are silently absent from the result. An empty `codes` slice
    /// makes no request.
    pub async fn fetch_by_codes(
        &self,
        codes: &[CountryCode],
    ) -> Result<Vec<CountryRecord>, CountriesApiError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let endpoint = "GET /alpha?codes";
        let url = self.url(&format!("alpha?codes={}", join_codes(codes)));

        let resp = self.get(endpoint, &url).await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body: Vec<RestCountry> = decode(endpoint, resp).await?;
        Ok(into_records(body))
    }

    /// All countries of one region.
    ///
    /// Calls `GET {base_url}/region/{region}`. `Ok(None)` means the provider
    /// does not know the region (404); `Ok(Some(vec![]))` means it knows the
    /// region but returned no countries.
    pub async fn fetch_by_region(
        &self,
        region: Region,
    ) -> Result<Option<Vec<CountryRecord>>, CountriesApiError> {
        let endpoint = format!("GET /region/{region}");
        let url = self.url(&format!("region/{}", region.as_str()));

        let resp = self.get(&endpoint, &url).await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: Vec<RestCountry> = decode(&endpoint, resp).await?;
        Ok(Some(into_records(body)))
    }

    /// Every country, optionally restricted to `fields` to shrink the payload.
    ///
    /// Calls `GET {base_url}/all` or `GET {base_url}/all?fields={a,b,...}`.
    /// `cca3` is always requested when a field list is given.
    pub async fn fetch_all(&self, fields: &[&str]) -> Result<Vec<CountryRecord>, CountriesApiError> {
        let endpoint = "GET /all";
        let url = if fields.is_empty() {
            self.url("all")
        } else {
            let mut requested: Vec<&str> = vec!["cca3"];
            requested.extend(fields.iter().copied().filter(|f| *f != "cca3"));
            self.url(&format!("all?fields={}", requested.join(",")))
        };

        let resp = self.get(endpoint, &url).await?;
        let body: Vec<RestCountry> = decode(endpoint, resp).await?;
        Ok(into_records(body))
    }
}
