//! OurAirports CSV client and parser.

use std::io::Read;
use std::time::Duration;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::domain::Icao;

use super::directory::Airport;
use super::error::AirportError;

/// Public OurAirports dump, one row per airfield worldwide.
pub const OURAIRPORTS_CSV_URL: &str =
    "https://davidmegginson.github.io/ourairports-data/airports.csv";

/// Airport types kept from the dump. Heliports, seaplane bases and small
/// strips are dropped.
const KEPT_TYPES: [&str; 2] = ["medium_airport", "large_airport"];

/// The columns of an OurAirports row that we use. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct AirportRow {
    ident: String,
    #[serde(rename = "type")]
    kind: String,
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    #[serde(default)]
    iso_country: Option<String>,
}

/// Parse airports out of OurAirports-format CSV.
///
/// Rows that are malformed, not medium or large airports, or whose `ident`
/// is not an ICAO code are skipped.
pub fn parse_airports(reader: impl Read) -> Vec<Airport> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut airports = Vec::new();
    for record in csv_reader.deserialize::<AirportRow>() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed airport row");
                continue;
            }
        };

        if !KEPT_TYPES.contains(&row.kind.as_str()) {
            continue;
        }

        let Ok(icao) = Icao::parse_normalized(&row.ident) else {
            continue;
        };

        if !(-90.0..=90.0).contains(&row.latitude_deg)
            || !(-180.0..=180.0).contains(&row.longitude_deg)
        {
            tracing::warn!(%icao, "skipping airport with out-of-range coordinates");
            continue;
        }

        airports.push(Airport {
            icao,
            name: row.name,
            latitude: row.latitude_deg,
            longitude: row.longitude_deg,
            kind: row.kind,
            country: row.iso_country.unwrap_or_default(),
        });
    }

    airports
}

/// Configuration for the airport data client.
#[derive(Debug, Clone)]
pub struct AirportClientConfig {
    /// Where to download the CSV from
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AirportClientConfig {
    fn default() -> Self {
        Self {
            url: OURAIRPORTS_CSV_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl AirportClientConfig {
    /// Set a custom CSV URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Downloads airport data.
#[derive(Debug, Clone)]
pub struct AirportClient {
    http: reqwest::Client,
    url: String,
}

impl AirportClient {
    /// Create a new client.
    pub fn new(config: AirportClientConfig) -> Result<Self, AirportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The CSV URL this client downloads.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse every medium and large airport.
    pub async fn fetch_all(&self) -> Result<Vec<Airport>, AirportError> {
        tracing::info!(url = %self.url, "downloading airport data");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AirportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let airports = parse_airports(body.as_ref());

        if airports.is_empty() {
            return Err(AirportError::Empty {
                url: self.url.clone(),
            });
        }

        tracing::info!(count = airports.len(), "parsed airport data");
        Ok(airports)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{Router, http::StatusCode, routing::get};

    use super::*;

    const SAMPLE: &str = "\
id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,continent,iso_country
3622,KJFK,large_airport,John F Kennedy International Airport,40.639447,-73.779317,13,NA,US
6523,00A,heliport,Total RF Heliport,40.070985,-74.933689,11,NA,US
3484,KBFI,medium_airport,King County International Airport,47.529999,-122.302002,21,NA,US
1,EGZZ,small_airport,Some Farm Strip,52.0,-1.0,300,EU,GB
2,XXXX,large_airport,Broken Row,not-a-number,0.0,0,EU,GB
";

    async fn serve(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> AirportClient {
        AirportClient::new(
            AirportClientConfig::default().with_url(format!("http://{addr}/airports.csv")),
        )
        .unwrap()
    }

    #[test]
    fn keeps_only_medium_and_large_airports() {
        let airports = parse_airports(SAMPLE.as_bytes());
        let codes: Vec<&str> = airports.iter().map(|a| a.icao.as_str()).collect();
        assert_eq!(codes, vec!["KJFK", "KBFI"]);

        let jfk = &airports[0];
        assert_eq!(jfk.name, "John F Kennedy International Airport");
        assert_eq!(jfk.kind, "large_airport");
        assert_eq!(jfk.country, "US");
        assert!((jfk.latitude - 40.639447).abs() < 1e-9);
    }

    #[test]
    fn lowercase_ident_is_normalized() {
        let csv = "ident,type,name,latitude_deg,longitude_deg\n\
                   egll,large_airport,London Heathrow Airport,51.4706,-0.461941\n";
        let airports = parse_airports(csv.as_bytes());
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].icao.as_str(), "EGLL");
        assert_eq!(airports[0].country, "");
    }

    #[test]
    fn out_of_range_coordinates_are_dropped() {
        let csv = "ident,type,name,latitude_deg,longitude_deg\n\
                   ABCD,large_airport,Nowhere,91.0,0.0\n\
                   ABCE,large_airport,Elsewhere,0.0,181.0\n";
        assert!(parse_airports(csv.as_bytes()).is_empty());
    }

    #[test]
    fn config_defaults_to_ourairports() {
        let config = AirportClientConfig::default().with_timeout(5);
        assert_eq!(config.url, OURAIRPORTS_CSV_URL);
        assert_eq!(config.timeout_secs, 5);
    }

    #[tokio::test]
    async fn fetches_and_parses_csv() {
        let app = Router::new().route("/airports.csv", get(|| async { SAMPLE }));
        let addr = serve(app).await;

        let airports = client_for(addr).fetch_all().await.unwrap();
        assert_eq!(airports.len(), 2);
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let app = Router::new().route(
            "/airports.csv",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let addr = serve(app).await;

        let err = client_for(addr).fetch_all().await.unwrap_err();
        assert!(matches!(err, AirportError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn csv_without_airports_is_an_error() {
        let app = Router::new().route(
            "/airports.csv",
            get(|| async { "ident,type,name,latitude_deg,longitude_deg\n" }),
        );
        let addr = serve(app).await;

        let client = client_for(addr);
        let err = client.fetch_all().await.unwrap_err();
        match err {
            AirportError::Empty { url } => assert_eq!(url, client.url()),
            other => panic!("expected empty error, got {other:?}"),
        }
    }
}
