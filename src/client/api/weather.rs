//! Daily forecasts from an Open-Meteo compatible API.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::client::{api::helper::send_request, model::error::ApiError};

/// Forecasts are requested for the league's home ground in Ghent.
pub const LATITUDE: f64 = 51.05;
pub const LONGITUDE: f64 = 3.72;

/// Number of days ahead the forecast API covers.
pub const FORECAST_DAYS: i64 = 7;

#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    pub date: NaiveDate,
    pub description: &'static str,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation: f64,
}

#[derive(Deserialize)]
struct ForecastResponse {
    daily: DailyForecast,
}

#[derive(Deserialize)]
struct DailyForecast {
    time: Vec<NaiveDate>,
    weathercode: Vec<u8>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
}

/// Whether `date` lies between `today` and `today + 7 days`, both inclusive.
pub fn within_forecast_window(date: NaiveDate, today: NaiveDate) -> bool {
    let days = (date - today).num_days();
    (0..=FORECAST_DAYS).contains(&days)
}

/// Describes a WMO weather interpretation code.
pub fn describe(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 | 77 => "Snow",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

/// Fetches the forecast for `date`.
///
/// Returns `Ok(None)` without calling the API when `date` is outside the forecast
/// window.
pub async fn get_forecast(
    http: &Client,
    endpoint: &Url,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<Option<Forecast>, ApiError> {
    if !within_forecast_window(date, today) {
        return Ok(None);
    }

    let day = date.format("%Y-%m-%d").to_string();
    let request = http.get(endpoint.clone()).query(&[
        ("latitude", LATITUDE.to_string()),
        ("longitude", LONGITUDE.to_string()),
        (
            "daily",
            "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum".to_string(),
        ),
        ("timezone", "Europe/Brussels".to_string()),
        ("start_date", day.clone()),
        ("end_date", day),
    ]);
    let response = send_request(request).await?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        return Err(ApiError {
            status,
            message: format!("Weather service answered {}", status),
        });
    }

    let body: ForecastResponse = response.json().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse forecast: {}", e),
    })?;
    let daily = body.daily;

    let forecast = daily
        .time
        .iter()
        .position(|day| *day == date)
        .and_then(|i| {
            Some(Forecast {
                date,
                description: describe(*daily.weathercode.get(i)?),
                temperature_max: *daily.temperature_2m_max.get(i)?,
                temperature_min: *daily.temperature_2m_min.get(i)?,
                precipitation: *daily.precipitation_sum.get(i)?,
            })
        });

    Ok(forecast)
}
