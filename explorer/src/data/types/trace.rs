//! Trace list and trace details response types

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::span::Span;

/// Trace summary row as served by the trace list API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    pub trace_id: String,
    #[serde(default)]
    pub root_span_id: String,
    #[serde(default)]
    pub root_span_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_span_kind: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub duration_in_nanos: u64,
    #[serde(default)]
    pub span_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TraceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_usage: Option<TraceTokenUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStatus {
    #[serde(default)]
    pub error_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceTokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceListResponse {
    #[serde(default)]
    pub traces: Vec<Trace>,
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDetailsResponse {
    #[serde(default)]
    pub spans: Vec<Span>,
    #[serde(default)]
    pub total_count: u64,
}

/// Lookback window offered by the trace list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceListTimeRange {
    #[serde(rename = "10m")]
    TenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "3h")]
    ThreeHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "7d")]
    SevenDays,
}

impl TraceListTimeRange {
    pub const ALL: [Self; 9] = [
        Self::TenMinutes,
        Self::ThirtyMinutes,
        Self::OneHour,
        Self::ThreeHours,
        Self::SixHours,
        Self::TwelveHours,
        Self::OneDay,
        Self::ThreeDays,
        Self::SevenDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TenMinutes => "10m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::ThreeHours => "3h",
            Self::SixHours => "6h",
            Self::TwelveHours => "12h",
            Self::OneDay => "1d",
            Self::ThreeDays => "3d",
            Self::SevenDays => "7d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TenMinutes => "10 Minutes",
            Self::ThirtyMinutes => "30 Minutes",
            Self::OneHour => "1 Hour",
            Self::ThreeHours => "3 Hours",
            Self::SixHours => "6 Hours",
            Self::TwelveHours => "12 Hours",
            Self::OneDay => "1 Day",
            Self::ThreeDays => "3 Days",
            Self::SevenDays => "7 Days",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Self::TenMinutes => Duration::minutes(10),
            Self::ThirtyMinutes => Duration::minutes(30),
            Self::OneHour => Duration::hours(1),
            Self::ThreeHours => Duration::hours(3),
            Self::SixHours => Duration::hours(6),
            Self::TwelveHours => Duration::hours(12),
            Self::OneDay => Duration::days(1),
            Self::ThreeDays => Duration::days(3),
            Self::SevenDays => Duration::days(7),
        }
    }
}

impl fmt::Display for TraceListTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraceListTimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == needle)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|r| r.as_str()).collect();
                format!(
                    "Invalid time range '{}'. Valid options: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}
