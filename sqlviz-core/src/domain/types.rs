use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chart style the server is asked to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Scatter,
    Area,
    Doughnut,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Area,
        ChartType::Doughnut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Area => "area",
            ChartType::Doughnut => "doughnut",
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|chart| *chart == self)
            .unwrap_or_default()
    }

    /// Next option in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous option in selector order, wrapping around.
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Comma separated list of every accepted name.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|chart| chart.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart type '{value}' (expected one of: {expected})")]
pub struct ParseChartTypeError {
    pub value: String,
    pub expected: String,
}

impl FromStr for ChartType {
    type Err = ParseChartTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|chart| chart.as_str() == needle)
            .ok_or_else(|| ParseChartTypeError {
                value: value.to_string(),
                expected: Self::names(),
            })
    }
}

/// Body of `POST /api/v1/analysis/analyse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub sql_prompt: String,
    pub chart_type: ChartType,
}

impl AnalysisRequest {
    pub fn new(sql_prompt: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            sql_prompt: sql_prompt.into(),
            chart_type,
        }
    }
}

/// Successful analysis result.
///
/// None of the fields are validated: a server that leaves one out produces
/// `None` here and a placeholder on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl AnalysisResponse {
    /// The final `/`-separated segment of `file_path`.
    pub fn file_name(&self) -> Option<&str> {
        self.file_path.as_deref().map(file_name)
    }
}

/// Last `/`-separated segment of a path or URL. A trailing slash yields an
/// empty name.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
