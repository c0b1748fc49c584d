//! Chart description consumed by the chart rendering service.
//!
//! The layout follows the Chart.js configuration object: a chart type, a
//! `data` block with shared labels and datasets, and display `options`.

use serde::Serialize;

use super::series::CumulativeSeries;

/// Title shown above the chart and referenced in the report message.
pub const REPORT_TITLE: &str = "Tasks Created vs Completed";

const COMPLETED_COLOR: &str = "#078a2a";
const CREATED_FILL: &str = "#ffc4c5";
const CREATED_BORDER: &str = "#d95254";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub fill: bool,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub title: ChartTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub display: bool,
    pub text: String,
}

impl ChartConfig {
    /// Line chart of cumulative created vs completed tasks.
    ///
    /// Labels are taken from the created series; both series cover the same
    /// window so they line up day for day.
    #[must_use]
    pub fn created_vs_completed(created: &CumulativeSeries, completed: &CumulativeSeries) -> Self {
        Self {
            kind: "line",
            data: ChartData {
                labels: created.labels().to_vec(),
                datasets: vec![
                    Dataset {
                        label: "Tasks Completed".to_string(),
                        fill: false,
                        background_color: COMPLETED_COLOR,
                        border_color: COMPLETED_COLOR,
                        data: completed.data().to_vec(),
                    },
                    Dataset {
                        label: "Tasks Created".to_string(),
                        fill: true,
                        background_color: CREATED_FILL,
                        border_color: CREATED_BORDER,
                        data: created.data().to_vec(),
                    },
                ],
            },
            options: ChartOptions {
                title: ChartTitle {
                    display: true,
                    text: REPORT_TITLE.to_string(),
                },
            },
        }
    }
}

/// Text announcing a freshly built chart.
#[must_use]
pub fn report_message(chart_url: &str) -> String {
    format!("Your weekly \"{REPORT_TITLE}\" report is available: {chart_url}")
}
