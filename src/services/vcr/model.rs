use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutMediaArgs {
    /// 媒體來源，例如 `bos://bucket/key` 或 http(s) URL
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub auth: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub preset: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub notification: String,
}

/// One recognized hit inside a media file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResultItem {
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub time_in_seconds: Option<f64>,
    #[serde(default)]
    pub start_time_in_seconds: Option<f64>,
    #[serde(default)]
    pub end_time_in_seconds: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub extra: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaTypeResult {
    /// 審核維度，例如 `porn`、`terrorism`、`politician`
    #[serde(rename = "type", default)]
    pub result_type: String,
    #[serde(default)]
    pub items: Vec<MediaResultItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMediaResult {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub media_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preset: String,
    /// `PROVISIONING` / `PROCESSING` / `FINISHED` / `FAILED`
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub percent: u32,
    #[serde(default)]
    pub notification: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub finish_time: String,
    /// 總結論：`NORMAL` / `REVIEW` / `REJECT`
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub results: Vec<MediaTypeResult>,
    #[serde(default)]
    pub error: Option<MediaError>,
}

impl GetMediaResult {
    pub fn is_finished(&self) -> bool {
        self.status == "FINISHED" || self.status == "FAILED"
    }
}
