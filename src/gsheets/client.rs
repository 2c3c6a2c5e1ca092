// src/gsheets/client.rs

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::auth::ServiceAccountAuth;
use super::SheetsError;
use crate::config::{ServiceAccountKey, OAUTH_SCOPES};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<serde_json::Value>>>,
}

/// Authorized, read-only client for one service account. Construct it once
/// per process and share it; the token cache inside `ServiceAccountAuth`
/// makes repeated use cheap.
pub struct SheetsClient {
    http: reqwest::Client,
    auth: ServiceAccountAuth,
}

impl SheetsClient {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth: ServiceAccountAuth::new(key, &OAUTH_SCOPES),
        }
    }

    pub fn client_email(&self) -> &str {
        self.auth.client_email()
    }

    /// Title of the spreadsheet's first worksheet.
    pub async fn first_worksheet_title(&self, spreadsheet_id: &str) -> Result<String, SheetsError> {
        let mut url = Url::parse(SHEETS_API_BASE).map_err(|_| SheetsError::InvalidUrl)?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl)?
            .push(spreadsheet_id);
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");

        let meta: SpreadsheetMeta = self.get_json(url).await?;
        meta.sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties.title)
            .ok_or(SheetsError::NoWorksheets)
    }

    /// All rows of one worksheet, as formatted cell strings. Blank cells come
    /// back as empty strings; numbers and booleans are stringified.
    pub async fn read_worksheet_rows(
        &self,
        spreadsheet_id: &str,
        worksheet_title: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let mut url = Url::parse(SHEETS_API_BASE).map_err(|_| SheetsError::InvalidUrl)?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl)?
            .push(spreadsheet_id)
            .push("values")
            .push(worksheet_title);
        url.query_pairs_mut().append_pair("majorDimension", "ROWS");

        let range: ValueRange = self.get_json(url).await?;
        Ok(range
            .values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    /// Convenience wrapper: rows of the first worksheet.
    pub async fn read_first_worksheet(
        &self,
        spreadsheet_id: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let title = self.first_worksheet_title(spreadsheet_id).await?;
        self.read_worksheet_rows(spreadsheet_id, &title).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SheetsError> {
        let token = self.auth.access_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(SheetsError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_values_are_stringified() {
        assert_eq!(cell_to_string(serde_json::json!("佐藤太郎")), "佐藤太郎");
        assert_eq!(cell_to_string(serde_json::json!(42)), "42");
        assert_eq!(cell_to_string(serde_json::json!(true)), "true");
        assert_eq!(cell_to_string(serde_json::Value::Null), "");
    }

    #[test]
    fn value_range_with_rows_parses() {
        let json = r#"{
            "range": "'シート1'!A1:C3",
            "majorDimension": "ROWS",
            "values": [["氏名", "職種"], ["佐藤太郎", "看護師"]]
        }"#;
        let range: ValueRange = serde_json::from_str(json).unwrap();
        let values = range.values.unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0][0], "氏名");
    }

    #[test]
    fn empty_worksheet_omits_values() {
        let json = r#"{"range": "'シート1'!A1:Z1000", "majorDimension": "ROWS"}"#;
        let range: ValueRange = serde_json::from_str(json).unwrap();
        assert!(range.values.is_none());
    }

    #[test]
    fn spreadsheet_meta_first_title() {
        let json = r#"{"sheets": [
            {"properties": {"title": "職員名簿"}},
            {"properties": {"title": "アーカイブ"}}
        ]}"#;
        let meta: SpreadsheetMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.sheets[0].properties.title, "職員名簿");
    }
}
