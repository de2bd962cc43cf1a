//! Audit log (`eventlog`) search

use crate::common::GenericClient;
use crate::error::NetworkApiError;
use crate::models::Pagination;
use chrono::NaiveDate;
use serde_json::{Map, Value, json};

/// Date format the server expects in log searches
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Search filters of [`EventLog::find`]
#[derive(Debug, Clone, Default)]
pub struct EventLogSearch {
    /// Login of the user who acted
    pub user_name: Option<String>,
    /// Action (`Cadastrar`, `Alterar`, `Remover`)
    pub action: Option<String>,
    /// Functionality (resource family)
    pub functionality: Option<String>,
    /// Id of the touched object
    pub object_id: Option<u64>,
    /// First day of the search window
    pub start_date: Option<NaiveDate>,
    /// Last day of the search window
    pub end_date: Option<NaiveDate>,
}

impl EventLogSearch {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("usuario".into(), json!(self.user_name));
        map.insert("acao".into(), json!(self.action));
        map.insert("funcionalidade".into(), json!(self.functionality));
        map.insert("parametro".into(), json!(self.object_id));
        map.insert("data_inicial".into(), json!(format_date(self.start_date)));
        map.insert("data_final".into(), json!(format_date(self.end_date)));
        map
    }
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|date| date.format(DATE_FORMAT).to_string())
}

/// Event log façade
#[derive(Debug, Clone)]
pub struct EventLog {
    client: GenericClient,
}

impl EventLog {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Search the audit log with pagination
    pub async fn find(&self, search: &EventLogSearch, pagination: &Pagination) -> Result<Value, NetworkApiError> {
        if let (Some(start), Some(end)) = (search.start_date, search.end_date) {
            if start > end {
                return Err(NetworkApiError::invalid_parameter(
                    "Start date must not be after end date.",
                ));
            }
        }
        let mut map = search.to_map();
        pagination.apply(&mut map)?;
        let payload = json!({ "eventlog": map });
        self.client.post("eventlog/find/", &payload, &["eventlog"]).await
    }

    /// Users, actions and functionalities that may be searched on
    pub async fn get_choices(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("eventlog/choices/", &["usuario", "acao", "funcionalidade"])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_use_day_month_year() {
        let search = EventLogSearch {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 7),
            ..EventLogSearch::default()
        };
        let map = search.to_map();
        assert_eq!(map["data_inicial"], json!("07/03/2024"));
        assert_eq!(map["data_final"], Value::Null);
    }
}
