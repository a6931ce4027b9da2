use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DailyPostQuery {
    /// Weekday whose theme to post (e.g. `friday`); defaults to today
    pub weekday: Option<String>,
}
