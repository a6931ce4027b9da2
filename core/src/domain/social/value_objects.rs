use chrono::{Datelike, Local};

pub use chrono::Weekday;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyPostInput {
    /// Day whose theme is used; today (local time) when absent.
    pub weekday: Option<Weekday>,
}

impl DailyPostInput {
    /// Accepts English day names or their three-letter forms, any case.
    pub fn from_weekday_name(name: Option<&str>) -> Result<Self, CoreError> {
        let weekday = name
            .map(|n| {
                n.trim()
                    .parse::<Weekday>()
                    .map_err(|_| CoreError::Invalid(format!("unknown weekday '{n}'")))
            })
            .transpose()?;

        Ok(Self { weekday })
    }

    pub fn resolve_weekday(&self) -> Weekday {
        self.weekday.unwrap_or_else(|| Local::now().weekday())
    }
}
