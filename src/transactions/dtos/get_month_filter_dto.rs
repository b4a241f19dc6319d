use serde::Deserialize;

use crate::transactions::util::date_window::DateWindow;

#[derive(Debug, Default, Deserialize)]
pub struct GetMonthFilterDto {
    pub month: Option<String>,
}

impl GetMonthFilterDto {
    pub fn window(&self) -> DateWindow {
        DateWindow::from_month(self.month.as_deref())
    }
}
