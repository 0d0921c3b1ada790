//! Year selection for the seasonal view.
//!
//! The selected year is shown in the selector label only. The chart always
//! plots the same seasonal series.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSelector {
    selected: i32,
}

impl YearSelector {
    /// Years offered by the selector buttons.
    pub const YEARS: [i32; 6] = [2019, 2020, 2021, 2022, 2023, 2024];

    pub fn selected(&self) -> i32 {
        self.selected
    }

    pub fn select(&mut self, year: i32) {
        self.selected = year;
    }
}

impl Default for YearSelector {
    fn default() -> Self {
        Self { selected: 2024 }
    }
}
