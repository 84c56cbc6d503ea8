use std::cmp::Ordering;

use serde::Serialize;

use crate::core::{YearlyData, format_amount};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Columns of the yearly table that can be sorted on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Age,
    Amount,
    InflationAdjusted,
    RealReturn,
}

impl SortField {
    pub fn compare(self, a: &YearlyData, b: &YearlyData) -> Ordering {
        match self {
            SortField::Age => a.age.cmp(&b.age),
            SortField::Amount => a.amount.total_cmp(&b.amount),
            SortField::InflationAdjusted => a.inflation_adjusted.total_cmp(&b.inflation_adjusted),
            SortField::RealReturn => a.real_return.total_cmp(&b.real_return),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort column, direction and 1-based page of a table view.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableState {
    pub sort_field: SortField,
    pub direction: SortDirection,
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort_field: SortField::Age,
            direction: SortDirection::Asc,
            page: 1,
        }
    }
}

impl TableState {
    /// Selecting the active column flips its direction; any other column
    /// starts ascending. Either way the view goes back to page 1.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first row shown, 0 when there are no rows.
    pub first_index: usize,
    pub last_index: usize,
    pub total_rows: usize,
    pub rows: Vec<YearlyData>,
}

pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(page_size)
}

/// Sorts a copy of `rows` per `state` and slices out the requested page.
/// Pages past the end clamp to the last page.
pub fn page_of(rows: &[YearlyData], state: TableState, page_size: usize) -> TablePage {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ord = state.sort_field.compare(a, b);
        match state.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    let total_rows = sorted.len();
    let total_pages = total_pages(total_rows, page_size);
    if total_pages == 0 {
        return TablePage {
            sort_field: state.sort_field,
            sort_direction: state.direction,
            page: 1,
            total_pages,
            first_index: 0,
            last_index: 0,
            total_rows,
            rows: Vec::new(),
        };
    }

    let page = state.page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_rows);

    TablePage {
        sort_field: state.sort_field,
        sort_direction: state.direction,
        page,
        total_pages,
        first_index: start + 1,
        last_index: end,
        total_rows,
        rows: sorted[start..end].to_vec(),
    }
}

/// Display cells for one row: age, nominal, real and cumulative real return.
pub fn format_row(row: &YearlyData) -> [String; 4] {
    [
        format!("{}歳", row.age),
        format_amount(row.amount),
        format_amount(row.inflation_adjusted),
        format!("{:.1}%", row.real_return),
    ]
}
