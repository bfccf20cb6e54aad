//! Raw data pager: sequential fixed-size windows over a trip table

use crate::domain::{TripRecord, TripTable};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// One window of rows and the position of its first row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub start: usize,
    pub rows: &'a [TripRecord],
}

/// Cursor over a table, advancing [`PAGE_SIZE`] rows per call.
#[derive(Debug)]
pub struct RawDataPager<'a> {
    table: &'a TripTable,
    cursor: usize,
    page_size: usize,
}

impl<'a> RawDataPager<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self::with_page_size(table, PAGE_SIZE)
    }

    fn with_page_size(table: &'a TripTable, page_size: usize) -> Self {
        Self {
            table,
            cursor: 0,
            page_size: page_size.max(1),
        }
    }

    /// Rows `[cursor, cursor + page_size)`, then advance the cursor.
    pub fn next_page(&mut self) -> Page<'a> {
        let records = self.table.records();
        let start = self.cursor.min(records.len());
        let end = (start + self.page_size).min(records.len());
        self.cursor += self.page_size;
        Page {
            start,
            rows: &records[start..end],
        }
    }

    /// True once the cursor has passed the last row.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{columns, RawTable};

    fn table(rows: usize) -> TripTable {
        let durations: Vec<String> = (0..rows).map(|i| i.to_string()).collect();
        let rows: Vec<Vec<&str>> = durations
            .iter()
            .map(|d| vec!["2017-01-01 00:00:00", "", d.as_str(), "A", "B", "Subscriber"])
            .collect();
        TripTable::from_raw(&RawTable::from_rows(&columns::REQUIRED, &rows)).unwrap()
    }

    #[test]
    fn given_seven_rows_when_paging_then_five_then_two_then_exhausted() {
        let table = table(7);
        let mut pager = RawDataPager::new(&table);

        let first = pager.next_page();
        assert_eq!(first.start, 0);
        assert_eq!(first.rows.len(), 5);
        assert!(!pager.is_exhausted());

        let second = pager.next_page();
        assert_eq!(second.start, 5);
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.rows[1].trip_duration, 6.0);
        assert!(pager.is_exhausted());
    }

    #[test]
    fn given_exact_multiple_when_paging_then_exhausted_after_last_full_page() {
        let table = table(5);
        let mut pager = RawDataPager::new(&table);

        assert_eq!(pager.next_page().rows.len(), 5);
        assert!(pager.is_exhausted());
    }

    #[test]
    fn given_empty_table_when_paging_then_empty_page() {
        let table = table(0);
        let mut pager = RawDataPager::new(&table);

        assert!(pager.is_exhausted());
        let page = pager.next_page();
        assert!(page.rows.is_empty());
        assert_eq!(pager.cursor, PAGE_SIZE);
    }
}
