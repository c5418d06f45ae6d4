//! The column and row projection handed to the AG Grid table.

use dragon_data::Column;
use dragon_data::FilteredView;
use dragon_data::Record;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

/// Rows shown per page of the table.
pub const PAGE_SIZE: usize = 10;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef<'a> {
    pub field: &'a str,
    pub header_name: &'a str,
}

/// One record keyed by column name, in dataset column order.
#[derive(Debug, Clone, Copy)]
pub struct GridRow<'a> {
    columns: &'a [Column],
    record: &'a Record,
}

impl<'a> GridRow<'a> {
    pub fn record(&self) -> &'a Record {
        self.record
    }
}

impl Serialize for GridRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (index, column) in self.columns.iter().enumerate() {
            map.serialize_entry(&column.name, &self.record.cell(index))?;
        }
        map.end()
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GridProjection<'a> {
    pub column_defs: Vec<ColumnDef<'a>>,
    pub row_data: Vec<GridRow<'a>>,
}

impl<'a> GridProjection<'a> {
    pub fn of(view: &FilteredView<'a>) -> GridProjection<'a> {
        let columns = view.columns();

        let column_defs = columns
            .iter()
            .map(|column| ColumnDef {
                field: &column.name,
                header_name: &column.name,
            })
            .collect();

        let row_data = view
            .iter()
            .map(|record| GridRow { columns, record })
            .collect();

        Self {
            column_defs,
            row_data,
        }
    }
}

/// The grid configuration passed to `agGrid.createGrid`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions<'a> {
    #[serde(flatten)]
    pub projection: &'a GridProjection<'a>,
    pub pagination: bool,
    pub pagination_page_size: usize,
    pub dom_layout: &'static str,
    pub default_col_def: DefaultColumnDef,
}

impl<'a> GridOptions<'a> {
    pub fn new(projection: &'a GridProjection<'a>) -> GridOptions<'a> {
        Self {
            projection,
            pagination: true,
            pagination_page_size: PAGE_SIZE,
            dom_layout: "normal",
            default_col_def: DefaultColumnDef::default(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultColumnDef {
    pub sortable: bool,
    pub filter: bool,
    pub resizable: bool,
    pub floating_filter: bool,
}

impl Default for DefaultColumnDef {
    fn default() -> Self {
        Self {
            sortable: true,
            filter: true,
            resizable: true,
            floating_filter: true,
        }
    }
}
