use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use csv::ReaderBuilder;
use csv::StringRecord;
use csv::Trim;
use log::info;
use serde::Serialize;
use serde::Serializer;

use crate::columns;
use crate::error::LoadError;
use crate::error::Result;
use crate::filter::FilterState;
use crate::view::FilteredView;

/// An immutable table of records loaded from a CSV source.
///
/// The column list keeps the order of the source header, including the
/// columns that are not required by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    records: Vec<Record>,
    source: Option<Source>,
}

impl Dataset {
    /// Reads the dataset from the CSV file at `path`.
    pub fn open(path: &Path) -> Result<Dataset> {
        let file = File::open(path)?;
        let modified = file
            .metadata()?
            .modified()
            .ok()
            .map(DateTime::<Utc>::from);

        let mut dataset = Self::from_reader(file)?;
        dataset.source = Some(Source {
            path: path.to_path_buf(),
            modified,
        });

        info!(
            "loaded {} records with {} columns from `{}`",
            dataset.len(),
            dataset.columns.len(),
            path.display()
        );

        Ok(dataset)
    }

    /// Reads the dataset from any CSV reader. The first line must be the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = reader.headers()?.clone();
        let layout = Layout::resolve(&headers)?;

        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()?;

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| Column::infer(name, index, &rows))
            .collect();

        let records = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Record::parse(i + 1, row, &columns, &layout))
            .collect::<Result<Vec<Record>>>()?;

        Ok(Self {
            columns,
            records,
            source: None,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the position of the column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Selects the records that satisfy `filter`.
    pub fn view(&self, filter: &FilterState) -> FilteredView<'_> {
        FilteredView::new(self, filter)
    }
}

/// Where a dataset was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    fn infer(name: &str, index: usize, rows: &[StringRecord]) -> Column {
        let kind = if name == columns::CHARLES_RIVER {
            ColumnKind::Text
        } else if columns::REQUIRED.contains(&name) {
            ColumnKind::Numeric
        } else {
            let numeric = rows
                .iter()
                .filter_map(|row| row.get(index))
                .filter(|value| !value.is_empty())
                .all(|value| value.parse::<f64>().is_ok());

            if numeric {
                ColumnKind::Numeric
            } else {
                ColumnKind::Text
            }
        };

        Self {
            name: name.to_owned(),
            kind,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// A single value of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Parses a raw value according to the column kind.
    ///
    /// Returns `None` when a numeric column holds a value that is not a number.
    fn parse(raw: &str, kind: ColumnKind) -> Option<Cell> {
        if raw.is_empty() {
            return Some(Cell::Missing);
        }

        match kind {
            ColumnKind::Numeric => raw.parse::<f64>().ok().map(Cell::Number),
            ColumnKind::Text => Some(Cell::Text(raw.to_owned())),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Cell::Number(n) => Some(n),
            Cell::Text(_) | Cell::Missing => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(n) => Display::fmt(n, f),
            Cell::Text(s) => Display::fmt(s, f),
            Cell::Missing => Ok(()),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Number(n) => serializer.serialize_f64(*n),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Missing => serializer.serialize_none(),
        }
    }
}

/// One row of the dataset.
///
/// The typed fields are the values the dashboard filters and aggregates on.
/// `CHAS` and `RAD` are kept as labels because they are matched by exact
/// set membership. The complete row, including optional columns, is
/// available through [`Record::cells`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub crime_rate: f64,
    pub zoning: f64,
    pub industrial: f64,
    pub chas: String,
    pub nox: f64,
    pub rooms: f64,
    pub age: f64,
    pub distance: f64,
    pub rad: String,
    pub tax_rate: f64,
    pub pupil_teacher_ratio: f64,
    pub lower_status: f64,
    pub predicted_price: f64,
    cells: Vec<Cell>,
}

impl Record {
    fn parse(
        row_number: usize,
        row: &StringRecord,
        schema: &[Column],
        layout: &Layout,
    ) -> Result<Record> {
        let mut cells = Vec::with_capacity(schema.len());

        for (index, column) in schema.iter().enumerate() {
            let raw = row.get(index).unwrap_or_default();

            let cell = match Cell::parse(raw, column.kind) {
                Some(Cell::Text(label)) if index == layout.chas => {
                    Cell::Text(category_label(&label))
                }
                Some(cell) => cell,
                None => {
                    return Err(invalid_value(row_number, &column.name, raw));
                }
            };

            cells.push(cell);
        }

        let number = |index: usize, column: &'static str| -> Result<f64> {
            cells[index]
                .as_number()
                .ok_or_else(|| invalid_value(row_number, column, ""))
        };

        let chas = match &cells[layout.chas] {
            Cell::Text(label) => label.clone(),
            _ => return Err(invalid_value(row_number, columns::CHARLES_RIVER, "")),
        };

        Ok(Self {
            crime_rate: number(layout.crime_rate, columns::CRIME_RATE)?,
            zoning: number(layout.zoning, columns::ZONING)?,
            industrial: number(layout.industrial, columns::INDUSTRIAL)?,
            chas,
            nox: number(layout.nox, columns::NOX)?,
            rooms: number(layout.rooms, columns::ROOMS)?,
            age: number(layout.age, columns::AGE)?,
            distance: number(layout.distance, columns::DISTANCE)?,
            rad: format_label(number(layout.rad, columns::RADIAL_HIGHWAY)?),
            tax_rate: number(layout.tax_rate, columns::TAX_RATE)?,
            pupil_teacher_ratio: number(layout.pupil_teacher_ratio, columns::PUPIL_TEACHER_RATIO)?,
            lower_status: number(layout.lower_status, columns::LOWER_STATUS)?,
            predicted_price: number(layout.predicted_price, columns::PREDICTED_PRICE)?,
            cells,
        })
    }

    /// The complete row in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

fn invalid_value(row: usize, column: &str, value: &str) -> LoadError {
    LoadError::InvalidValue {
        row,
        column: column.to_owned(),
        value: value.to_owned(),
    }
}

/// Normalizes a categorical value: numbers lose any redundant fraction
/// (`1.0` becomes `1`), anything else is kept as is.
fn category_label(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(n) => format_label(n),
        Err(_) => raw.to_owned(),
    }
}

fn format_label(n: f64) -> String {
    format!("{n}")
}

/// Positions of the required columns in the source header.
struct Layout {
    crime_rate: usize,
    zoning: usize,
    industrial: usize,
    chas: usize,
    nox: usize,
    rooms: usize,
    age: usize,
    distance: usize,
    rad: usize,
    tax_rate: usize,
    pupil_teacher_ratio: usize,
    lower_status: usize,
    predicted_price: usize,
}

impl Layout {
    fn resolve(headers: &StringRecord) -> Result<Layout> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(LoadError::MissingColumn { name })
        };

        Ok(Self {
            crime_rate: position(columns::CRIME_RATE)?,
            zoning: position(columns::ZONING)?,
            industrial: position(columns::INDUSTRIAL)?,
            chas: position(columns::CHARLES_RIVER)?,
            nox: position(columns::NOX)?,
            rooms: position(columns::ROOMS)?,
            age: position(columns::AGE)?,
            distance: position(columns::DISTANCE)?,
            rad: position(columns::RADIAL_HIGHWAY)?,
            tax_rate: position(columns::TAX_RATE)?,
            pupil_teacher_ratio: position(columns::PUPIL_TEACHER_RATIO)?,
            lower_status: position(columns::LOWER_STATUS)?,
            predicted_price: position(columns::PREDICTED_PRICE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing;

    #[test]
    fn load_keeps_header_order_and_kinds() {
        let dataset = testing::sample();

        let names: Vec<&str> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, testing::HEADER.split(',').collect::<Vec<_>>());

        let chas = &dataset.columns()[dataset.column_index("CHAS").unwrap()];
        assert_eq!(chas.kind, ColumnKind::Text);
        assert!(dataset.columns().iter().filter(|c| c.name != "CHAS").all(Column::is_numeric));
        assert_eq!(dataset.len(), 6);
    }

    #[test]
    fn load_parses_typed_fields() {
        let dataset = testing::sample();

        let record = &dataset.records()[2];
        assert_eq!(record.chas, "1");
        assert_eq!(record.rad, "2");
        assert_eq!(record.rooms, 7.185);
        assert_eq!(record.predicted_price, 33.9);
        assert_eq!(record.cell(11), Some(&Cell::Number(392.83)));
        assert_eq!(record.cell(3), Some(&Cell::Text(String::from("1"))));
    }

    #[test]
    fn categorical_labels_are_normalized() {
        let csv = format!(
            "{}\n0.1,0,7,1.0,0.4,6,70,4,24.0,242,17,396,9,21,22\n",
            testing::HEADER
        );

        let dataset = testing::dataset(&csv);

        assert_eq!(dataset.records()[0].chas, "1");
        assert_eq!(dataset.records()[0].rad, "24");
    }

    #[test]
    fn optional_columns_are_inferred() {
        let csv = "\
CRIM,ZN,INDUS,CHAS,NOX,RM,AGE,DIS,RAD,TAX,PTRATIO,LSTAT,PredictedPrice,Town,Score
0.1,0,7,0,0.4,6,70,4,1,242,17,9,22,Nahant,
0.2,0,7,1,0.4,6,70,4,1,242,17,9,23,Swampscott,0.5
";

        let dataset = testing::dataset(csv);

        let town = &dataset.columns()[13];
        let score = &dataset.columns()[14];
        assert_eq!(town.kind, ColumnKind::Text);
        assert_eq!(score.kind, ColumnKind::Numeric);
        assert_eq!(dataset.records()[0].cell(14), Some(&Cell::Missing));
        assert_eq!(dataset.records()[1].cell(14), Some(&Cell::Number(0.5)));
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "CRIM,ZN,INDUS,CHAS,NOX,RM,AGE,DIS,RAD,TAX,PTRATIO,LSTAT\n";

        let error = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            error,
            LoadError::MissingColumn {
                name: "PredictedPrice"
            }
        ));
    }

    #[test]
    fn empty_input_is_missing_every_column() {
        let error = Dataset::from_reader("".as_bytes()).unwrap_err();

        assert!(matches!(error, LoadError::MissingColumn { name: "CRIM" }));
    }

    #[test]
    fn unparsable_required_value_is_fatal() {
        let csv = format!(
            "{}\n0.1,0,7,0,0.4,six,70,4,1,242,17,396,9,21,22\n",
            testing::HEADER
        );

        let error = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        match error {
            LoadError::InvalidValue { row, column, value } => {
                assert_eq!((row, column.as_str(), value.as_str()), (1, "RM", "six"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_required_value_is_fatal() {
        let csv = format!(
            "{}\n0.1,0,7,0,0.4,6,70,4,1,242,17,396,9,21,22\n0.1,0,7,,0.4,6,70,4,1,242,17,396,9,21,22\n",
            testing::HEADER
        );

        let error = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(error, LoadError::InvalidValue { row: 2, .. }));
    }

    #[test]
    fn header_only_input_is_an_empty_dataset() {
        let dataset = testing::dataset(testing::HEADER);

        assert!(dataset.is_empty());
        assert_eq!(dataset.columns().len(), 15);
    }

    #[test]
    fn open_records_the_source() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(testing::SAMPLE.as_bytes())?;
        file.flush()?;

        let dataset = Dataset::open(file.path())?;

        let source = dataset.source().unwrap();
        assert_eq!(source.path, file.path());
        assert!(source.modified.is_some());
        assert_eq!(dataset.len(), 6);

        Ok(())
    }

    #[test]
    fn open_missing_file_is_an_io_error() {
        let error = Dataset::open(Path::new("does/not/exist.csv")).unwrap_err();

        assert!(matches!(error, LoadError::Io(_)));
    }
}
