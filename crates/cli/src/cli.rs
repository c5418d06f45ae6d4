use std::env;
use std::path::Path;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use dragon_data::Controls;
use dragon_data::Dataset;
use dragon_data::FilterState;
use dragon_data::Range;
use dragon_data::RangeField;
use log::LevelFilter;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase the logging verbosity (-v info, -vv debug, -vvv trace).
    /// The `RUST_LOG` environment variable is used when no flag is given.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Cli {
    pub(crate) fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate the HTML dashboard for the filtered dataset.
    Render(RenderArgs),
    /// Print the summary cards of the filtered dataset.
    Summary(SummaryArgs),
    /// Export the summary, the charts and the grid rows as JSON.
    Export(ExportArgs),
    /// Print the filter controls derived from the dataset as JSON.
    Controls(DataArgs),
}

#[derive(Args)]
pub(crate) struct DataArgs {
    /// Specify the CSV file of predicted prices.
    /// The path must exist and it must point to a file.
    #[arg(short, long, default_value = "Predicted_Data.csv")]
    pub(crate) data: PathBuf,
}

impl DataArgs {
    pub(crate) fn load(&self) -> Result<Dataset, CliError> {
        check_file(&self.data).map_err(CliError::Path)?;
        Ok(Dataset::open(&self.data)?)
    }
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub(crate) data: DataArgs,

    /// Specify the path where the `dashboard` directory will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir))]
    pub(crate) output_path: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) filter: FilterArgs,
}

#[derive(Args)]
pub(crate) struct SummaryArgs {
    #[command(flatten)]
    pub(crate) data: DataArgs,

    #[command(flatten)]
    pub(crate) filter: FilterArgs,
}

#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) data: DataArgs,

    /// Specify the file the JSON is written to.
    /// If the output is not specified then the JSON is written to stdout.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(short, long)]
    pub(crate) pretty: bool,

    #[command(flatten)]
    pub(crate) filter: FilterArgs,
}

/// The filter flags. A range is written as `MIN:MAX`; omitted flags keep
/// the full extent of their column.
#[derive(Args, Default)]
pub(crate) struct FilterArgs {
    /// Crime rate range.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) crim: Option<Range>,

    /// Predicted price range, in thousands.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) price: Option<Range>,

    /// Average number of rooms range.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) rooms: Option<Range>,

    /// Lower status population range, in percent.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) lstat: Option<Range>,

    /// Property tax rate range.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) tax: Option<Range>,

    /// Nitric oxides concentration range.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) nox: Option<Range>,

    /// Pupil-teacher ratio range.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) ptratio: Option<Range>,

    /// Residential zoning range, in percent.
    #[arg(long, value_parser(parse_range), value_name = "MIN:MAX")]
    pub(crate) zn: Option<Range>,

    /// Charles River labels to keep, e.g. `1` or `0,1`.
    /// An empty value keeps every record.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub(crate) chas: Option<Vec<String>>,

    /// Radial highway labels to keep, e.g. `1,2,24`.
    /// An empty value keeps every record.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub(crate) rad: Option<Vec<String>>,
}

impl FilterArgs {
    fn range(&self, field: RangeField) -> Option<Range> {
        match field {
            RangeField::CrimeRate => self.crim,
            RangeField::PredictedPrice => self.price,
            RangeField::Rooms => self.rooms,
            RangeField::LowerStatus => self.lstat,
            RangeField::TaxRate => self.tax,
            RangeField::Nox => self.nox,
            RangeField::PupilTeacherRatio => self.ptratio,
            RangeField::Zoning => self.zn,
        }
    }

    /// Applies the flags on top of the initial state of the controls.
    pub(crate) fn to_filter(&self, controls: &Controls) -> FilterState {
        let mut filter = controls.initial_filter();

        for field in RangeField::ALL {
            if let Some(range) = self.range(field) {
                filter.set_range(field, range);
            }
        }

        if let Some(chas) = &self.chas {
            filter.set_chas(chas.iter().filter(|label| !label.is_empty()).cloned());
        }

        if let Some(rad) = &self.rad {
            filter.set_rad(rad.iter().filter(|label| !label.is_empty()).cloned());
        }

        filter
    }
}

fn parse_range(range: &str) -> Result<Range, String> {
    let (min, max) = range
        .split_once(':')
        .ok_or_else(|| format!("The `{range}` range must be written as `MIN:MAX`."))?;

    let parse = |bound: &str| {
        bound
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("The `{bound}` bound is not a number."))
    };
    let (min, max) = (parse(min)?, parse(max)?);

    if min.is_nan() || max.is_nan() {
        return Err(String::from("A range bound must not be NaN."));
    }

    if min > max {
        return Err(format!(
            "The lower bound `{min}` must not be greater than the upper bound `{max}`."
        ));
    }

    Ok(Range::new(min, max))
}

fn check_file(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!(
            "The `{}` path must point to a file.",
            path.display()
        ));
    }

    Ok(())
}

fn parse_dir(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
