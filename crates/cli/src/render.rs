use dragon_vis::Dashboard;
use dragon_vis::Report;

use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::error::CliError;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    println!(
        "dragon reads predicted prices from: `{}` and generates the dashboard in: `{}`",
        args.data.data.display(),
        output_path.display()
    );

    let dashboard = Dashboard::new(args.data.load()?);
    let filter = args.filter.to_filter(dashboard.controls());

    let report = Report::init(&output_path)?;
    report.generate(&dashboard, &filter)?;

    println!("open `{}` to view it", report.index_file_path().display());

    Ok(())
}
