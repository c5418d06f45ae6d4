use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;

use dragon_vis::Dashboard;
use log::info;
use serde::Serialize;

use crate::cli::DataArgs;
use crate::cli::ExportArgs;
use crate::error::CliError;

pub(crate) fn export(args: ExportArgs) -> Result<(), CliError> {
    let dashboard = Dashboard::new(args.data.load()?);
    let filter = args.filter.to_filter(dashboard.controls());
    let model = dashboard.render(&filter);

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_json(BufWriter::new(file), &model, args.pretty)?;
            info!("exported the view model to `{}`", path.display());
        }
        None => write_json(io::stdout().lock(), &model, args.pretty)?,
    }

    Ok(())
}

pub(crate) fn controls(args: DataArgs) -> Result<(), CliError> {
    let dashboard = Dashboard::new(args.load()?);
    write_json(io::stdout().lock(), dashboard.controls(), true)
}

fn write_json<W, T>(mut writer: W, value: &T, pretty: bool) -> Result<(), CliError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }

    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;
    use tempfile::tempdir;

    use super::*;
    use crate::cli::FilterArgs;

    fn dataset() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "CRIM,ZN,INDUS,CHAS,NOX,RM,AGE,DIS,RAD,TAX,PTRATIO,LSTAT,PredictedPrice\n\
             0.00632,18.0,2.31,0,0.538,6.575,65.2,4.0900,1,296,15.3,4.98,25.1\n\
             0.02729,0.0,7.07,1,0.469,7.185,61.1,4.9671,2,242,17.8,4.03,33.9"
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn export_writes_the_view_model() {
        let data = dataset();
        let dir = tempdir().unwrap();
        let output = dir.path().join("view.json");
        let args = ExportArgs {
            data: DataArgs {
                data: data.path().to_path_buf(),
            },
            output: Some(output.clone()),
            pretty: false,
            filter: FilterArgs {
                chas: Some(vec![String::from("1")]),
                ..Default::default()
            },
        };

        export(args).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["summary"]["total-properties"], 1);
        assert_eq!(json["summary"]["avg-price"], "$33.90K");
        assert_eq!(json["grid"]["rowData"][0]["CHAS"], "1");
        assert_eq!(json["charts"][2]["figure"], serde_json::json!({}));
    }
}
