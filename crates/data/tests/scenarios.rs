use std::io::Write;

use dragon_data::CorrelationMatrix;
use dragon_data::Dataset;
use dragon_data::FilterState;
use dragon_data::Range;
use dragon_data::RangeField;
use dragon_data::Summary;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const HEADER: &str = "CRIM,ZN,INDUS,CHAS,NOX,RM,AGE,DIS,RAD,TAX,PTRATIO,B,LSTAT,MEDV,PredictedPrice";

fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn price_range_over_three_records() {
    let file = write_csv(&[
        "0.1,0,7,0,0.4,6.1,70,4,1,242,17,396,9,21,10.0",
        "0.1,0,7,1,0.4,6.2,70,4,2,242,17,396,9,21,20.0",
        "0.1,0,7,0,0.4,6.3,70,4,3,242,17,396,9,21,30.0",
    ]);
    let dataset = Dataset::open(file.path()).unwrap();
    let filter =
        FilterState::unbounded().with_range(RangeField::PredictedPrice, Range::new(15.0, 25.0));

    let view = dataset.view(&filter);
    let cards = Summary::of(&view).cards();

    assert_eq!(view.len(), 1);
    assert_eq!(view.records()[0].predicted_price, 20.0);
    assert_eq!(cards.total_properties, 1);
    assert_eq!(
        (cards.avg_price, cards.min_price, cards.max_price),
        (
            String::from("$20.00K"),
            String::from("$20.00K"),
            String::from("$20.00K")
        )
    );
}

#[test]
fn cleared_label_sets_only_apply_ranges() {
    let file = write_csv(&[
        "0.1,0,7,0,0.4,6.1,70,4,1,242,17,396,9,21,10.0",
        "0.2,0,7,1,0.4,6.2,70,4,2,242,17,396,9,21,20.0",
        "0.3,0,7,0,0.4,6.3,70,4,24,242,17,396,9,21,30.0",
    ]);
    let dataset = Dataset::open(file.path()).unwrap();
    let ranges = FilterState::unbounded().with_range(RangeField::CrimeRate, Range::new(0.15, 1.0));

    let cleared = ranges
        .clone()
        .with_chas(Vec::<String>::new())
        .with_rad(Vec::<String>::new());
    let all = ranges.with_chas(["0", "1"]).with_rad(["1", "2", "24"]);

    assert_eq!(dataset.view(&cleared), dataset.view(&all));
    assert_eq!(dataset.view(&cleared).len(), 2);
}

#[test]
fn empty_dataset_yields_placeholders() {
    let file = write_csv(&[]);
    let dataset = Dataset::open(file.path()).unwrap();
    let filter = FilterState::unbounded()
        .with_range(RangeField::Rooms, Range::new(5.0, 8.0))
        .with_chas(["1"]);

    let view = dataset.view(&filter);
    let cards = Summary::of(&view).cards();

    assert!(view.is_empty());
    assert_eq!(cards.total_properties, 0);
    assert_eq!(cards.avg_price, "$0.00K");
    assert_eq!(cards.avg_rooms, "0.00");
    assert_eq!(cards.avg_nox, "0.000");
    assert_eq!(CorrelationMatrix::of(&view), None);
}
