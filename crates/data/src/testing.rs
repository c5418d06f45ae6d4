use crate::dataset::Dataset;

pub(crate) const HEADER: &str =
    "CRIM,ZN,INDUS,CHAS,NOX,RM,AGE,DIS,RAD,TAX,PTRATIO,B,LSTAT,MEDV,PredictedPrice";

pub(crate) const SAMPLE: &str = "\
CRIM,ZN,INDUS,CHAS,NOX,RM,AGE,DIS,RAD,TAX,PTRATIO,B,LSTAT,MEDV,PredictedPrice
0.00632,18.0,2.31,0,0.538,6.575,65.2,4.0900,1,296,15.3,396.90,4.98,24.0,25.1
0.02731,0.0,7.07,0,0.469,6.421,78.9,4.9671,2,242,17.8,396.90,9.14,21.6,22.3
0.02729,0.0,7.07,1,0.469,7.185,61.1,4.9671,2,242,17.8,392.83,4.03,34.7,33.9
0.03237,0.0,2.18,0,0.458,6.998,45.8,6.0622,3,222,18.7,394.63,2.94,33.4,32.0
0.06905,12.5,2.18,1,0.458,7.147,54.2,6.0622,5,311,15.2,396.90,5.33,36.2,35.4
8.98296,0.0,18.1,0,0.770,6.212,97.4,2.1222,24,666,20.2,377.73,17.60,17.8,16.9
";

pub(crate) fn dataset(csv: &str) -> Dataset {
    Dataset::from_reader(csv.as_bytes()).expect("valid test dataset")
}

pub(crate) fn sample() -> Dataset {
    dataset(SAMPLE)
}

/// Builds a dataset whose records differ only by their predicted price.
pub(crate) fn with_prices(prices: &[f64]) -> Dataset {
    let mut csv = String::from(HEADER);
    csv.push('\n');

    for price in prices {
        csv.push_str(&format!(
            "0.1,0.0,7.07,0,0.469,6.4,78.9,4.9671,2,242,17.8,396.90,9.14,21.6,{price}\n"
        ));
    }

    dataset(&csv)
}
