use dragon_data::Controls;
use dragon_data::Summary;

use crate::cli::SummaryArgs;
use crate::error::CliError;

pub(crate) fn summary(args: SummaryArgs) -> Result<(), CliError> {
    let dataset = args.data.load()?;
    let filter = args.filter.to_filter(&Controls::from_dataset(&dataset));

    let cards = Summary::of(&dataset.view(&filter)).cards();

    let width = cards
        .entries()
        .iter()
        .map(|(title, _)| title.len())
        .max()
        .unwrap_or_default();

    for (title, value) in cards.entries() {
        println!("{title:<width$}  {value}");
    }

    Ok(())
}
