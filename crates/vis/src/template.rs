use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;

const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");
pub(crate) const STYLE: &str = include_str!("./template/dashboard.css");

pub(crate) struct TemplateEngine<'a> {
    index_file_path: &'a Path,
}

impl<'a> TemplateEngine<'a> {
    pub(crate) fn new(index_file_path: &'a Path) -> TemplateEngine<'a> {
        Self { index_file_path }
    }

    pub(crate) fn render(&self, context: &Context) -> Result<()> {
        let mut template = TinyTemplate::new();
        template.add_template("index", INDEX_TEMPLATE)?;

        let text = template.render("index", context)?;

        let mut file = File::create(self.index_file_path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct Context {
    pub(crate) style: &'static str,
    pub(crate) title: &'static str,
    pub(crate) tagline: &'static str,
    pub(crate) updated: String,
    pub(crate) generated: String,
    pub(crate) source: String,
    pub(crate) filters: Vec<FilterLine>,
    pub(crate) cards: Vec<Card>,
    pub(crate) model: &'static [&'static str],
    pub(crate) charts: Vec<ChartContext>,
    pub(crate) grid: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct FilterLine {
    pub(crate) label: &'static str,
    pub(crate) value: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct Card {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) value: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct ChartContext {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) figure: String,
}

/// Serializes `value` to JSON that can be embedded in a `<script>` element.
pub(crate) fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
