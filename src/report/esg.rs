use serde_json::Value;

use crate::data::esg::EsgResponse;
use crate::report::table::TextTable;

pub const NO_ESG: &str = "No ESG data for this query";

pub fn render_esg(response: &EsgResponse) -> String {
    if response.data.is_empty() {
        return NO_ESG.to_string();
    }

    let mut table = TextTable::new(response.headers.iter().map(|h| h.label().to_owned()));
    for row in &response.data {
        table.push_row(row.iter().map(cell_text));
    }
    table.render()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.to_owned(),
        other => other.to_string(),
    }
}
