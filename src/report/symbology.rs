use crate::data::symbology::SymbologyResponse;
use crate::report::table::TextTable;

/// Converted identifiers for the first looked-up symbol, or the lookup error.
pub fn render_symbology(response: &SymbologyResponse) -> String {
    let Some(first) = response.data.first() else {
        return "Error: empty symbology response".to_string();
    };
    let input = first.input.first();
    let input_value = input.map(|i| i.value.as_str()).unwrap_or_default();

    if first.output.is_empty() || first.errors.is_some() {
        let reason = first
            .errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map(String::as_str)
            .unwrap_or("no identifiers found");
        return format!("Error: {} ({})", reason, input_value);
    }

    let mut table = TextTable::new(["identifierType", "value", "name", "status"]);
    for output in &first.output {
        table.push_row([
            output.identifier_type.as_str(),
            output.value.as_str(),
            output.name.as_str(),
            output.status.as_str(),
        ]);
    }

    format!(
        "Input Symbol = {} type = {}\nConverted Identifiers:\n{}",
        input_value,
        input.map(|i| i.identifier_type.as_str()).unwrap_or_default(),
        table.render()
    )
}
