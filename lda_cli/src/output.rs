use lda_api::types::Filing;
use serde_json::Value;
use tabled::{Table, Tabled};

/// At most this many filings are shown in the preview table; exports always
/// contain the full result set.
const PREVIEW_LIMIT: usize = 20;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct FilingRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Registrant")]
    registrant: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
}

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Legacy ID")]
    legacy_id: String,
}

#[derive(Tabled)]
struct LobbyistRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Registrant")]
    registrant: String,
}

// -- Row builders --

fn build_filing_rows(filings: &[Filing]) -> Vec<FilingRow> {
    filings
        .iter()
        .map(|f| FilingRow {
            uuid: text(&f["filing_uuid"]),
            year: text(&f["filing_year"]),
            period: pick(f, "filing_period_display", "filing_period"),
            registrant: text(&f["registrant"]["name"]),
            client: text(&f["client"]["name"]),
            income: text(&f["income"]),
            expenses: text(&f["expenses"]),
        })
        .collect()
}

fn build_client_rows(clients: &[Filing]) -> Vec<ClientRow> {
    clients
        .iter()
        .map(|c| ClientRow {
            id: text(&c["id"]),
            name: pick(c, "name", "client_name"),
            legacy_id: text(&c["client_id"]),
        })
        .collect()
}

fn build_lobbyist_rows(lobbyists: &[Filing]) -> Vec<LobbyistRow> {
    lobbyists
        .iter()
        .map(|l| LobbyistRow {
            id: text(&l["id"]),
            name: person_name(&l["lobbyist"]),
            registrant: text(&l["registrant"]["name"]),
        })
        .collect()
}

// -- Table output --

pub fn print_filings_preview(filings: &[Filing]) {
    let preview = preview_slice(filings);
    println!("{}", Table::new(build_filing_rows(preview)));
    if filings.len() > preview.len() {
        println!(
            "...and {} more filings (use --output-json/--output-csv to save everything).",
            filings.len() - preview.len()
        );
    }
}

pub fn print_clients_table(clients: &[Filing]) {
    println!("{}", Table::new(build_client_rows(clients)));
}

pub fn print_lobbyists_table(lobbyists: &[Filing]) {
    println!("{}", Table::new(build_lobbyist_rows(lobbyists)));
}

// -- JSON output --

pub fn print_json(data: &[Filing]) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn preview_slice(filings: &[Filing]) -> &[Filing] {
    &filings[..filings.len().min(PREVIEW_LIMIT)]
}

/// Renders a leaf value for display: null becomes blank, strings pass through
/// unquoted.
fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Takes `primary` when present and non-null, otherwise `fallback`. The API
/// pairs raw enum fields with `_display` variants that are nicer to read.
fn pick(record: &Value, primary: &str, fallback: &str) -> String {
    match &record[primary] {
        Value::Null => text(&record[fallback]),
        v => text(v),
    }
}

/// Joins the name parts of a lobbyist record, skipping blanks.
fn person_name(data: &Value) -> String {
    let parts = [
        pick(data, "prefix_display", "prefix"),
        text(&data["first_name"]),
        text(&data["middle_name"]),
        text(&data["last_name"]),
        pick(data, "suffix_display", "suffix"),
    ];
    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn load_results(json_str: &str) -> Vec<Filing> {
        let page: Value = serde_json::from_str(json_str).unwrap();
        page["results"].as_array().unwrap().clone()
    }

    fn load_filings_fixture() -> Vec<Filing> {
        load_results(include_str!("../../lda_api/tests/fixtures/filings.json"))
    }

    // -- Row builder tests --

    #[test]
    fn test_build_filing_rows_mapping() {
        let rows = build_filing_rows(&load_filings_fixture());
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.uuid, "016b8f40-5a1c-4a47-9a1e-1df0a3a7d9b1");
        assert_eq!(row.year, "2023");
        assert_eq!(row.period, "1st Quarter (Jan 1 - Mar 31)");
        assert_eq!(row.registrant, "Lobby Partners LLC");
        assert_eq!(row.client, "Acme Corp");
        assert_eq!(row.income, "80000.00");
        assert_eq!(row.expenses, "");
    }

    #[test]
    fn test_build_filing_rows_blank_income() {
        let rows = build_filing_rows(&load_filings_fixture());
        let row = &rows[1];
        assert_eq!(row.income, "");
        assert_eq!(row.expenses, "120000.00");
    }

    #[test]
    fn test_build_filing_rows_empty() {
        assert!(build_filing_rows(&[]).is_empty());
    }

    #[test]
    fn test_build_filing_rows_period_fallback() {
        let rows = build_filing_rows(&[json!({"filing_period": "mid_year"})]);
        assert_eq!(rows[0].period, "mid_year");
    }

    #[test]
    fn test_build_client_rows_mapping() {
        let rows = build_client_rows(&load_results(include_str!(
            "../../lda_api/tests/fixtures/clients.json"
        )));
        let row = &rows[0];
        assert_eq!(row.id, "223344");
        assert_eq!(row.name, "Acme Corp");
        assert_eq!(row.legacy_id, "55");
    }

    #[test]
    fn test_build_lobbyist_rows_mapping() {
        let rows = build_lobbyist_rows(&load_results(include_str!(
            "../../lda_api/tests/fixtures/lobbyists.json"
        )));
        let row = &rows[0];
        assert_eq!(row.id, "987");
        assert_eq!(row.name, "JANE DOE");
        assert_eq!(row.registrant, "Lobby Partners LLC");
    }

    // -- Preview bound --

    #[test]
    fn test_preview_is_bounded_to_twenty() {
        let filings: Vec<Filing> = (0..35).map(|i| json!({"filing_uuid": i})).collect();
        assert_eq!(preview_slice(&filings).len(), 20);
        assert_eq!(preview_slice(&filings[..5]).len(), 5);
    }

    // -- Helpers --

    #[test]
    fn test_person_name_skips_blank_parts() {
        let name = person_name(&json!({
            "prefix": null,
            "first_name": "JANE",
            "middle_name": null,
            "last_name": "DOE",
            "suffix": null
        }));
        assert_eq!(name, "JANE DOE");
    }

    #[test]
    fn test_person_name_prefers_display_variants() {
        let name = person_name(&json!({
            "prefix": "mr",
            "prefix_display": "Mr.",
            "first_name": "John",
            "last_name": "Smith"
        }));
        assert_eq!(name, "Mr. John Smith");
    }

    #[test]
    fn test_text_renders_numbers_and_blanks() {
        assert_eq!(text(&json!(2023)), "2023");
        assert_eq!(text(&json!("x")), "x");
        assert_eq!(text(&Value::Null), "");
    }
}
