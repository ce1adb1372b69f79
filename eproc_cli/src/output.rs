use anyhow::Result;
use eproc_lib::types::{LawsuitEvent, LawsuitRecord, Party, PersonType};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct LawsuitRow {
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Filed")]
    #[serde(rename = "Filed")]
    filing_date: String,
    #[tabled(rename = "Class")]
    #[serde(rename = "Class")]
    action_class: String,
    #[tabled(rename = "Court")]
    #[serde(rename = "Court")]
    court: String,
    #[tabled(rename = "Judge")]
    #[serde(rename = "Judge")]
    judge: String,
    #[tabled(rename = "Situation")]
    #[serde(rename = "Situation")]
    situation: String,
    #[tabled(rename = "Authors")]
    #[serde(rename = "Authors")]
    authors: String,
    #[tabled(rename = "Defendants")]
    #[serde(rename = "Defendants")]
    defendants: String,
    #[tabled(rename = "Events")]
    #[serde(rename = "Events")]
    events: usize,
}

#[derive(Tabled, Serialize)]
struct EventRow {
    #[tabled(rename = "Lawsuit")]
    #[serde(rename = "Lawsuit")]
    lawsuit: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
pub struct ClassificationRow {
    #[tabled(rename = "Document")]
    #[serde(rename = "Document")]
    pub document: String,
    #[tabled(rename = "Digits")]
    #[serde(rename = "Digits")]
    pub digits: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    pub person_type: String,
    #[tabled(rename = "Abbrev")]
    #[serde(rename = "Abbrev")]
    pub abbreviation: char,
}

// -- Row builders --

fn build_lawsuit_rows(records: &[LawsuitRecord]) -> Vec<LawsuitRow> {
    records
        .iter()
        .map(|r| LawsuitRow {
            number: format_case_number(&r.number),
            filing_date: r.filing_date.format("%d/%m/%Y").to_string(),
            action_class: r.action_class.clone(),
            court: r.court.clone(),
            judge: r.judge.clone(),
            situation: r.situation.clone(),
            authors: format_parties(&r.authors),
            defendants: format_parties(&r.defendants),
            events: r.events.len(),
        })
        .collect()
}

fn build_event_rows(events: &[LawsuitEvent]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            lawsuit: format_case_number(&e.lawsuit_number),
            date: e.date.format("%d/%m/%Y %H:%M").to_string(),
            description: e.description.clone(),
        })
        .collect()
}

pub fn build_classification_row(document: &str, digits: &str, kind: PersonType) -> ClassificationRow {
    ClassificationRow {
        document: document.to_string(),
        digits: digits.to_string(),
        person_type: kind.describe().to_string(),
        abbreviation: kind.abbreviate(),
    }
}

// -- Generic printers --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_lawsuits(records: &[LawsuitRecord], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&records);
            Ok(())
        }
        _ => print_rows(build_lawsuit_rows(records), format),
    }
}

pub fn print_events(records: &[LawsuitRecord], format: &OutputFormat) -> Result<()> {
    let events: Vec<LawsuitEvent> = records.iter().flat_map(|r| r.events.clone()).collect();
    match format {
        OutputFormat::Json => {
            print_json(&events);
            Ok(())
        }
        _ => print_rows(build_event_rows(&events), format),
    }
}

pub fn print_classification(row: ClassificationRow, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&row);
            Ok(())
        }
        _ => print_rows(vec![row], format),
    }
}

/// One line per record, for output that must appear as records arrive.
pub fn format_lawsuit_line(record: &LawsuitRecord, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(record)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e)),
        _ => format!(
            "{}\t{}\t{}\t{}\t{} event(s)",
            format_case_number(&record.number),
            record.filing_date.format("%d/%m/%Y"),
            record.action_class,
            format_parties(&record.defendants),
            record.events.len()
        ),
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// CNJ layout `NNNNNNN-DD.AAAA.J.TR.OOOO` for 20-digit numbers.
fn format_case_number(number: &str) -> String {
    if number.len() != 20 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }
    format!(
        "{}-{}.{}.{}.{}.{}",
        &number[0..7],
        &number[7..9],
        &number[9..13],
        &number[13..14],
        &number[14..16],
        &number[16..20]
    )
}

fn format_parties(parties: &[Party]) -> String {
    parties
        .iter()
        .map(|p| match (&p.tax_id, p.person_type) {
            (Some(tax_id), Some(kind)) => format!("{} ({} {})", p.name, kind.abbreviate(), tax_id),
            _ => p.name.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
