//! Lawsuit page parser.
//!
//! Turns a case page (`processo_selecionar`) and the optional hidden-parties
//! fragment into a [`LawsuitRecord`]. Header fields are read by element id,
//! the party row must hold exactly one author cell and one defendant cell, and
//! event columns are located by the labels of the events table header.

use std::sync::{Arc, LazyLock};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use eproc_api::types::{LawsuitEvent, LawsuitRecord, Party};
use scraper::{ElementRef, Html, Selector};

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::tax_id::TaxIdClassifier;

static HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#fldCapa").expect("valid selector"));
static PARTIES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#fldPartes").expect("valid selector"));
static HIDDEN_PARTIES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("fieldset#fldPartes").expect("valid selector"));
static PARTY_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.infraTrClara").expect("valid selector"));
static PARTY_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".infraNomeParte").expect("valid selector"));
static EVENT_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"[id^="trEvento"]"#).expect("valid selector"));
static WITH_ID: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id]").expect("valid selector"));
static TABLE_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid selector"));

const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("invalid {field}: \"{value}\"")]
    InvalidField { field: &'static str, value: String },

    #[error("unexpected layout: {0}")]
    Layout(String),
}

/// Converts lawsuit pages into records.
pub struct LawsuitParser {
    classifier: TaxIdClassifier,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for LawsuitParser {
    fn default() -> Self {
        Self::new(TaxIdClassifier::default())
    }
}

impl LawsuitParser {
    pub fn new(classifier: TaxIdClassifier) -> Self {
        Self {
            classifier,
            sink: Arc::new(TracingSink),
        }
    }

    /// Routes diagnostics (discarded hidden parties) to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Parses a case page. A hidden-parties fragment, when given, contributes
    /// one more defendant; if it cannot be parsed it is reported and ignored.
    pub fn parse(
        &self,
        page: &str,
        hidden_parties: Option<&str>,
    ) -> Result<LawsuitRecord, ParseError> {
        let document = Html::parse_document(page);

        let header = parse_header(&document)?;
        let (author, defendant) = self.parse_parties(&document)?;

        let mut defendants = vec![defendant];
        if let Some(fragment) = hidden_parties {
            match self.parse_hidden_defendant(fragment) {
                Ok(party) => defendants.push(party),
                Err(e) => self.sink.report(Diagnostic::HiddenPartiesDiscarded {
                    lawsuit: header.number.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        let events = parse_events(&document, &header.number)?;
        tracing::debug!(
            "Parsed lawsuit {} with {} defendant(s) and {} event(s)",
            header.number,
            defendants.len(),
            events.len()
        );

        Ok(LawsuitRecord {
            number: header.number,
            filing_date: header.filing_date,
            situation: header.situation,
            court: header.court,
            judge: header.judge,
            competence: header.competence,
            action_class: header.action_class,
            authors: vec![author],
            defendants,
            events,
        })
    }

    fn parse_parties(&self, document: &Html) -> Result<(Party, Party), ParseError> {
        let fieldset = document
            .select(&PARTIES)
            .next()
            .ok_or_else(|| ParseError::MissingElement("#fldPartes".into()))?;
        let row = fieldset
            .select(&PARTY_ROW)
            .next()
            .ok_or_else(|| ParseError::MissingElement("#fldPartes tr.infraTrClara".into()))?;

        let cells = cells(row);
        let [author, defendant] = cells.as_slice() else {
            return Err(ParseError::Layout(format!(
                "party row has {} cells, expected 2",
                cells.len()
            )));
        };
        Ok((self.parse_party(*author, 0)?, self.parse_party(*defendant, 0)?))
    }

    fn parse_hidden_defendant(&self, fragment: &str) -> Result<Party, ParseError> {
        let document = Html::parse_document(&format!("<html><body>{}</body></html>", fragment));
        let fieldset = document
            .select(&HIDDEN_PARTIES)
            .next()
            .ok_or_else(|| ParseError::MissingElement("fieldset#fldPartes".into()))?;
        self.parse_party(fieldset, 1)
    }

    /// Reads the party named inside `scope`. Its tax ID sits in
    /// `#spnCpfParteAutor{slot}` or `#spnCpfParteReu{slot}`.
    fn parse_party(&self, scope: ElementRef<'_>, slot: usize) -> Result<Party, ParseError> {
        let name = scope
            .select(&PARTY_NAME)
            .next()
            .map(text)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ParseError::MissingElement(".infraNomeParte".into()))?;

        let raw_tax_id = find_by_id(scope, &format!("spnCpfParteAutor{}", slot))
            .or_else(|| find_by_id(scope, &format!("spnCpfParteReu{}", slot)))
            .map(text);

        let identified = raw_tax_id
            .and_then(|raw| self.classifier.clean_mask_and_validate(&raw))
            .and_then(|digits| {
                let kind = self.classifier.classify(&digits).ok()?;
                Some((digits, kind))
            });

        Ok(match identified {
            Some((tax_id, kind)) => Party::identified(&name, &tax_id, kind),
            None => Party::unidentified(&name),
        })
    }
}

struct Header {
    number: String,
    filing_date: NaiveDate,
    situation: String,
    court: String,
    judge: String,
    competence: String,
    action_class: String,
}

fn parse_header(document: &Html) -> Result<Header, ParseError> {
    let header = document
        .select(&HEADER)
        .next()
        .ok_or_else(|| ParseError::MissingElement("#fldCapa".into()))?;

    let raw_number = find_by_id(header, "txtNumProcesso")
        .map(text)
        .ok_or_else(|| ParseError::MissingElement("#txtNumProcesso".into()))?;
    let number: String = raw_number.chars().filter(|c| !matches!(c, '.' | '-')).collect();
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidField {
            field: "case number",
            value: raw_number,
        });
    }

    let filing = find_by_id(header, "txtAutuacao")
        .map(text)
        .ok_or_else(|| ParseError::MissingElement("#txtAutuacao".into()))?;
    let filing_date = parse_date(filing.split_whitespace().next().unwrap_or_default())?;

    let optional = |id: &str| find_by_id(header, id).map(text).unwrap_or_default();

    Ok(Header {
        number,
        filing_date,
        situation: optional("txtSituacao"),
        court: optional("txtOrgaoJulgador"),
        judge: optional("txtMagistrado"),
        competence: optional("txtCompetencia"),
        action_class: optional("txtClasse"),
    })
}

/// Positions of the cells read from each event row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EventColumns {
    width: usize,
    date: usize,
    description: usize,
}

impl EventColumns {
    /// Index, date/time, description, user, documents.
    const CANONICAL: EventColumns = EventColumns {
        width: 5,
        date: 1,
        description: 2,
    };

    /// Resolves columns from the header row of the table holding `row`, or the
    /// canonical layout when that table has no header.
    fn resolve(row: ElementRef<'_>) -> Result<Self, ParseError> {
        let Some(table) = row
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "table")
        else {
            return Ok(Self::CANONICAL);
        };

        let labels: Vec<String> = table
            .select(&TABLE_ROW)
            .map(|tr| {
                tr.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|c| c.value().name() == "th")
                    .map(|th| text(th).to_lowercase())
                    .collect::<Vec<_>>()
            })
            .find(|labels| !labels.is_empty())
            .unwrap_or_default();
        if labels.is_empty() {
            return Ok(Self::CANONICAL);
        }

        let date = labels
            .iter()
            .position(|l| l.starts_with("data"))
            .ok_or_else(|| ParseError::Layout("events table has no Data/Hora column".into()))?;
        let description = labels
            .iter()
            .position(|l| l.starts_with("descri"))
            .ok_or_else(|| ParseError::Layout("events table has no Descrição column".into()))?;

        Ok(Self {
            width: labels.len(),
            date,
            description,
        })
    }

    fn parse_row(&self, row: ElementRef<'_>, lawsuit: &str) -> Result<LawsuitEvent, ParseError> {
        let cells = cells(row);
        if cells.len() != self.width {
            return Err(ParseError::Layout(format!(
                "event row {} has {} cells, expected {}",
                row.value().id().unwrap_or_default(),
                cells.len(),
                self.width
            )));
        }

        Ok(LawsuitEvent {
            date: parse_timestamp(&text(cells[self.date]))?,
            description: text(cells[self.description]),
            lawsuit_number: lawsuit.to_string(),
            documents: Vec::new(),
        })
    }
}

fn parse_events(document: &Html, lawsuit: &str) -> Result<Vec<LawsuitEvent>, ParseError> {
    let rows: Vec<ElementRef<'_>> = document.select(&EVENT_ROW).collect();
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let columns = EventColumns::resolve(*first)?;
    rows.iter()
        .map(|row| columns.parse_row(*row, lawsuit))
        .collect()
}

fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ParseError::InvalidField {
        field: "date",
        value: raw.to_string(),
    })
}

/// `dd/mm/yyyy hh:mm[:ss]`, truncated to the minute.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ParseError> {
    let invalid = || ParseError::InvalidField {
        field: "event timestamp",
        value: raw.to_string(),
    };
    let mut tokens = raw.split_whitespace();
    let (Some(date), Some(time)) = (tokens.next(), tokens.next()) else {
        return Err(invalid());
    };

    let date = parse_date(date)?;
    let mut parts = time.split(':');
    let hour = parts.next().and_then(|h| h.parse::<u32>().ok());
    let minute = parts.next().and_then(|m| m.parse::<u32>().ok());
    let (Some(hour), Some(minute)) = (hour, minute) else {
        return Err(invalid());
    };
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;
    Ok(date.and_time(time))
}

fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .collect()
}

fn find_by_id<'a>(scope: ElementRef<'a>, id: &str) -> Option<ElementRef<'a>> {
    scope.select(&WITH_ID).find(|e| e.value().id() == Some(id))
}

/// Element text with whitespace runs collapsed.
fn text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
