// File: crates/weightplot-cli/src/ingest.rs
// Summary: XML ingestion: walks weight-log elements and populates the
// store, best-effort, flagging malformed records instead of halting.

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use weightplot_core::store::normalize_date;
use weightplot_core::{Entry, WeightLog};

/// Parse a whole weight-log document into a store.
///
/// Recognized elements: the `weight-log` container, `log` records with
/// `date` and `weight` attributes, and `beginning-averages` carrying the
/// seed `moving-average`. Unknown elements and records with missing or
/// unreadable fields set the store's error flag and parsing continues;
/// XML syntax errors abort.
pub fn parse_document(text: &str) -> Result<WeightLog> {
    let mut reader = Reader::from_str(text);
    let mut log = WeightLog::new(0.0);
    loop {
        match reader.read_event().context("malformed XML")? {
            Event::Start(element) | Event::Empty(element) => {
                handle_element(&mut log, &element)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(log)
}

fn handle_element(log: &mut WeightLog, element: &BytesStart) -> Result<()> {
    match element.name().as_ref() {
        // Outer container carries no data of its own.
        b"weight-log" => Ok(()),
        b"log" => handle_log(log, element),
        b"beginning-averages" => handle_beginning_averages(log, element),
        _ => {
            log.set_error();
            Ok(())
        }
    }
}

/// One dated entry. Missing or non-numeric fields and duplicate dates are
/// malformed records: flag and move on.
fn handle_log(log: &mut WeightLog, element: &BytesStart) -> Result<()> {
    let date = attribute(element, "date")?;
    let weight = attribute(element, "weight")?;

    let (Some(date), Some(weight)) = (date, weight) else {
        log.set_error();
        return Ok(());
    };
    let Ok(weight) = weight.trim().parse::<f64>() else {
        log.set_error();
        return Ok(());
    };

    if log.insert(Entry::new(normalize_date(&date), weight)).is_err() {
        log.set_error();
    }
    Ok(())
}

/// The seed average. An absent attribute leaves the default seed in place.
fn handle_beginning_averages(log: &mut WeightLog, element: &BytesStart) -> Result<()> {
    let Some(average) = attribute(element, "moving-average")? else {
        return Ok(());
    };
    match average.trim().parse::<f64>() {
        Ok(average) => log.set_seed_average(average),
        Err(_) => log.set_error(),
    }
    Ok(())
}

/// Return the named attribute's unescaped value, or `None` when absent.
fn attribute(element: &BytesStart, name: &str) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.context("malformed attribute")?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr.unescape_value().context("unreadable attribute value")?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
