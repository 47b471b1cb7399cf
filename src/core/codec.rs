use std::io;

use crate::domain::model::{
    Location, LocationCategory, Vessel, MAX_NAME_LEN, MAX_TRAILER_TAG_LEN, SLIP_NUMBERS,
    STORAGE_SPOTS,
};
use crate::utils::error::{BoatyardError, Result};

/// Reader over the fleet data format: comma separated, no header row, no
/// quoting or escaping of any kind. Shared by [`parse`] and the persistence
/// adapter so the two cannot drift apart.
pub fn reader<R: io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input)
}

/// Parse one line of the data format into a [`Vessel`].
pub fn parse(line: &str) -> Result<Vessel> {
    let mut records = reader(line.as_bytes());
    let mut record = csv::StringRecord::new();
    // With quoting disabled a single line of valid UTF-8 cannot produce a
    // reader error, so anything but a record here means the line was blank.
    match records.read_record(&mut record) {
        Ok(true) => decode(&record),
        Ok(false) | Err(_) => Err(BoatyardError::MissingField("name")),
    }
}

/// Decode an already-split record. Field order is fixed: name, length,
/// category keyword, category value, outstanding fees. Fields past the
/// fifth are ignored.
pub fn decode(record: &csv::StringRecord) -> Result<Vessel> {
    let name = required(record, 0, "name")?;
    let name = truncate_chars(name, MAX_NAME_LEN);

    let length_ft = lenient_f64(field(record, 1, "length")?);

    let keyword = required(record, 2, "location category")?;
    let category = LocationCategory::from_keyword(keyword)
        .ok_or_else(|| BoatyardError::UnknownCategory(keyword.to_string()))?;

    let value = field(record, 3, "location detail")?;
    let location = match category {
        LocationCategory::Slip => {
            if value.is_empty() {
                return Err(BoatyardError::EmptyValue("slip number"));
            }
            let number = lenient_i32(value);
            if !SLIP_NUMBERS.contains(&number) {
                tracing::warn!(
                    "slip number {number} for '{name}' is outside the usual {}-{} range",
                    SLIP_NUMBERS.start(),
                    SLIP_NUMBERS.end()
                );
            }
            Location::Slip { number }
        }
        LocationCategory::Land => {
            let bay = value
                .chars()
                .next()
                .ok_or(BoatyardError::EmptyValue("bay label"))?;
            Location::Land { bay }
        }
        LocationCategory::Trailer => {
            if value.is_empty() {
                return Err(BoatyardError::EmptyValue("trailer tag"));
            }
            Location::Trailer {
                tag: truncate_chars(value, MAX_TRAILER_TAG_LEN),
            }
        }
        LocationCategory::Storage => {
            if value.is_empty() {
                return Err(BoatyardError::EmptyValue("storage spot"));
            }
            let spot = lenient_i32(value);
            if !STORAGE_SPOTS.contains(&spot) {
                tracing::warn!(
                    "storage spot {spot} for '{name}' is outside the usual {}-{} range",
                    STORAGE_SPOTS.start(),
                    STORAGE_SPOTS.end()
                );
            }
            Location::Storage { spot }
        }
    };

    let outstanding_fees = lenient_f64(field(record, 4, "outstanding fees")?);

    Ok(Vessel {
        name,
        length_ft,
        location,
        outstanding_fees,
    })
}

/// Canonical line form: length with no decimal places, fees with two, no
/// quoting. A name containing a comma corrupts its record; the format has
/// no escape mechanism and existing files depend on that layout.
pub fn serialize(vessel: &Vessel) -> String {
    let value = match &vessel.location {
        Location::Slip { number } => number.to_string(),
        Location::Land { bay } => bay.to_string(),
        Location::Trailer { tag } => tag.clone(),
        Location::Storage { spot } => spot.to_string(),
    };
    format!(
        "{},{:.0},{},{},{:.2}",
        vessel.name,
        vessel.length_ft,
        vessel.location.category(),
        value,
        vessel.outstanding_fees
    )
}

fn field<'a>(record: &'a csv::StringRecord, index: usize, name: &'static str) -> Result<&'a str> {
    record
        .get(index)
        .ok_or(BoatyardError::MissingField(name))
}

fn required<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &'static str,
) -> Result<&'a str> {
    let value = field(record, index, name)?;
    if value.is_empty() {
        return Err(BoatyardError::EmptyValue(name));
    }
    Ok(value)
}

// Numeric fields read leniently: values that do not parse become zero
// instead of rejecting the whole record.
fn lenient_f64(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn lenient_i32(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

fn truncate_chars(raw: &str, max: usize) -> String {
    raw.chars().take(max).collect()
}
