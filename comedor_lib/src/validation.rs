use chrono::NaiveDate;
use comedor_api::types::{NewBeca, NewPago};
use comedor_api::DateRange;

use crate::error::ComedorError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_LIMIT: i64 = 100;

/// Trims free text typed at the counter and drops control characters other
/// than spaces. `max_chars` counts characters, so accented names are not
/// penalised.
pub fn sanitize_text(input: &str, max_chars: usize) -> Result<String, ComedorError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c == ' ' || !c.is_control())
        .collect();
    let count = cleaned.chars().count();
    if count == 0 {
        return Err(ComedorError::InvalidInput(
            "text is blank once control characters are removed".to_string(),
        ));
    }
    if count > max_chars {
        return Err(ComedorError::InvalidInput(format!(
            "text is {} characters long, at most {} allowed",
            count, max_chars
        )));
    }
    Ok(cleaned)
}

/// Validate a free-text search filter.
pub fn validate_search(input: &str) -> Result<String, ComedorError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<u32, ComedorError> {
    if page < 1 {
        return Err(ComedorError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    u32::try_from(page)
        .map_err(|_| ComedorError::InvalidInput(format!("page {} is out of range", page)))
}

/// Validate page size (must be 1..=100).
pub fn validate_limit(limit: i64) -> Result<u32, ComedorError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ComedorError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit as u32)
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, ComedorError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        ComedorError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2025-05-01)",
            trimmed
        ))
    })
}

/// Validate a BI date range: both dates well-formed and `desde <= hasta`.
pub fn validate_date_range(desde: &str, hasta: &str) -> Result<DateRange, ComedorError> {
    let from = validate_date(desde)?;
    let to = validate_date(hasta)?;
    if from > to {
        return Err(ComedorError::InvalidInput(format!(
            "start date {} is after end date {}",
            from, to
        )));
    }
    Ok(DateRange::new(from, to))
}

/// Checks a scholarship payload before `becas().create(..)`.
pub fn validate_new_beca(beca: &NewBeca) -> Result<(), ComedorError> {
    if beca.persona_id.is_blank() {
        return Err(ComedorError::InvalidInput(
            "scholarship requires a persona id".to_string(),
        ));
    }
    if beca.tipo.trim().is_empty() {
        return Err(ComedorError::InvalidInput(
            "scholarship type is required".to_string(),
        ));
    }
    if beca.estado.trim().is_empty() {
        return Err(ComedorError::InvalidInput(
            "scholarship status is required".to_string(),
        ));
    }
    if beca.cuota_diaria <= 0 {
        return Err(ComedorError::InvalidInput(format!(
            "daily quota must be positive, got {}",
            beca.cuota_diaria
        )));
    }
    let desde = validate_date(&beca.vigente_desde)?;
    if let Some(hasta) = &beca.vigente_hasta {
        let hasta = validate_date(hasta)?;
        if hasta < desde {
            return Err(ComedorError::InvalidInput(format!(
                "scholarship ends ({}) before it starts ({})",
                hasta, desde
            )));
        }
    }
    Ok(())
}

/// Checks a payment payload before `pagos().create(..)`.
pub fn validate_new_pago(pago: &NewPago) -> Result<(), ComedorError> {
    if pago.persona_id.is_blank() {
        return Err(ComedorError::InvalidInput(
            "payment requires a persona id".to_string(),
        ));
    }
    if !pago.monto.is_finite() || pago.monto <= 0.0 {
        return Err(ComedorError::InvalidInput(format!(
            "payment amount must be positive, got {}",
            pago.monto
        )));
    }
    Ok(())
}
