use crate::domain::model::Lead;
use crate::utils::error::{LeadError, Result};
use std::io::Read;

/// Header row of every export, in column order.
pub const EXPORT_COLUMNS: [&str; 9] = [
    "score",
    "name",
    "phone",
    "email",
    "address",
    "distance_miles",
    "reason",
    "source",
    "posted_date",
];

/// Serializes leads as UTF-8 CSV with a header row. Fields containing the
/// delimiter, quotes or line breaks are quoted.
pub fn encode_leads(leads: &[Lead]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // Written explicitly so an empty batch still carries the header.
    writer.write_record(EXPORT_COLUMNS)?;
    for lead in leads {
        writer.serialize(lead)?;
    }

    writer
        .into_inner()
        .map_err(|e| LeadError::IoError(e.into_error()))
}

pub fn decode_leads<R: Read>(reader: R) -> Result<Vec<Lead>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut leads = Vec::new();
    for row in reader.deserialize() {
        let lead: Lead = row?;
        leads.push(lead);
    }
    Ok(leads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::sample_leads;
    use crate::domain::model::LeadCategory;

    #[test]
    fn test_header_and_row_count() {
        let bytes = encode_leads(&sample_leads()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "score,name,phone,email,address,distance_miles,reason,source,posted_date"
        );
        assert_eq!(
            lines[3],
            "WARM,Mike Davis,(903) 555-0303,,\"789 Elm St, Beaumont, TX 77701\",92,\"Posted \"\"fence repair needed\"\" 10 days ago\",Craigslist,2026-02-07"
        );
    }

    #[test]
    fn test_empty_batch_is_header_only() {
        let text = String::from_utf8(encode_leads(&[]).unwrap()).unwrap();
        assert_eq!(
            text,
            "score,name,phone,email,address,distance_miles,reason,source,posted_date\n"
        );
    }

    #[test]
    fn test_decode_restores_samples() {
        let leads = sample_leads();
        let bytes = encode_leads(&leads).unwrap();
        assert_eq!(decode_leads(bytes.as_slice()).unwrap(), leads);
    }

    #[test]
    fn test_special_characters_survive() {
        let mut lead = sample_leads().remove(0);
        lead.name = "Smith, \"Johnny\"".to_string();
        lead.reason = "Line one\nLine two".to_string();

        let bytes = encode_leads(std::slice::from_ref(&lead)).unwrap();
        let decoded = decode_leads(bytes.as_slice()).unwrap();
        assert_eq!(decoded, vec![lead]);
    }

    #[test]
    fn test_decode_rejects_unknown_category() {
        let csv = "score,name,phone,email,address,distance_miles,reason,source,posted_date\n\
                   TEPID,A,1,,addr,5,r,s,d\n";
        let err = decode_leads(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LeadError::CsvError(_)));
    }

    #[test]
    fn test_decode_parses_category() {
        let csv = "score,name,phone,email,address,distance_miles,reason,source,posted_date\n\
                   COLD,A,1,,addr,5,r,s,d\n";
        let leads = decode_leads(csv.as_bytes()).unwrap();
        assert_eq!(leads[0].category, LeadCategory::Cold);
        assert_eq!(leads[0].distance_miles, 5);
        assert_eq!(leads[0].email, "");
    }
}
