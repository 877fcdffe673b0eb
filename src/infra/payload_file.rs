//! Saved recommendation payloads on disk (JSON, same shape the dashboard receives).

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::domain::{DashboardPayload, TransactionRecord};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("payload contains no recommendations")]
    Empty,
}

pub fn load_payload_file(path: &Path) -> Result<DashboardPayload, PayloadError> {
    let content = fs::read_to_string(path).map_err(|source| PayloadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let payload = parse_payload(&content)?;
    tracing::info!(path = %path.display(), "loaded saved recommendation payload");
    Ok(payload)
}

pub fn parse_payload(content: &str) -> Result<DashboardPayload, PayloadError> {
    let payload: DashboardPayload = serde_json::from_str(content)?;
    if payload.recommendations.recommendations.is_empty() {
        return Err(PayloadError::Empty);
    }
    Ok(payload)
}

/// Raw transaction rows to forward with a recommendation request.
pub fn load_transactions_file(path: &Path) -> Result<Vec<TransactionRecord>, PayloadError> {
    let content = fs::read_to_string(path).map_err(|source| PayloadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let rows: Vec<TransactionRecord> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded transaction rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"{
        "recommendations": {
            "global_reasoning": "Travel heavy spend.",
            "recommendations": [{
                "rec_reasoning": "5x travel",
                "card_name": "Sapphire",
                "card_info": {
                    "cardName": "Chase Sapphire Preferred Card",
                    "cardType": "Travel",
                    "issuer": "Chase",
                    "annualFee": 95,
                    "APR": "21.49%-28.49%",
                    "rewards": {
                        "pointsPerDollar": { "travel": 5, "dining": 3, "other": 1 },
                        "signUpBonus": { "points": 60000, "minimumSpend": 4000, "timeFrameMonths": 3 }
                    },
                    "benefits": ["Trip cancellation insurance"],
                    "creditCardScoreMin": 700,
                    "creditCardScoreMax": 850,
                    "linkToApply": "https://example.com/sapphire",
                    "countryOfOrigin": "USA",
                    "difficulty_rating": 3
                }
            }]
        },
        "userInfo": {
            "username": "jo",
            "income": 90000,
            "age": 40,
            "oldestAccountLengthYears": 12,
            "creditScore": 801,
            "annualFeeWillingness": 150
        },
        "transactionData": []
    }"#;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("card-advise-payload-{}", uuid::Uuid::new_v4().simple()))
            .join("payload.json")
    }

    #[test]
    fn parses_sample_payload() {
        let payload = parse_payload(SAMPLE).expect("sample should parse");
        assert_eq!(payload.user_info.credit_score, 801);
        assert_eq!(
            payload.recommendations.recommendations[0].card_info.issuer,
            "Chase"
        );
    }

    #[test]
    fn missing_transaction_data_defaults_to_empty() {
        let trimmed = SAMPLE.replace(",\n        \"transactionData\": []", "");
        assert!(!trimmed.contains("transactionData"));
        let payload = parse_payload(&trimmed).expect("payload without transactions");
        assert!(payload.transaction_data.is_empty());
    }

    #[test]
    fn empty_recommendation_list_is_rejected() {
        let raw = r#"{
            "recommendations": { "global_reasoning": "", "recommendations": [] },
            "userInfo": { "username": "x", "income": 1, "age": 20, "oldestAccountLengthYears": 0,
                          "creditScore": 500, "annualFeeWillingness": 0 }
        }"#;
        assert!(matches!(parse_payload(raw), Err(PayloadError::Empty)));
    }

    #[test]
    fn written_payload_loads_back() {
        let path = temp_path();
        let payload = parse_payload(SAMPLE).expect("sample");
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, serde_json::to_string_pretty(&payload).expect("encode")).expect("write");

        let loaded = load_payload_file(&path).expect("load");
        assert_eq!(loaded.user_info, payload.user_info);
        assert_eq!(
            loaded.recommendations.recommendations[0].card_info,
            payload.recommendations.recommendations[0].card_info
        );
    }

    #[test]
    fn transaction_rows_keep_text_and_numbers() {
        let path = temp_path();
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(
            &path,
            r#"[{ "merchant": "Grocer", "amount": 54.2 }, { "merchant": "Airline", "amount": 410 }]"#,
        )
        .expect("write");

        let rows = load_transactions_file(&path).expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].get("merchant"),
            Some(&crate::domain::TransactionValue::Text("Grocer".to_string()))
        );
        assert_eq!(
            rows[1].get("amount"),
            Some(&crate::domain::TransactionValue::Number(410.0))
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let path = temp_path();
        let err = load_payload_file(&path).expect_err("should fail");
        assert!(err.to_string().contains("payload.json"));
    }
}
