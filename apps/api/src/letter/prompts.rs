// All LLM prompt constants for letter enrichment.

use crate::models::expense::{ExpenseRecord, COMPANY_ADDRESS, COMPANY_NAME, DIRECTORS};

/// System prompt for letter enrichment — enforces JSON-only output with the
/// recognized keys and the line structure the zone splitter expects.
pub const LETTER_SYSTEM: &str =
    "You are a corporate correspondence writer producing formal expense record letters. \
    You MUST respond with valid JSON only, with exactly two string fields: \
    'topic' and 'content'. \
    'content' is the complete letter as newline-delimited lines: \
    5 recipient lines, then 5 sender lines, then a date and subject line \
    containing the word 'Subject', then the body paragraphs. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds the user prompt embedding the JSON-serialized expense record.
pub fn letter_prompt(record: &ExpenseRecord) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string(record)?;
    let [director_1, director_2] = &DIRECTORS;

    Ok(format!(
        "I want to write a formal letter for {COMPANY_NAME} about the given expense. \
        There are two directors: {} (NIC: {}) and {} (NIC: {}). \
        Director 1's address is {} \
        Director 2's address is {} \
        Company address is {COMPANY_ADDRESS} \
        Write me a JSON with a 'topic' and a 'content' for a formal expense \
        record letter using this data: {data}",
        director_1.name,
        director_1.nic,
        director_2.name,
        director_2.nic,
        director_1.address,
        director_2.address,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> ExpenseRecord {
        ExpenseRecord {
            expense_made_by: "Godakanda Arachchige Malith Dilshan".to_string(),
            amount: 1500.0,
            reason: "Client dinner".to_string(),
            additional_info: "Two guests".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_prompt_embeds_serialized_record() {
        let prompt = letter_prompt(&sample_record()).unwrap();
        assert!(prompt.contains("\"reason\":\"Client dinner\""));
        assert!(prompt.contains("\"amount\":1500"));
        assert!(prompt.contains("\"date\":\"2024-05-01\""));
    }

    #[test]
    fn test_prompt_names_both_directors_and_company() {
        let prompt = letter_prompt(&sample_record()).unwrap();
        assert!(prompt.contains(COMPANY_NAME));
        for director in &DIRECTORS {
            assert!(prompt.contains(director.name));
            assert!(prompt.contains(director.nic));
        }
    }

    #[test]
    fn test_system_prompt_demands_recognized_keys() {
        assert!(LETTER_SYSTEM.contains("'topic'"));
        assert!(LETTER_SYSTEM.contains("'content'"));
    }
}
