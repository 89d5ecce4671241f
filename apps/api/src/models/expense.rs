use chrono::NaiveDate;
use serde::Serialize;

/// An expending person — static, read-only reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: &'static str,
    pub address: &'static str,
    /// National identity card number.
    pub nic: &'static str,
}

/// The two company directors authorised to record expenses.
/// Process-wide constant state; never mutated.
pub static DIRECTORS: [Identity; 2] = [
    Identity {
        name: "Godakanda Arachchige Malith Dilshan",
        address: "No 49/1, Hunnangewatta, Heanpanwila, Waduweliwitiya North Kahaduwa.",
        nic: "199902700422",
    },
    Identity {
        name: "Induruwa Udumullage Nipuna Nadeeshan",
        address: "No 226, Silwadail State, Dodangoda Kalutara.",
        nic: "200010892555",
    },
];

pub const COMPANY_NAME: &str = "SKYREK Pvt Ltd";
pub const COMPANY_ADDRESS: &str = "No 226, Silwadail State, Dodangoda Kalutara.";

/// Looks up a director by NIC or exact full name.
pub fn find_identity(key: &str) -> Option<&'static Identity> {
    DIRECTORS.iter().find(|d| d.nic == key || d.name == key)
}

/// A single expense as captured from the request form.
/// Immutable once constructed; serialized into the enrichment prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub expense_made_by: String,
    pub amount: f64,
    pub reason: String,
    pub additional_info: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_identity_by_nic() {
        let identity = find_identity("199902700422").expect("NIC should resolve");
        assert_eq!(identity.name, "Godakanda Arachchige Malith Dilshan");
    }

    #[test]
    fn test_find_identity_by_name() {
        let identity =
            find_identity("Induruwa Udumullage Nipuna Nadeeshan").expect("name should resolve");
        assert_eq!(identity.nic, "200010892555");
    }

    #[test]
    fn test_find_identity_unknown_returns_none() {
        assert!(find_identity("nobody").is_none());
        assert!(find_identity("").is_none());
    }

    #[test]
    fn test_expense_record_serializes_with_camel_case_keys() {
        let record = ExpenseRecord {
            expense_made_by: "Someone".to_string(),
            amount: 1500.0,
            reason: "Client dinner".to_string(),
            additional_info: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"expenseMadeBy\":\"Someone\""));
        assert!(json.contains("\"additionalInfo\""));
        assert!(json.contains("\"date\":\"2024-05-01\""));
    }
}
