//! Bill Entity
//!
//! An expense-reimbursement record with metadata and an optional file
//! attachment, plus the read-only projection used by the bill tables.

use serde::{Deserialize, Serialize};

use crate::format::format_date;

/// Default tax percentage applied when the form field is empty or unparsable
pub const DEFAULT_PCT: i64 = 20;

/// Review status of a submitted bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            _ => BillStatus::Pending,
        }
    }

    /// Human-readable label shown in the bill tables
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

/// An expense bill as exchanged with the remote data service
///
/// The attachment fields stay `None` until the upload step assigns them,
/// together with the remote key carried in `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    #[serde(default)]
    pub amount: i64,
    pub date: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default = "default_pct")]
    pub pct: i64,
    #[serde(default)]
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
}

fn default_pct() -> i64 {
    DEFAULT_PCT
}

/// Read-only projection of a stored bill for display
///
/// Rebuilt on every fetch, never mutated. `date` carries the formatted
/// label while `raw_date` keeps the stored value for presentation sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct BillListEntry {
    pub id: Option<String>,
    pub email: String,
    pub bill_type: String,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub raw_date: String,
    pub commentary: String,
    pub status: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

impl BillListEntry {
    pub fn from_bill(bill: Bill) -> Self {
        Self {
            id: bill.id,
            email: bill.email,
            bill_type: bill.bill_type,
            name: bill.name,
            amount: bill.amount,
            date: format_date(&bill.date),
            raw_date: bill.date,
            commentary: bill.commentary,
            status: bill.status.label().to_string(),
            file_url: bill.file_url,
            file_name: bill.file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bill() -> Bill {
        Bill {
            id: Some("47qAXb6fIm2zOKkLzMro".to_string()),
            email: "a@a".to_string(),
            bill_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: 400,
            date: "2004-04-04".to_string(),
            vat: "80".to_string(),
            pct: 20,
            commentary: "séminaire billed".to_string(),
            file_url: Some("https://test.storage.tld/v0/b/billable.png".to_string()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            status: BillStatus::Pending,
        }
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(BillStatus::from_str("accepted"), BillStatus::Accepted);
        assert_eq!(BillStatus::from_str("garbage"), BillStatus::Pending);
        assert_eq!(BillStatus::Refused.as_str(), "refused");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BillStatus::Pending.label(), "En attente");
        assert_eq!(BillStatus::Accepted.label(), "Accepté");
        assert_eq!(BillStatus::Refused.label(), "Refusé");
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_string(&sample_bill()).unwrap();
        assert!(json.contains(r#""type":"Hôtel et logement""#));
        assert!(json.contains(r#""fileUrl":"#));
        assert!(json.contains(r#""fileName":"#));
        assert!(json.contains(r#""status":"pending""#));
    }

    #[test]
    fn test_id_skipped_until_assigned() {
        let mut bill = sample_bill();
        bill.id = None;
        let json = serde_json::to_string(&bill).unwrap();
        assert!(!json.contains(r#""id""#));
    }

    #[test]
    fn test_pct_defaults_on_deserialization() {
        let bill: Bill = serde_json::from_str(
            r#"{"email":"a@a","type":"Transports","name":"tgv","date":"2021-11-02","fileUrl":null,"fileName":null}"#,
        )
        .unwrap();
        assert_eq!(bill.pct, DEFAULT_PCT);
        assert_eq!(bill.status, BillStatus::Pending);
    }

    #[test]
    fn test_projection_formats_date_and_status() {
        let entry = BillListEntry::from_bill(sample_bill());
        assert_eq!(entry.date, "4 Avr. 04");
        assert_eq!(entry.raw_date, "2004-04-04");
        assert_eq!(entry.status, "En attente");
    }
}
