//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the gymdesk bucket.

use uuid::Uuid;

use crate::national_id::NationalId;

pub fn client(national_id: &NationalId) -> String {
    format!("clients/{national_id}.json")
}

pub fn client_assessments_prefix(national_id: &NationalId) -> String {
    format!("assessments/{national_id}/")
}

pub fn assessment(national_id: &NationalId, id: Uuid) -> String {
    format!("assessments/{national_id}/{id}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_keys_nest_under_client_prefix() {
        let national_id = NationalId::parse("123.456.789-09").unwrap();
        let id = Uuid::nil();
        let key = assessment(&national_id, id);
        assert_eq!(
            key,
            "assessments/12345678909/00000000-0000-0000-0000-000000000000.json"
        );
        assert!(key.starts_with(&client_assessments_prefix(&national_id)));
    }

    #[test]
    fn client_key_uses_normalized_id() {
        let national_id = NationalId::parse("987 654 321 00").unwrap();
        assert_eq!(client(&national_id), "clients/98765432100.json");
    }
}
