//! Wire payload for the form-submission endpoint

use serde::{Deserialize, Serialize};

/// JSON body POSTed to the submission endpoint.
///
/// The endpoint expects exactly these five keys in camelCase; the response
/// body is never parsed, only the status code matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ContactPayload {
        ContactPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            project_type: "Brand Strategy & Development".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_serializes_to_exact_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["email", "firstName", "lastName", "message", "projectType"]
        );
        assert_eq!(obj["firstName"], "Ada");
        assert_eq!(obj["lastName"], "Lovelace");
        assert_eq!(obj["email"], "ada@example.com");
        assert_eq!(obj["projectType"], "Brand Strategy & Development");
        assert_eq!(obj["message"], "Hello");
    }

    #[test]
    fn test_unset_project_type_serializes_as_empty_string() {
        let mut payload = sample();
        payload.project_type = String::new();
        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["projectType"], "");
    }
}
