use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answer submitted by a contestant.
///
/// Appended to the ledger unconditionally: no dedup per (participant,
/// question), no check that the option belongs to the question, no
/// check that the participant joined first. That permissiveness is the
/// observed contract, not an oversight to fix here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Ledger record id, assigned server-side when the client omits it.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub user_name: String,
    pub question_id: String,
    pub selected_option_id: String,
    /// Denormalized option text, carried for the ranking view.
    #[serde(default)]
    pub selected_option_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_assigned_when_absent() {
        let json = r#"{"userName":"Alice","questionId":"1","selectedOptionId":"2"}"#;
        let r: Response = serde_json::from_str(json).unwrap();
        assert_eq!(r.user_name, "Alice");
        assert_eq!(r.selected_option_text, "");
        assert!(!r.id.is_nil());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let r = Response {
            id: Uuid::new_v4(),
            user_name: "Bob".to_string(),
            question_id: "3".to_string(),
            selected_option_id: "1".to_string(),
            selected_option_text: "Mars".to_string(),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"userName\":\"Bob\""));
        assert!(json.contains("\"selectedOptionId\":\"1\""));
    }
}
