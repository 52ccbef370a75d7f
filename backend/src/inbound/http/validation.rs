//! Shared validation helpers for inbound HTTP adapters.
//!
//! Requests are validated before any data-store access; failures carry
//! machine-readable detail (field name, offending value) alongside the
//! human-readable message.

use serde_json::json;

use crate::domain::{Error, UserId};

/// Newtype wrapper for HTTP field names to keep call sites typo-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Parse a user identifier out of a request body field.
pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    value.parse::<UserId>().map_err(|_| {
        let field = field.as_str();
        Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
            "field": field,
            "value": value,
            "code": "invalid_uuid",
        }))
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    fn valid_uuid_parses() {
        let id = UserId::random();
        let parsed = parse_user_id(&id.to_string(), FieldName::new("user1Id"))
            .expect("valid UUID text parses");
        assert_eq!(parsed, id);
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("123")]
    fn malformed_uuid_is_rejected_with_field_details(#[case] value: &str) {
        let error =
            parse_user_id(value, FieldName::new("user2Id")).expect_err("malformed input rejected");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("details attached");
        assert_eq!(details["field"], "user2Id");
        assert_eq!(details["value"], value);
    }
}
