use std::fmt;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "inquiryType")]
    pub inquiry_type: Option<InquiryType>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryType {
    #[default]
    General,
    BrandPartnership,
    Speaking,
    Investment,
    Media,
    AttendEvent,
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InquiryType::General => "General",
            InquiryType::BrandPartnership => "Brand Partnership",
            InquiryType::Speaking => "Speaking",
            InquiryType::Investment => "Investment",
            InquiryType::Media => "Media",
            InquiryType::AttendEvent => "Attend Event",
        };
        f.write_str(label)
    }
}

#[derive(Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_type_uses_kebab_case_wire_values() {
        let parsed: InquiryType = serde_json::from_str(r#""brand-partnership""#).unwrap();
        assert_eq!(parsed, InquiryType::BrandPartnership);
        let parsed: InquiryType = serde_json::from_str(r#""attend-event""#).unwrap();
        assert_eq!(parsed, InquiryType::AttendEvent);
    }

    #[test]
    fn unknown_inquiry_type_is_rejected() {
        assert!(serde_json::from_str::<InquiryType>(r#""sponsorship""#).is_err());
    }

    #[test]
    fn contact_request_tolerates_missing_fields() {
        let parsed: ContactRequest = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Jane"));
        assert!(parsed.email.is_none());
        assert!(parsed.inquiry_type.is_none());
        assert!(parsed.message.is_none());
    }
}
