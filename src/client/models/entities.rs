use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification a member picks at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeholderType {
    Individual,
    Ngo,
    Business,
    Institution,
}

impl StakeholderType {
    pub const ALL: [StakeholderType; 4] = [
        StakeholderType::Individual,
        StakeholderType::Ngo,
        StakeholderType::Business,
        StakeholderType::Institution,
    ];
}

impl fmt::Display for StakeholderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StakeholderType::Individual => "Individual",
            StakeholderType::Ngo => "NGO",
            StakeholderType::Business => "Business",
            StakeholderType::Institution => "Institution",
        };
        write!(f, "{}", label)
    }
}

// The backend stores one profile sub-document per stakeholder type and sends
// whichever ones exist. Fields default to None so a sparse document still
// deserializes.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoProfile {
    #[serde(default)]
    pub ngo_name: Option<String>,
    #[serde(default)]
    pub mission_focus_areas: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionProfile {
    #[serde(default)]
    pub institution_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub stakeholder_type: Option<String>,
    #[serde(default)]
    pub individual: Option<IndividualProfile>,
    #[serde(default)]
    pub ngo: Option<NgoProfile>,
    #[serde(default)]
    pub business: Option<BusinessProfile>,
    #[serde(default)]
    pub institution: Option<InstitutionProfile>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sdg: u8,
    #[serde(default)]
    pub member_count: u32,
}

/// Body of the create-community request.
#[derive(Debug, Clone)]
pub struct NewCommunity {
    pub name: String,
    pub description: String,
    pub sdg: u8,
}

impl NewCommunity {
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "sdg": self.sdg,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionRequest {
    pub requester: Member,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_deserializes_from_sparse_document() {
        let member: Member = serde_json::from_str(r#"{ "_id": "u1" }"#).expect("sparse member");
        assert_eq!(member.id, "u1");
        assert!(member.stakeholder_type.is_none());
        assert!(member.individual.is_none());
    }

    #[test]
    fn member_profiles_use_wire_field_names() {
        let raw = r#"{
            "_id": "u2",
            "stakeholderType": "ngo",
            "ngo": { "ngoName": "Green Roots", "missionFocusAreas": "Reforestation" }
        }"#;
        let member: Member = serde_json::from_str(raw).expect("ngo member");
        let ngo = member.ngo.expect("ngo profile");
        assert_eq!(ngo.ngo_name.as_deref(), Some("Green Roots"));
        assert_eq!(ngo.mission_focus_areas.as_deref(), Some("Reforestation"));
    }

    #[test]
    fn community_defaults_missing_counters() {
        let community: Community =
            serde_json::from_str(r#"{ "_id": "c1", "name": "Clean Water Guild" }"#)
                .expect("community");
        assert_eq!(community.sdg, 0);
        assert_eq!(community.member_count, 0);
        assert_eq!(community.description, "");
    }

    #[test]
    fn new_community_body_uses_plain_field_names() {
        let body = NewCommunity {
            name: "Clean Water Guild".to_string(),
            description: "Wells and filters".to_string(),
            sdg: 6,
        }
        .to_body();
        assert_eq!(body["name"], "Clean Water Guild");
        assert_eq!(body["description"], "Wells and filters");
        assert_eq!(body["sdg"], 6);
    }

    #[test]
    fn stakeholder_type_serializes_lowercase() {
        let value = serde_json::to_value(StakeholderType::Ngo).expect("serialize");
        assert_eq!(value, "ngo");
    }
}
