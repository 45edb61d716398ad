use crate::client::models::controls::ActionControl;
use crate::client::models::entities::{Community, ConnectionRequest, Member};

pub const DEFAULT_MEMBER_NAME: &str = "SDG Member";
pub const DEFAULT_FOCUS: &str = "SDG Impact";
pub const DEFAULT_STAKEHOLDER: &str = "member";

/// Marker set on a connect button once the request went through.
pub const SENT_MARKER: &str = "sent";

/// One entry in the member directory, ready to render: display strings
/// resolved from the profile sub-documents plus the connect button state.
#[derive(Debug, Clone)]
pub struct UserCard {
    pub member_id: String,
    pub name: String,
    pub initial: String,
    pub stakeholder_label: String,
    pub focus: String,
    pub connect: ActionControl,
}

impl UserCard {
    pub fn from_member(member: &Member) -> Self {
        let name = display_name(member);
        Self {
            member_id: member.id.clone(),
            initial: initial_of(&name),
            stakeholder_label: stakeholder_label(member),
            focus: focus_line(member),
            name,
            connect: ActionControl::new("Connect"),
        }
    }

    /// Matches the directory search box against the visible card text.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.stakeholder_label.to_lowercase().contains(&query)
            || self.focus.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone)]
pub struct CommunityCard {
    pub community_id: String,
    pub name: String,
    pub description: String,
    pub sdg_tag: String,
    pub members_line: String,
    pub join: ActionControl,
}

impl CommunityCard {
    pub fn from_community(community: &Community) -> Self {
        Self {
            community_id: community.id.clone(),
            name: community.name.clone(),
            description: community.description.clone(),
            sdg_tag: format!("SDG {}", community.sdg),
            members_line: format!("{} members", community.member_count),
            join: ActionControl::new("Join Community"),
        }
    }
}

/// An incoming connection request, with independent accept and ignore
/// buttons. Either one resolving successfully removes the whole card.
#[derive(Debug, Clone)]
pub struct RequestCard {
    pub requester_id: String,
    pub name: String,
    pub initial: String,
    pub headline: String,
    pub accept: ActionControl,
    pub reject: ActionControl,
}

impl RequestCard {
    pub fn from_request(request: &ConnectionRequest) -> Self {
        let name = display_name(&request.requester);
        Self {
            requester_id: request.requester.id.clone(),
            initial: initial_of(&name),
            headline: format!(
                "{} wants to connect",
                stakeholder_label(&request.requester)
            ),
            name,
            accept: ActionControl::new("Accept"),
            reject: ActionControl::new("Ignore"),
        }
    }
}

/// Display name resolved across the profile sub-documents, first non-empty
/// wins: individual, then NGO, then business, then institution.
fn display_name(member: &Member) -> String {
    let individual = member.individual.as_ref().and_then(|p| p.full_name.as_deref());
    let ngo = member.ngo.as_ref().and_then(|p| p.ngo_name.as_deref());
    let business = member.business.as_ref().and_then(|p| p.company_name.as_deref());
    let institution = member
        .institution
        .as_ref()
        .and_then(|p| p.institution_name.as_deref());

    first_non_empty([individual, ngo, business, institution])
        .unwrap_or(DEFAULT_MEMBER_NAME)
        .to_string()
}

/// NGOs lead with their mission focus; individuals fall back to skills.
fn focus_line(member: &Member) -> String {
    let mission = member
        .ngo
        .as_ref()
        .and_then(|p| p.mission_focus_areas.as_deref());
    let skills = member.individual.as_ref().and_then(|p| p.skills.as_deref());

    first_non_empty([mission, skills])
        .unwrap_or(DEFAULT_FOCUS)
        .to_string()
}

fn stakeholder_label(member: &Member) -> String {
    let raw = member
        .stakeholder_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_STAKEHOLDER);
    capitalize(raw)
}

fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::entities::{
        BusinessProfile, IndividualProfile, Member, NgoProfile,
    };

    fn member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            ..Member::default()
        }
    }

    #[test]
    fn individual_name_wins_over_other_profiles() {
        let mut m = member("u1");
        m.individual = Some(IndividualProfile {
            full_name: Some("Asha Rao".to_string()),
            skills: None,
        });
        m.ngo = Some(NgoProfile {
            ngo_name: Some("Green Roots".to_string()),
            mission_focus_areas: None,
        });

        assert_eq!(UserCard::from_member(&m).name, "Asha Rao");
    }

    #[test]
    fn empty_name_falls_through_to_next_profile() {
        let mut m = member("u1");
        m.individual = Some(IndividualProfile {
            full_name: Some(String::new()),
            skills: None,
        });
        m.business = Some(BusinessProfile {
            company_name: Some("Solar Works".to_string()),
        });

        assert_eq!(UserCard::from_member(&m).name, "Solar Works");
    }

    #[test]
    fn nameless_member_gets_default_name_and_initial() {
        let card = UserCard::from_member(&member("u1"));
        assert_eq!(card.name, DEFAULT_MEMBER_NAME);
        assert_eq!(card.initial, "S");
    }

    #[test]
    fn mission_focus_beats_skills() {
        let mut m = member("u1");
        m.ngo = Some(NgoProfile {
            ngo_name: None,
            mission_focus_areas: Some("Reforestation".to_string()),
        });
        m.individual = Some(IndividualProfile {
            full_name: None,
            skills: Some("Carpentry".to_string()),
        });

        assert_eq!(UserCard::from_member(&m).focus, "Reforestation");
    }

    #[test]
    fn missing_focus_gets_default_line() {
        assert_eq!(UserCard::from_member(&member("u1")).focus, DEFAULT_FOCUS);
    }

    #[test]
    fn stakeholder_label_is_capitalized_raw_value() {
        let mut m = member("u1");
        m.stakeholder_type = Some("ngo".to_string());
        assert_eq!(UserCard::from_member(&m).stakeholder_label, "Ngo");
    }

    #[test]
    fn missing_stakeholder_type_reads_member() {
        assert_eq!(
            UserCard::from_member(&member("u1")).stakeholder_label,
            "Member"
        );
    }

    #[test]
    fn community_card_formats_tag_and_member_count() {
        let community = Community {
            id: "c1".to_string(),
            name: "Clean Water Guild".to_string(),
            description: "Wells and filters".to_string(),
            sdg: 6,
            member_count: 42,
        };
        let card = CommunityCard::from_community(&community);

        assert_eq!(card.sdg_tag, "SDG 6");
        assert_eq!(card.members_line, "42 members");
        assert_eq!(card.join.state().label, "Join Community");
    }

    #[test]
    fn request_card_headline_names_the_stakeholder() {
        let mut requester = member("u2");
        requester.stakeholder_type = Some("business".to_string());
        requester.business = Some(BusinessProfile {
            company_name: Some("Solar Works".to_string()),
        });
        let card = RequestCard::from_request(&ConnectionRequest { requester });

        assert_eq!(card.headline, "Business wants to connect");
        assert_eq!(card.name, "Solar Works");
        assert_eq!(card.accept.state().label, "Accept");
        assert_eq!(card.reject.state().label, "Ignore");
    }

    #[test]
    fn search_matches_name_type_and_focus() {
        let mut m = member("u1");
        m.stakeholder_type = Some("ngo".to_string());
        m.ngo = Some(NgoProfile {
            ngo_name: Some("Green Roots".to_string()),
            mission_focus_areas: Some("Reforestation".to_string()),
        });
        let card = UserCard::from_member(&m);

        assert!(card.matches(""));
        assert!(card.matches("green"));
        assert!(card.matches("NGO"));
        assert!(card.matches("refore"));
        assert!(!card.matches("water"));
    }
}
