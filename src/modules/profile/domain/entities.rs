use serde::{Deserialize, Serialize};

/// The one-and-only site owner profile.
///
/// Unlike the collections there is exactly one instance; it starts out as
/// placeholders and is overwritten by the first successful fetch. The two
/// image slots both come from the backend's single stored image URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub name: String,
    pub profession: String,
    pub mission_statement: String,
    pub about_me_paragraph_1: String,
    pub about_me_paragraph_2: String,
    pub profile_image_url: String,
    pub hero_image_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_linked_in: String,
}

impl OwnerProfile {
    /// Defaults shown until the first successful fetch.
    pub fn placeholder() -> Self {
        Self {
            name: "Site Owner".to_string(),
            profession: "Your Profession".to_string(),
            mission_statement: String::new(),
            about_me_paragraph_1: String::new(),
            about_me_paragraph_2: String::new(),
            profile_image_url: "https://via.placeholder.com/40x40/FF69B4/FFFFFF?text=Logo"
                .to_string(),
            hero_image_url: "https://via.placeholder.com/400/000000/FFFFFF?text=Your+Photo"
                .to_string(),
            contact_email: String::new(),
            contact_phone: String::new(),
            contact_linked_in: String::new(),
        }
    }

    /// Commit an edit draft: only the fields the draft carries change.
    pub fn apply(&mut self, draft: &ProfileDraft) {
        if let Some(name) = &draft.name {
            self.name = name.clone();
        }
        if let Some(profession) = &draft.profession {
            self.profession = profession.clone();
        }
        if let Some(mission_statement) = &draft.mission_statement {
            self.mission_statement = mission_statement.clone();
        }
        if let Some(paragraph) = &draft.about_me_paragraph_1 {
            self.about_me_paragraph_1 = paragraph.clone();
        }
        if let Some(paragraph) = &draft.about_me_paragraph_2 {
            self.about_me_paragraph_2 = paragraph.clone();
        }
        if let Some(contact_email) = &draft.contact_email {
            self.contact_email = contact_email.clone();
        }
        if let Some(contact_phone) = &draft.contact_phone {
            self.contact_phone = contact_phone.clone();
        }
        if let Some(contact_linked_in) = &draft.contact_linked_in {
            self.contact_linked_in = contact_linked_in.clone();
        }
    }
}

/// Partial profile edit: each section of the page saves only its own
/// fields, so everything is optional and absent fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me_paragraph_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me_paragraph_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_linked_in: Option<String>,
}
