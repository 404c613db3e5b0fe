use serde::{Deserialize, Serialize};

use crate::shared::text::list_field::{join_list, split_list};

use super::resource::{ResourceDraft, ResourceKind};

// ============================ Skill ============================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Languages,
    Tools,
    Frameworks,
    #[serde(rename = "Documentation Tools")]
    DocumentationTools,
    #[serde(rename = "Illustration & Visualization")]
    IllustrationVisualization,
    #[serde(rename = "Programming Exposure")]
    ProgrammingExposure,
    #[serde(rename = "Engineering Knowledge")]
    EngineeringKnowledge,
    #[serde(rename = "Process & QA")]
    ProcessQa,
    #[serde(rename = "Office & Productivity Tools")]
    OfficeProductivityTools,
    #[serde(rename = "Core Strengths")]
    CoreStrengths,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    pub icon: String,
    pub order: i32,
}

impl ResourceKind for Skill {
    type Draft = SkillDraft;

    const COLLECTION_PATH: &'static str = "/api/skills";
    const LABEL: &'static str = "skill";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> SkillDraft {
        SkillDraft {
            name: self.name.clone(),
            category: self.category,
            proficiency: self.proficiency.clone(),
            icon: self.icon.clone(),
            order: self.order,
        }
    }
}

impl ResourceDraft for SkillDraft {
    type Payload = Self;

    fn to_payload(&self) -> Self {
        self.clone()
    }
}

// ============================ Project ============================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub demo_link: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planned,
}

/// Project input as edited: the tech stack is one comma-joined line.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub github_link: String,
    pub demo_link: String,
    pub image: String,
    pub status: ProjectStatus,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
    pub image: String,
    pub status: ProjectStatus,
    pub featured: bool,
}

impl ResourceKind for Project {
    type Draft = ProjectDraft;

    const COLLECTION_PATH: &'static str = "/api/projects";
    const LABEL: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            tech_stack: join_list(&self.tech_stack),
            github_link: self.github_link.clone(),
            demo_link: self.demo_link.clone(),
            image: self.image.clone(),
            status: self.status,
            featured: self.featured,
        }
    }
}

impl ResourceDraft for ProjectDraft {
    type Payload = ProjectPayload;

    fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            tech_stack: split_list(&self.tech_stack),
            github_link: self.github_link.clone(),
            demo_link: self.demo_link.clone(),
            image: self.image.clone(),
            status: self.status,
            featured: self.featured,
        }
    }
}

// ============================ Qualification ============================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    #[serde(alias = "_id")]
    pub id: String,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationDraft {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

impl ResourceKind for Qualification {
    type Draft = QualificationDraft;

    const COLLECTION_PATH: &'static str = "/api/qualifications";
    const LABEL: &'static str = "qualification";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> QualificationDraft {
        QualificationDraft {
            degree: self.degree.clone(),
            institution: self.institution.clone(),
            year: self.year.clone(),
            description: self.description.clone(),
        }
    }
}

impl ResourceDraft for QualificationDraft {
    type Payload = Self;

    fn to_payload(&self) -> Self {
        self.clone()
    }
}

// ============================ Experience ============================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: Vec<String>,
}

/// Experience input as edited: the description bullets are one
/// comma-joined line.
#[derive(Debug, Clone)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: Vec<String>,
}

impl ResourceKind for Experience {
    type Draft = ExperienceDraft;

    const COLLECTION_PATH: &'static str = "/api/experience";
    const LABEL: &'static str = "experience entry";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> ExperienceDraft {
        ExperienceDraft {
            title: self.title.clone(),
            company: self.company.clone(),
            duration: self.duration.clone(),
            description: join_list(&self.description),
        }
    }
}

impl ResourceDraft for ExperienceDraft {
    type Payload = ExperiencePayload;

    fn to_payload(&self) -> ExperiencePayload {
        ExperiencePayload {
            title: self.title.clone(),
            company: self.company.clone(),
            duration: self.duration.clone(),
            description: split_list(&self.description),
        }
    }
}

// ============================ Achievement ============================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub proof_link: String,
}

impl Achievement {
    /// A proof link of `#` or empty means "no link".
    pub fn proof_url(&self) -> Option<&str> {
        normalized_link(&self.proof_link)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub proof_link: String,
}

impl ResourceKind for Achievement {
    type Draft = AchievementDraft;

    const COLLECTION_PATH: &'static str = "/api/achievements";
    const LABEL: &'static str = "achievement";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> AchievementDraft {
        AchievementDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            proof_link: self.proof_link.clone(),
        }
    }
}

impl ResourceDraft for AchievementDraft {
    type Payload = Self;

    fn to_payload(&self) -> Self {
        self.clone()
    }
}

// ============================ Certification ============================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub link: String,
}

impl Certification {
    /// A link of `#` or empty means "no link".
    pub fn link_url(&self) -> Option<&str> {
        normalized_link(&self.link)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationDraft {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
}

impl ResourceKind for Certification {
    type Draft = CertificationDraft;

    const COLLECTION_PATH: &'static str = "/api/certifications";
    const LABEL: &'static str = "certification";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> CertificationDraft {
        CertificationDraft {
            title: self.title.clone(),
            issuer: self.issuer.clone(),
            date: self.date.clone(),
            link: self.link.clone(),
        }
    }
}

impl ResourceDraft for CertificationDraft {
    type Payload = Self;

    fn to_payload(&self) -> Self {
        self.clone()
    }
}

fn normalized_link(link: &str) -> Option<&str> {
    match link.trim() {
        "" | "#" => None,
        url => Some(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skill_deserializes_from_backend_shape() {
        let skill: Skill = serde_json::from_value(json!({
            "id": "1",
            "name": "Go",
            "category": "Technical",
            "proficiency": "Advanced"
        }))
        .unwrap();

        assert_eq!(skill.id, "1");
        assert_eq!(skill.category, SkillCategory::Technical);
        assert_eq!(skill.proficiency, Proficiency::Advanced);
        assert_eq!(skill.icon, "");
        assert_eq!(skill.order, 0);
    }

    #[test]
    fn mongo_style_underscore_id_is_accepted() {
        let skill: Skill = serde_json::from_value(json!({
            "_id": "65a1b2",
            "name": "DITA XML",
            "category": "Documentation Tools",
            "proficiency": "Expert"
        }))
        .unwrap();

        assert_eq!(skill.id, "65a1b2");
        assert_eq!(skill.category, SkillCategory::DocumentationTools);
    }

    #[test]
    fn project_status_uses_display_spelling_on_the_wire() {
        let project: Project = serde_json::from_value(json!({
            "id": "9",
            "title": "X",
            "techStack": ["Go", "Rust"],
            "status": "In Progress"
        }))
        .unwrap();

        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.tech_stack, vec!["Go", "Rust"]);

        let encoded = serde_json::to_value(&project).unwrap();
        assert_eq!(encoded["status"], "In Progress");
        assert_eq!(encoded["techStack"], json!(["Go", "Rust"]));
    }

    #[test]
    fn project_draft_decodes_comma_joined_tech_stack() {
        let draft = ProjectDraft {
            title: "X".to_string(),
            description: String::new(),
            tech_stack: "Go, Rust".to_string(),
            github_link: String::new(),
            demo_link: String::new(),
            image: String::new(),
            status: ProjectStatus::Completed,
            featured: false,
        };

        let payload = draft.to_payload();

        assert_eq!(payload.tech_stack, vec!["Go", "Rust"]);
    }

    #[test]
    fn experience_draft_decodes_comma_joined_description() {
        let draft = ExperienceDraft {
            title: "Technical Writer".to_string(),
            company: "Acme".to_string(),
            duration: "2023 - Present".to_string(),
            description: "Wrote IFUs, Maintained style guide, ".to_string(),
        };

        let payload = draft.to_payload();

        assert_eq!(payload.description, vec!["Wrote IFUs", "Maintained style guide"]);
    }

    #[test]
    fn edit_start_draft_round_trips_list_fields() {
        let project = Project {
            id: "9".to_string(),
            title: "X".to_string(),
            description: String::new(),
            tech_stack: vec!["React".to_string(), "Node".to_string()],
            github_link: String::new(),
            demo_link: String::new(),
            image: String::new(),
            status: ProjectStatus::Planned,
            featured: true,
        };

        let draft = project.draft();

        assert_eq!(draft.tech_stack, "React, Node");
        assert_eq!(draft.to_payload().tech_stack, project.tech_stack);
    }

    #[test]
    fn hash_and_empty_links_mean_no_link() {
        let mut achievement = Achievement {
            id: "a1".to_string(),
            title: "Hackathon winner".to_string(),
            description: String::new(),
            date: "2024".to_string(),
            proof_link: "#".to_string(),
        };
        assert_eq!(achievement.proof_url(), None);

        achievement.proof_link = String::new();
        assert_eq!(achievement.proof_url(), None);

        achievement.proof_link = "https://example.com/proof".to_string();
        assert_eq!(achievement.proof_url(), Some("https://example.com/proof"));
    }

    #[test]
    fn certification_link_follows_the_same_rule() {
        let certification = Certification {
            id: "c1".to_string(),
            title: "AWS SAA".to_string(),
            issuer: "Amazon".to_string(),
            date: "2025".to_string(),
            link: " ".to_string(),
        };

        assert_eq!(certification.link_url(), None);
    }
}
