use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    #[serde(rename = "professional")]
    Professional,
    #[serde(rename = "petOwner")]
    PetOwner,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Professional => "professional",
            UserRole::PetOwner => "petOwner",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "professional" => Some(UserRole::Professional),
            "petOwner" => Some(UserRole::PetOwner),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserInfo {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProfessionalStatus {
    #[serde(default)]
    pub is_professional: bool,
    #[serde(default)]
    pub is_approved_professional: bool,
    #[serde(default)]
    pub approved_dog_sitting: bool,
    #[serde(default)]
    pub approved_cat_sitting: bool,
    #[serde(default)]
    pub approved_exotics_sitting: bool,
}

impl ProfessionalStatus {
    pub fn role(&self) -> UserRole {
        if self.is_professional {
            UserRole::Professional
        } else {
            UserRole::PetOwner
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
