use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opakt person-ID (UUID-sträng från persistenslagret)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Man",
            Self::Female => "Kvinna",
        }
    }
}

/// En person i släktträdet
///
/// `father_id` är den trädbildande kanten. `mother_id` följer med som extra
/// referens men används aldrig för att bygga trädet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonNode {
    pub id: PersonId,
    #[serde(default)]
    pub father_id: Option<PersonId>,
    #[serde(default)]
    pub mother_id: Option<PersonId>,
    pub name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants_count: Option<u32>,
    /// Övriga visningsfält (biografi, datum, foton ...) skickas vidare orörda
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PersonNode {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            father_id: None,
            mother_id: None,
            name: name.into(),
            gender,
            generation: None,
            hid: None,
            descendants_count: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_father(mut self, father_id: impl Into<PersonId>) -> Self {
        self.father_id = Some(father_id.into());
        self
    }

    pub fn with_mother(mut self, mother_id: impl Into<PersonId>) -> Self {
        self.mother_id = Some(mother_id.into());
        self
    }

    pub fn with_hid(mut self, hid: impl Into<String>) -> Self {
        self.hid = Some(hid.into());
        self
    }

    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    pub fn is_root(&self) -> bool {
        self.father_id.is_none()
    }

    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.id.is_empty() {
            return Err(PersonValidationError::EmptyId);
        }

        if self.name.trim().is_empty() {
            return Err(PersonValidationError::MissingName);
        }

        if self.father_id.as_ref() == Some(&self.id) || self.mother_id.as_ref() == Some(&self.id) {
            return Err(PersonValidationError::SelfParent);
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersonValidationError {
    #[error("Person-ID får inte vara tomt")]
    EmptyId,
    #[error("Namn krävs")]
    MissingName,
    #[error("En person kan inte vara sin egen förälder")]
    SelfParent,
}
