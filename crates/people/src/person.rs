use serde::{Deserialize, Serialize};

use peoplehub_core::{Entity, Links, PersonId};

/// Storage-side person record.
///
/// `id` is `None` until storage assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> Option<PersonId> {
        self.id
    }
}

/// Boundary-side person representation.
///
/// `key` mirrors the entity identifier and is exposed as `"id"` on the wire.
/// Links are attached per response and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonVo {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    #[serde(default)]
    pub links: Links,
}

impl core::fmt::Display for PersonVo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let key = match self.key {
            Some(k) => k.to_string(),
            None => "none".to_string(),
        };
        write!(
            f,
            "PersonVo(key: {key}, first_name: {}, last_name: {}, address: {}, gender: {}, links: {})",
            self.first_name, self.last_name, self.address, self.gender, self.links
        )
    }
}
