//! Entity <-> view object conversions.
//!
//! Mapping never touches links; decoration happens in the service.

use peoplehub_core::Links;

use crate::person::{Person, PersonVo};

pub fn to_vo(entity: &Person) -> PersonVo {
    PersonVo {
        key: entity.id,
        first_name: entity.first_name.clone(),
        last_name: entity.last_name.clone(),
        address: entity.address.clone(),
        gender: entity.gender.clone(),
        links: Links::new(),
    }
}

pub fn to_vo_list(entities: &[Person]) -> Vec<PersonVo> {
    entities.iter().map(to_vo).collect()
}

/// Build a new, unsaved entity from a view. Any key on the view is ignored.
pub fn to_entity(vo: &PersonVo) -> Person {
    Person {
        id: None,
        first_name: vo.first_name.clone(),
        last_name: vo.last_name.clone(),
        address: vo.address.clone(),
        gender: vo.gender.clone(),
    }
}

/// Overwrite the descriptive fields of `entity` from `vo`, keeping its identity.
pub fn apply_to(vo: &PersonVo, entity: &mut Person) {
    entity.first_name.clone_from(&vo.first_name);
    entity.last_name.clone_from(&vo.last_name);
    entity.address.clone_from(&vo.address);
    entity.gender.clone_from(&vo.gender);
}
