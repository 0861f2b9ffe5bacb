//! Tile owners and the per-company bookkeeping the tile handlers touch.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::RAIL_TYPE_COUNT;
use crate::rail::RailType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub u8);

/// Who a tile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Owner {
    Company(CompanyId),
    Town,
    /// Flooding acts as this owner; it may destroy anything.
    Water,
    #[default]
    None,
}

impl Owner {
    pub fn company(self) -> Option<CompanyId> {
        match self {
            Owner::Company(id) => Some(id),
            _ => None,
        }
    }
}

/// Infrastructure pieces counted per rail type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Infrastructure {
    pub rail: [u32; RAIL_TYPE_COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Palette index used to tint the company's buildings.
    pub colour: u8,
    pub infrastructure: Infrastructure,
}

#[derive(Resource, Debug, Default)]
pub struct Companies {
    companies: HashMap<CompanyId, Company>,
    next_id: u8,
    /// The owner on whose behalf commands are currently executed.
    pub current: Owner,
}

impl Companies {
    /// Found a new company and return its id.
    pub fn create(&mut self, colour: u8) -> CompanyId {
        let id = CompanyId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.companies.insert(
            id,
            Company {
                colour,
                infrastructure: Infrastructure::default(),
            },
        );
        id
    }

    pub fn get(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(&id)
    }

    pub fn get_mut(&mut self, id: CompanyId) -> Option<&mut Company> {
        self.companies.get_mut(&id)
    }

    pub fn remove(&mut self, id: CompanyId) -> Option<Company> {
        self.companies.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Colour to draw `owner`'s property in. Non-company owners use 0.
    pub fn colour_of(&self, owner: Owner) -> u8 {
        owner
            .company()
            .and_then(|id| self.get(id))
            .map_or(0, |c| c.colour)
    }

    pub fn rail_count(&self, owner: Owner, rail_type: RailType) -> u32 {
        owner
            .company()
            .and_then(|id| self.get(id))
            .map_or(0, |c| c.infrastructure.rail[rail_type.index()])
    }

    /// Add `delta` pieces of `rail_type` infrastructure to `owner`.
    pub fn adjust_rail(&mut self, owner: Owner, rail_type: RailType, delta: i32) {
        let Some(company) = owner.company().and_then(|id| self.companies.get_mut(&id)) else {
            warn!(
                "Rail infrastructure change of {} for {:?}, which is not a company",
                delta, owner
            );
            return;
        };
        let count = &mut company.infrastructure.rail[rail_type.index()];
        *count = count.saturating_add_signed(delta);
    }
}
