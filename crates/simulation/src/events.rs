//! Side effects raised by the tile handlers, waiting for their consumers.
//!
//! The handlers never call into windows, signals or the pathfinder. They
//! queue what those layers need to act on in [`TileEventLog`], and the
//! owner of each layer takes the pending events with
//! [`drain`](TileEventLog::drain). Nothing is ever dropped on the way.

use bevy::prelude::*;
use std::collections::VecDeque;

use map::{DiagDirection, TileIndex};

use crate::company::Owner;
use crate::rail::TrackBits;
use crate::vehicle::{VehicleId, VehicleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// The tile looks different and must be redrawn.
    TileDirty(TileIndex),
    ShowDepotWindow(TileIndex, VehicleKind),
    /// Vehicles shown in the depot window of this tile changed.
    DepotWindowChanged(TileIndex),
    /// Signals reachable through `side` of `tile` need re-evaluation.
    SignalUpdate {
        tile: TileIndex,
        side: DiagDirection,
        owner: Owner,
    },
    TrackLayoutChanged(TileIndex, TrackBits),
    /// The train lost its path and should try to reserve a new one.
    PathReserveRequested(VehicleId),
    VehicleEnteredDepot(VehicleId, TileIndex),
    /// Infrastructure totals of this company changed.
    InfrastructureChanged(Owner),
}

/// Pending tile events in the order they were raised.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileEventLog {
    pending: VecDeque<TileEvent>,
}

impl TileEventLog {
    pub fn push(&mut self, event: TileEvent) {
        self.pending.push_back(event);
    }

    /// Hand every pending event to the caller, oldest first, leaving the
    /// queue empty.
    pub fn drain(&mut self) -> Vec<TileEvent> {
        self.pending.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileEvent> + '_ {
        self.pending.iter()
    }

    pub fn contains(&self, event: &TileEvent) -> bool {
        self.pending.contains(event)
    }

    /// Pending events matching `pred`.
    pub fn count(&self, pred: impl Fn(&TileEvent) -> bool) -> usize {
        self.pending.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
