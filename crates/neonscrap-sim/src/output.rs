use neonscrap_lighting::DaySample;
use neonscrap_tiles::TileKind;
use serde::{Deserialize, Serialize};

/// Actor position handed to the host's save collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub x: f32,
    pub y: f32,
}

/// Requests from the simulation to its collaborators, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    InventoryDelta { kind: TileKind, amount: i32 },
    Damage { amount: u32 },
    OpenWorkbench,
    VehicleMode { active: bool },
    SaveSnapshotReady(SaveSnapshot),
}

#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub events: Vec<SimEvent>,
    pub day: DaySample,
    pub dt: f32,
    /// Horizontal input produced visible motion this frame.
    pub moving: bool,
}

impl FrameOutput {
    /// Net inventory change for `kind` across this frame's events.
    pub fn inventory_delta(&self, kind: TileKind) -> i32 {
        self.events
            .iter()
            .map(|e| match e {
                SimEvent::InventoryDelta { kind: k, amount } if *k == kind => *amount,
                _ => 0,
            })
            .sum()
    }
}
