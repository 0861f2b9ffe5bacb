//! Outcome types shared by every command that changes tiles.

use serde::{Deserialize, Serialize};

use crate::company::Owner;

/// How a command is being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CommandFlags {
    /// Apply the changes; without it the command only checks and prices.
    pub exec: bool,
    /// Issued indirectly (e.g. building over something): refuse to demolish
    /// anything that is more than bare land.
    pub auto: bool,
    /// Issued while liquidating a bankrupt company.
    pub bankrupt: bool,
}

impl CommandFlags {
    pub const TEST: CommandFlags = CommandFlags {
        exec: false,
        auto: false,
        bankrupt: false,
    };
    pub const EXEC: CommandFlags = CommandFlags {
        exec: true,
        auto: false,
        bankrupt: false,
    };

    pub fn with_auto(mut self) -> Self {
        self.auto = true;
        self
    }

    pub fn with_bankrupt(mut self) -> Self {
        self.bankrupt = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseType {
    #[default]
    Construction,
    Property,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommandCost {
    pub expense: ExpenseType,
    pub cost: i64,
}

impl CommandCost {
    pub fn new(expense: ExpenseType, cost: i64) -> Self {
        Self { expense, cost }
    }

    pub fn construction(cost: i64) -> Self {
        Self::new(ExpenseType::Construction, cost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandError {
    /// The tile belongs to someone other than the acting company.
    AreaOwnedByAnother(Owner),
    BuildingMustBeDemolished,
    VehicleInTheWay,
    /// The tile is not bare land.
    AreaNotClear,
    LandSlopedWrongDirection,
    OutOfBounds,
}

pub type CommandResult = Result<CommandCost, CommandError>;
