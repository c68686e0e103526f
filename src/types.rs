//! Type definitions shared across the report generator

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bit sizes of the cryptographic operations, forming the second grouping
/// axis of every chart. Series order follows this array.
pub const BITSIZES: [u32; 2] = [512, 1024];

/// Protocol variants the benchmark suite covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolMode {
    /// Threshold resource access, single dealer
    Tra2,
    /// Threshold distributed resource access
    Tdra2,
    /// Anonymous resource access
    Ara2,
}

impl ProtocolMode {
    /// All modes in the fixed reporting order
    pub fn all() -> [ProtocolMode; 3] {
        [ProtocolMode::Tra2, ProtocolMode::Tdra2, ProtocolMode::Ara2]
    }

    /// Mode label as it appears in filenames and chart titles
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolMode::Tra2 => "TRA2",
            ProtocolMode::Tdra2 => "TDRA2",
            ProtocolMode::Ara2 => "ARA2",
        }
    }

    /// Whether the mode runs with a single dealer regardless of the
    /// configured dealer counts. TRA2 elides the dealer axis entirely.
    pub fn single_dealer(&self) -> bool {
        matches!(self, ProtocolMode::Tra2)
    }

    /// The four benchmark run configurations for this mode, in the fixed
    /// order the bars appear on the chart
    pub fn run_configs(&self) -> Vec<RunConfig> {
        let guards = crate::defaults::DEFAULT_GUARD_COUNTS;
        let dealers = crate::defaults::DEFAULT_DEALER_COUNTS;

        guards
            .iter()
            .zip(dealers.iter())
            .map(|(&g, &d)| RunConfig {
                dealers: if self.single_dealer() { 1 } else { d },
                guards: g,
            })
            .collect()
    }
}

impl fmt::Display for ProtocolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProtocolMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRA2" => Ok(ProtocolMode::Tra2),
            "TDRA2" => Ok(ProtocolMode::Tdra2),
            "ARA2" => Ok(ProtocolMode::Ara2),
            _ => Err(AppError::validation(format!(
                "Unknown protocol mode '{}' (expected TRA2, TDRA2 or ARA2)",
                s
            ))),
        }
    }
}

/// One benchmark run configuration: the party counts encoded into the
/// input filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of dealer parties
    pub dealers: u32,
    /// Number of guard parties
    pub guards: u32,
}

impl RunConfig {
    pub fn new(dealers: u32, guards: u32) -> Self {
        Self { dealers, guards }
    }

    /// Axis label for this configuration, e.g. "2D / 3G"
    pub fn label(&self) -> String {
        format!("{}D / {}G", self.dealers, self.guards)
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Protocol phases stacked within each bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Token acquisition (directly measured)
    Token,
    /// Access acquisition (directly measured)
    Access,
    /// Residual communication time (total minus the measured phases)
    Communication,
}

impl Phase {
    /// Phases in stacking order, bottom to top
    pub fn stacked() -> [Phase; 3] {
        [Phase::Token, Phase::Access, Phase::Communication]
    }

    /// Legend label for the phase
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Token => "Get Token",
            Phase::Access => "Get Access",
            Phase::Communication => "Communication Time",
        }
    }

    /// Whether the phase was measured directly and therefore carries an
    /// error bar on the chart
    pub fn has_error_bar(&self) -> bool {
        !matches!(self, Phase::Communication)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
