use fleury_core::errors::serde_error;
use fleury_core::rng::SUBSTREAM_CANDIDATES;
use fleury_core::{FleuryError, RngHandle};
use serde::{Deserialize, Serialize};

/// YAML-configurable knobs for a walk run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WalkConfig {
    /// Order in which candidate edges at the current vertex are tried.
    #[serde(default)]
    pub candidate_order: CandidateOrder,
    /// Check up front that all edge-bearing vertices are connected, instead of
    /// discovering a disconnected graph while walking.
    #[serde(default)]
    pub connectivity_precheck: bool,
    /// Re-check the finished walk against a copy of the input graph.
    #[serde(default)]
    pub verify: bool,
}

impl WalkConfig {
    /// Parses a configuration from YAML; missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FleuryError> {
        serde_yaml::from_str(yaml).map_err(|err| serde_error("config-yaml", err))
    }

    /// Seed driving candidate shuffling, if any.
    pub fn seed(&self) -> Option<u64> {
        match self.candidate_order {
            CandidateOrder::Input => None,
            CandidateOrder::Seeded { seed } => Some(seed),
        }
    }
}

/// Candidate edge ordering strategies.
///
/// The order decides which of the valid walks is produced, never whether one
/// is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CandidateOrder {
    /// Incidence order, i.e. the order of the vertex's adjacency list.
    #[default]
    Input,
    /// Incidence order shuffled at every step by a seeded RNG.
    Seeded {
        /// Master seed; the shuffle uses its candidate substream.
        seed: u64,
    },
}

impl CandidateOrder {
    pub(crate) fn rng(&self) -> Option<RngHandle> {
        match self {
            CandidateOrder::Input => None,
            CandidateOrder::Seeded { seed } => {
                Some(RngHandle::substream(*seed, SUBSTREAM_CANDIDATES))
            }
        }
    }
}
