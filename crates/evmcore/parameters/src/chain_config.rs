// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// EVM fork activation schedule, as unix timestamps in seconds.
///
/// The default activates every fork at genesis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    pub cancun_time: i64,
    pub prague_time: i64,
    pub verkle_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainConfigError {
    #[error("negative {fork} activation time: {time}")]
    NegativeForkTime { fork: &'static str, time: i64 },

    #[error("{later} activates before {earlier}")]
    ForkOrder {
        earlier: &'static str,
        later: &'static str,
    },
}

impl ChainConfig {
    /// Forks in activation order.
    fn forks(&self) -> [(&'static str, i64); 3] {
        [
            ("cancun", self.cancun_time),
            ("prague", self.prague_time),
            ("verkle", self.verkle_time),
        ]
    }

    pub fn validate(&self) -> Result<(), ChainConfigError> {
        let forks = self.forks();
        for &(fork, time) in &forks {
            if time < 0 {
                return Err(ChainConfigError::NegativeForkTime { fork, time });
            }
        }
        for pair in forks.windows(2) {
            let (earlier, earlier_time) = pair[0];
            let (later, later_time) = pair[1];
            if later_time < earlier_time {
                return Err(ChainConfigError::ForkOrder { earlier, later });
            }
        }
        Ok(())
    }
}
