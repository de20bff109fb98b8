//! Typed client of the metrics backend.
//!
//! The backend names every series after a fixed convention
//! (`<cohort>_<stem>_<denomination>_<stat>`), so the whole pattern graph can be built up
//! front without a round trip.

pub mod chain;
pub mod cointime;
pub mod constants;
pub mod distribution;
pub mod investing;
pub mod market;
pub mod mining;
pub mod network;

pub use chain::Chain;
pub use cointime::Cointime;
pub use constants::Constants;
pub use distribution::{AmountFamilies, Distribution};
pub use investing::Dca;
pub use market::Market;
pub use mining::{Mining, Pools};
pub use network::Addresses;

pub struct MetricsTree {
    pub chain: Chain,
    pub mining: Mining,
    pub pools: Pools,
    pub addresses: Addresses,
    pub market: Market,
    pub dca: Dca,
    pub cointime: Cointime,
    pub constants: Constants,
    pub distribution: Distribution,
}

impl MetricsTree {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            mining: Mining::new(),
            pools: Pools::new(),
            addresses: Addresses::new(),
            market: Market::new(),
            dca: Dca::new(),
            cointime: Cointime::new(),
            constants: Constants::new(),
            distribution: Distribution::new(),
        }
    }
}

impl Default for MetricsTree {
    fn default() -> Self {
        Self::new()
    }
}
