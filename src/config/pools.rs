//! Mining pool table and the hand-picked pool groupings.
//!
//! Pools without a fixed color take one from the palette rotation by position.

use crate::config::palette::{Color, Hue};

pub struct PoolDef {
    /// Backend slug, also the metric prefix (`foundryusa_dominance`)
    pub id: &'static str,
    pub name: &'static str,
    pub color: Option<Color>,
}

pub const POOLS: &[PoolDef] = &[
    PoolDef { id: "unknown", name: "Unknown", color: Some(Color::Gray) },
    PoolDef { id: "foundryusa", name: "Foundry USA", color: Some(Color::Orange) },
    PoolDef { id: "antpool", name: "AntPool", color: Some(Color::Red) },
    PoolDef { id: "viabtc", name: "ViaBTC", color: Some(Color::Green) },
    PoolDef { id: "f2pool", name: "F2Pool", color: Some(Color::Blue) },
    PoolDef { id: "marapool", name: "MARA Pool", color: Some(Color::Violet) },
    PoolDef { id: "spiderpool", name: "SpiderPool", color: Some(Color::Cyan) },
    PoolDef { id: "secpool", name: "SECPOOL", color: Some(Color::Amber) },
    PoolDef { id: "luxor", name: "Luxor", color: Some(Color::Pink) },
    PoolDef { id: "binancepool", name: "Binance Pool", color: Some(Color::Yellow) },
    PoolDef { id: "braiinspool", name: "Braiins Pool", color: Some(Color::Emerald) },
    PoolDef { id: "ocean", name: "OCEAN", color: Some(Color::Sky) },
    PoolDef { id: "sbicrypto", name: "SBI Crypto", color: None },
    PoolDef { id: "btccom", name: "BTC.com", color: None },
    PoolDef { id: "poolin", name: "Poolin", color: None },
    PoolDef { id: "ultimuspool", name: "ULTIMUSPOOL", color: None },
    PoolDef { id: "miningsquared", name: "Mining Squared", color: None },
    PoolDef { id: "whitepool", name: "WhitePool", color: None },
    PoolDef { id: "1thash", name: "1THash", color: None },
    PoolDef { id: "kucoinpool", name: "KuCoin Pool", color: None },
    PoolDef { id: "btcm", name: "BTC M", color: None },
    PoolDef { id: "rawpool", name: "Rawpool", color: None },
    PoolDef { id: "sigmapoolcom", name: "Sigmapool.com", color: None },
    PoolDef { id: "slushpool", name: "SlushPool", color: None },
    PoolDef { id: "bitfury", name: "BitFury", color: None },
    PoolDef { id: "bitclub", name: "BitClub", color: None },
    PoolDef { id: "btctop", name: "BTC.TOP", color: None },
    PoolDef { id: "huobipool", name: "Huobi.pool", color: None },
    PoolDef { id: "okexpool", name: "OKExPool", color: None },
    PoolDef { id: "pegapool", name: "PEGA Pool", color: None },
    PoolDef { id: "novablock", name: "NovaBlock", color: None },
    PoolDef { id: "titan", name: "Titan", color: None },
    PoolDef { id: "emcdpool", name: "EMCDPool", color: None },
    PoolDef { id: "carbonnegative", name: "Carbon Negative", color: None },
    PoolDef { id: "solock", name: "Solo CK", color: None },
    PoolDef { id: "ghashio", name: "GHash.IO", color: None },
    PoolDef { id: "kanopool", name: "KanoPool", color: None },
    PoolDef { id: "eligius", name: "Eligius", color: None },
    PoolDef { id: "btcguild", name: "BTC Guild", color: None },
];

/// Pools with enough hashrate to get their own dominance compare chart
pub const MAJOR_POOLS: &[&str] = &[
    "foundryusa",
    "antpool",
    "viabtc",
    "f2pool",
    "marapool",
    "spiderpool",
    "secpool",
    "luxor",
    "binancepool",
    "braiinspool",
    "ocean",
];

/// Pools known to share AntPool's infrastructure
pub const ANTPOOL_AND_FRIENDS: &[&str] = &[
    "antpool",
    "poolin",
    "btccom",
    "braiinspool",
    "ultimuspool",
    "binancepool",
    "secpool",
    "sigmapoolcom",
    "rawpool",
    "luxor",
];

impl PoolDef {
    /// Fixed color, or the rotation slot for its position in [`POOLS`].
    pub fn hue(&self, index: usize) -> Hue {
        self.color.map_or(Hue::Rotating(index), Hue::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn pool_ids_are_unique() {
        assert!(POOLS.iter().map(|p| p.id).all_unique());
    }

    #[test]
    fn groupings_name_listed_pools() {
        for id in MAJOR_POOLS.iter().chain(ANTPOOL_AND_FRIENDS) {
            assert!(POOLS.iter().any(|p| p.id == *id), "unlisted pool {}", id);
        }
    }

    #[test]
    fn uncolored_pools_rotate_by_position() {
        let (index, sbi) = POOLS.iter().find_position(|p| p.id == "sbicrypto").unwrap();
        assert_eq!(sbi.hue(index), Hue::Rotating(index));
        assert_eq!(POOLS[1].hue(1), Hue::Fixed(Color::Orange));
    }
}
