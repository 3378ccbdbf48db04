#![allow(dead_code)]

use lazy_static::lazy_static;
use lz4_bridge::lz4f::*;
use rand::{distributions::Standard, rngs::SmallRng, Rng, SeedableRng};

// Content lengths around the 256-byte scratch boundary, plus larger
// payloads.
const DATA_SIZES: &[usize] = &[
    0,
    1,
    64,
    255,
    256,
    257,
    300,
    511,
    512,
    513,
    1000,
    4096,
    65_536,
    1 << 20,
];

lazy_static! {
    static ref DATA_SET: Vec<Vec<u8>> = DATA_SIZES
        .iter()
        .enumerate()
        .map(|(n, &len)| {
            let rng = SmallRng::seed_from_u64(n as u64);
            rng.sample_iter(Standard).take(len).collect()
        })
        .collect();
}

pub fn generate_data() -> impl Iterator<Item = Vec<u8>> {
    DATA_SET.clone().into_iter()
}

fn preferences_set() -> impl Iterator<Item = Preferences> {
    vec![
        PreferencesBuilder::new().build(),
        PreferencesBuilder::new()
            .block_size(BlockSize::Max64KB)
            .build(),
        PreferencesBuilder::new()
            .block_size(BlockSize::Max256KB)
            .build(),
        PreferencesBuilder::new()
            .block_size(BlockSize::Max1MB)
            .build(),
        PreferencesBuilder::new()
            .block_size(BlockSize::Max4MB)
            .build(),
        PreferencesBuilder::new()
            .block_mode(BlockMode::Independent)
            .build(),
        PreferencesBuilder::new()
            .content_checksum(ContentChecksum::Enabled)
            .build(),
        PreferencesBuilder::new()
            .block_checksum(BlockChecksum::Enabled)
            .build(),
        PreferencesBuilder::new()
            .compression_level(CLEVEL_HIGH)
            .build(),
        PreferencesBuilder::new()
            .compression_level(CLEVEL_MAX)
            .build(),
        PreferencesBuilder::new()
            .favor_dec_speed(FavorDecSpeed::Enabled)
            .build(),
        PreferencesBuilder::new()
            .auto_flush(AutoFlush::Enabled)
            .build(),
    ]
    .into_iter()
}

pub fn lz4f_test_set() -> impl Iterator<Item = (Vec<u8>, Preferences)> {
    generate_data()
        .map(|data| preferences_set().map(move |prefs| (data.clone(), prefs)))
        .flatten()
}
