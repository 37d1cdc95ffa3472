//! RNG seed derivation for redeals.
//!
//! A table keeps the seed it was created with. Every redeal shuffles with a
//! seed derived from that base seed and the deal number, so the whole history
//! of a table replays from one value.

/// Derive the shuffle seed for deal `deal_no` (0-based) of a table.
///
/// Deal 0 uses the base seed unchanged.
pub fn derive_redeal_seed(game_seed: u64, deal_no: u32) -> u64 {
    if deal_no == 0 {
        return game_seed;
    }
    // SplitMix64 finalizer over the combined input.
    let mut z = game_seed.wrapping_add((deal_no as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
