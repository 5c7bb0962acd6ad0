use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Distinct deterministic stream per (run seed, server id). The multiplier
/// spreads adjacent ids across the seed space before they hit the cipher.
pub(super) fn server_rng(seed: u64, server_id: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed ^ u64::from(server_id).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

pub(super) fn sample_cpu(rng: &mut impl Rng) -> f64 {
    round_two_decimals(rng.gen_range(10.0..=90.0))
}

pub(super) fn sample_mem(rng: &mut impl Rng) -> f64 {
    round_two_decimals(rng.gen_range(20.0..=95.0))
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{round_two_decimals, server_rng};

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_two_decimals(10.004), 10.0);
        assert_eq!(round_two_decimals(89.996), 90.0);
        assert_eq!(round_two_decimals(42.125), 42.13);
    }

    #[test]
    fn same_inputs_give_same_stream() {
        use rand::RngCore;

        let mut a = server_rng(7, 3);
        let mut b = server_rng(7, 3);
        assert_eq!(a.next_u64(), b.next_u64());

        let mut c = server_rng(7, 4);
        assert_ne!(server_rng(7, 3).next_u64(), c.next_u64());
    }
}
