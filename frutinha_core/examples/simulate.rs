use frutinha_core::{spin_once, EngineParams, SpinRng};

// Batch RTP estimate: spin N times at a fixed bet and report the return.

fn main() {
    let spins: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);
    let bet = 1i64;

    let params = EngineParams::classic_default();
    let mut rng = SpinRng::from_entropy();

    let mut total_payout = 0i64;
    let mut wins = 0u64;
    for _ in 0..spins {
        let out = spin_once(&mut rng, &params, bet);
        if out.payout > 0 {
            wins += 1;
        }
        total_payout += out.payout;
    }

    let total_bet = spins as i64 * bet;
    println!(
        "spins={} wins={} total_bet={} total_payout={} rtp={:.4}",
        spins,
        wins,
        total_bet,
        total_payout,
        total_payout as f64 / total_bet as f64
    );
}
