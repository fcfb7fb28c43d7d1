use frutinha_core::{spin_once, EngineParams, SpinRng};

fn main() {
    // Example end-to-end spin
    let params = EngineParams::classic_default();
    let mut rng = SpinRng::from_entropy();
    let outcome = spin_once(&mut rng, &params, 10);
    let names: Vec<&str> = outcome.symbols.iter().map(|s| s.name()).collect();
    println!("line={:?} payout={}", names, outcome.payout);
}
