use frutinha_core::{spin_once, EngineParams, Paytable, SpinRng, Symbol};

#[test]
fn rng_repeatable() {
    let mut rng1 = SpinRng::from_seed([42u8; 32]);
    let mut rng2 = SpinRng::from_seed([42u8; 32]);
    assert_eq!(rng1.next_floats(10), rng2.next_floats(10));
}

#[test]
fn payout_scales_with_bet() {
    let table = Paytable::classic_default();
    assert_eq!(table.line_multiplier(&[Symbol::Bell; 3]), 200);

    let params = EngineParams::classic_default();
    let mut rng = SpinRng::from_seed([5u8; 32]);
    let out = spin_once(&mut rng, &params, 10);
    assert_eq!(out.payout, params.paytable.line_multiplier(&out.symbols) * 10);
    assert!(out.payout >= 0);
}

#[test]
fn rtp_simulation_smoke() {
    let params = EngineParams::classic_default();
    let mut rng = SpinRng::from_seed([11u8; 32]);
    let mut total_bet = 0i64;
    let mut total_payout = 0i64;
    for _ in 0..1000 {
        let out = spin_once(&mut rng, &params, 1);
        total_bet += 1;
        total_payout += out.payout;
    }
    let rtp = total_payout as f64 / total_bet as f64;
    // very loose bounds; the classic table is top-heavy and most spins lose
    assert!((0.0..50.0).contains(&rtp));
}
