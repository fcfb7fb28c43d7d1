use crate::{
    paytable::Paytable,
    rng::SpinRng,
    symbols::{MachineConfig, Symbol},
};

#[derive(Debug, Clone)]
pub struct EngineParams {
    pub machine: MachineConfig,
    pub paytable: Paytable,
}

impl EngineParams {
    pub fn classic_default() -> Self {
        Self {
            machine: MachineConfig::classic_default(),
            paytable: Paytable::classic_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpinOutcome {
    pub symbols: Vec<Symbol>, // one per reel
    pub payout: i64,
}

/// Draw one symbol per reel: a uniform float per reel located in the
/// cumulative weight table (left insertion point).
pub fn draw_line(rng: &mut SpinRng, machine: &MachineConfig) -> Vec<Symbol> {
    let cum = machine.cumulative_weights();
    let last = machine.symbols.len().saturating_sub(1);
    rng.next_floats(machine.num_reels)
        .into_iter()
        .map(|f| {
            let idx = cum.partition_point(|&c| c < f);
            machine.symbols[idx.min(last)]
        })
        .collect()
}

pub fn spin_once(rng: &mut SpinRng, params: &EngineParams, bet_size: i64) -> SpinOutcome {
    let symbols = draw_line(rng, &params.machine);
    let payout = params.paytable.line_multiplier(&symbols) * bet_size;
    SpinOutcome { symbols, payout }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_deterministic() {
        let params = EngineParams::classic_default();
        let mut rng1 = SpinRng::from_seed([3u8; 32]);
        let mut rng2 = SpinRng::from_seed([3u8; 32]);
        let out1 = spin_once(&mut rng1, &params, 10);
        let out2 = spin_once(&mut rng2, &params, 10);
        assert_eq!(out1.symbols, out2.symbols);
        assert_eq!(out1.payout, out2.payout);
    }

    #[test]
    fn test_draw_line_length_matches_reels() {
        let machine = MachineConfig::classic_default();
        let mut rng = SpinRng::from_seed([9u8; 32]);
        let line = draw_line(&mut rng, &machine);
        assert_eq!(line.len(), machine.num_reels);
        for s in line {
            assert!(machine.symbols.contains(&s));
        }
    }
}
