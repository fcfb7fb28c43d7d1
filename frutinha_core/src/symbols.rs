use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cherry,
    Lemon,
    Orange,
    Plum,
    Bell,
    Bar,
    Seven,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::Cherry,
        Symbol::Lemon,
        Symbol::Orange,
        Symbol::Plum,
        Symbol::Bell,
        Symbol::Bar,
        Symbol::Seven,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Cherry => "Cherry",
            Symbol::Lemon => "Lemon",
            Symbol::Orange => "Orange",
            Symbol::Plum => "Plum",
            Symbol::Bell => "Bell",
            Symbol::Bar => "Bar",
            Symbol::Seven => "Seven",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    pub symbols: Vec<Symbol>,
    pub weights: Vec<f64>, // stationary draw probability per symbol, same order
    pub num_reels: usize,
}

impl MachineConfig {
    pub fn classic_default() -> Self {
        Self {
            symbols: Symbol::ALL.to_vec(),
            weights: vec![0.30, 0.25, 0.16, 0.13, 0.10, 0.035, 0.025],
            num_reels: 3,
        }
    }

    /// Running sums of `weights`; the last entry is the total mass.
    pub fn cumulative_weights(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.weights
            .iter()
            .map(|w| {
                acc += w;
                acc
            })
            .collect()
    }

    pub fn symbol_names(&self) -> Vec<String> {
        self.symbols.iter().map(|s| s.name().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_cover_all_symbols() {
        let machine = MachineConfig::classic_default();
        assert_eq!(machine.symbols.len(), machine.weights.len());
        let total: f64 = machine.weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cumulative_weights_end_at_total_mass() {
        let machine = MachineConfig::classic_default();
        let cum = machine.cumulative_weights();
        assert_eq!(cum.len(), machine.weights.len());
        assert!((cum.last().copied().unwrap() - 1.0).abs() < 1e-9);
    }
}
