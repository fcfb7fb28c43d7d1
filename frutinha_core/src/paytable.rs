use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub symbol: Symbol,
    pub count: u8,
    pub multiplier: i64, // applied to the bet size
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paytable(pub Vec<PaytableEntry>);

impl Paytable {
    pub fn classic_default() -> Self {
        Self(vec![
            PaytableEntry {
                symbol: Symbol::Cherry,
                count: 3,
                multiplier: 4,
            },
            PaytableEntry {
                symbol: Symbol::Lemon,
                count: 3,
                multiplier: 10,
            },
            PaytableEntry {
                symbol: Symbol::Orange,
                count: 3,
                multiplier: 30,
            },
            PaytableEntry {
                symbol: Symbol::Plum,
                count: 3,
                multiplier: 50,
            },
            PaytableEntry {
                symbol: Symbol::Bell,
                count: 3,
                multiplier: 200,
            },
            PaytableEntry {
                symbol: Symbol::Bar,
                count: 3,
                multiplier: 3000,
            },
            PaytableEntry {
                symbol: Symbol::Seven,
                count: 3,
                multiplier: 10000,
            },
        ])
    }

    /// Multiplier for a drawn line. Only a full line of one symbol pays.
    pub fn line_multiplier(&self, line: &[Symbol]) -> i64 {
        let Some(&first) = line.first() else { return 0 };
        if !line.iter().all(|&s| s == first) {
            return 0;
        }
        self.0
            .iter()
            .find(|e| e.symbol == first && e.count as usize == line.len())
            .map(|e| e.multiplier)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_of_a_kind_pays() {
        let table = Paytable::classic_default();
        assert_eq!(table.line_multiplier(&[Symbol::Cherry; 3]), 4);
        assert_eq!(table.line_multiplier(&[Symbol::Seven; 3]), 10000);
    }

    #[test]
    fn mixed_line_pays_nothing() {
        let table = Paytable::classic_default();
        assert_eq!(
            table.line_multiplier(&[Symbol::Cherry, Symbol::Bar, Symbol::Cherry]),
            0
        );
        assert_eq!(table.line_multiplier(&[]), 0);
    }
}
