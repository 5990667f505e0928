/// Augmented system over GF(2): each row is `coefficients | rhs`.
pub struct LinearSystem {
    rows: Vec<Vec<bool>>,
    variables: usize,
}

impl LinearSystem {
    pub fn new(variables: usize) -> Self {
        LinearSystem {
            rows: Vec::new(),
            variables,
        }
    }

    pub fn add_equation(&mut self, coefficients: impl IntoIterator<Item = usize>, rhs: bool) {
        let mut row = vec![false; self.variables + 1];
        for c in coefficients {
            row[c] ^= true;
        }
        row[self.variables] = rhs;
        self.rows.push(row);
    }

    /// Reduced row echelon elimination. Returns one solution with every free
    /// variable set to false, or `None` if the system is inconsistent.
    pub fn solve(mut self) -> Option<Vec<bool>> {
        let n = self.variables;
        let mut pivots: Vec<usize> = Vec::new();
        let mut rank = 0;

        for col in 0..n {
            let Some(found) = (rank..self.rows.len()).find(|&r| self.rows[r][col]) else {
                continue;
            };
            self.rows.swap(rank, found);

            let pivot_row = self.rows[rank].clone();
            for (r, row) in self.rows.iter_mut().enumerate() {
                if r != rank && row[col] {
                    for (a, b) in row.iter_mut().zip(&pivot_row) {
                        *a ^= *b;
                    }
                }
            }
            pivots.push(col);
            rank += 1;
        }

        // 0 = 1 left over
        if self.rows[rank..].iter().any(|row| row[n]) {
            return None;
        }

        let mut solution = vec![false; n];
        for (r, &col) in pivots.iter().enumerate() {
            solution[col] = self.rows[r][n];
        }
        Some(solution)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solves_simple_system() {
        // a ^ b = 1, b = 1
        let mut system = LinearSystem::new(2);
        system.add_equation([0, 1], true);
        system.add_equation([1], true);
        assert_eq!(system.solve(), Some(vec![false, true]));
    }

    #[test]
    fn detects_inconsistency() {
        let mut system = LinearSystem::new(1);
        system.add_equation([0], true);
        system.add_equation([0], false);
        assert_eq!(system.solve(), None);
    }

    #[test]
    fn free_variables_default_to_false() {
        let mut system = LinearSystem::new(3);
        system.add_equation([0, 2], true);
        assert_eq!(system.solve(), Some(vec![true, false, false]));
    }
}
