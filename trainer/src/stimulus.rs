//! Stimulus generation: symmetric and asymmetric 8×8 grids, recall locations.
//!
//! All draws go through [`RandomSource::uniform_int`] in a fixed order
//! (row-major for grids), so a scripted source reproduces a grid exactly.
//!
//! The asymmetric generator applies no correction. A grid whose 8 rows all
//! happen to be palindromes is kept as is; with 1/16 per row that happens with
//! probability (1/16)^8 ≈ 2.3e-10.

use crate::constants::*;
use crate::io::RandomSource;
use crate::types::{Cell, Grid, Location, Stimulus};

/// Draw one cell: `uniform_int(0, 1)`, 0 → Off, 1 → On.
#[inline(always)]
fn draw_cell(rng: &mut dyn RandomSource) -> Cell {
    Cell::from_draw(rng.uniform_int(0, 1))
}

/// Mirror-symmetric grid: 4 random cells per row, mirrored into columns 7..4.
/// Consumes 32 draws.
pub fn generate_symmetric(rng: &mut dyn RandomSource) -> Grid {
    let mut grid = Grid::new();
    for row in grid.cells.iter_mut() {
        for col in 0..STIMULUS_HALF {
            let cell = draw_cell(rng);
            row[col] = cell;
            row[STIMULUS_SIZE - 1 - col] = cell;
        }
    }
    grid
}

/// Fully random grid, 64 independent draws used unmodified.
pub fn generate_asymmetric(rng: &mut dyn RandomSource) -> Grid {
    let mut grid = Grid::new();
    for row in grid.cells.iter_mut() {
        for cell in row.iter_mut() {
            *cell = draw_cell(rng);
        }
    }
    grid
}

/// Uniform location in [0, 15].
///
/// Draws outside the range (only possible with a misbehaving source) are
/// clamped into it.
pub fn generate_location(rng: &mut dyn RandomSource) -> Location {
    let draw = rng.uniform_int(0, NUM_LOCATIONS as i32 - 1);
    let index = draw.clamp(0, NUM_LOCATIONS as i32 - 1) as usize;
    Location::new(index).unwrap_or_default()
}

/// Fair coin for the label (1 = symmetric), then the matching grid.
pub fn generate_stimulus(rng: &mut dyn RandomSource) -> Stimulus {
    let symmetric = rng.uniform_int(0, 1) == 1;
    let grid = if symmetric {
        generate_symmetric(rng)
    } else {
        generate_asymmetric(rng)
    };
    Stimulus { grid, symmetric }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandom;

    #[test]
    fn test_symmetric_mirrors_half_rows() {
        // Row r draws [1, 0, 0, 1] for even r, [0, 1, 1, 0] for odd r.
        let draws: Vec<i32> = (0..8)
            .flat_map(|r| if r % 2 == 0 { [1, 0, 0, 1] } else { [0, 1, 1, 0] })
            .collect();
        let mut rng = ScriptedRandom::new(draws);
        let grid = generate_symmetric(&mut rng);
        assert_eq!(grid.row_string(0), "*OO**OO*");
        assert_eq!(grid.row_string(1), "O**OO**O");
        assert!(grid.is_mirror_symmetric());
        assert_eq!(rng.requests().len(), 32);
        assert!(rng.requests().iter().all(|&r| r == (0, 1)));
    }

    #[test]
    fn test_asymmetric_uses_raw_draws() {
        let draws: Vec<i32> = (0..64).map(|i| (i * 7 % 3 == 0) as i32).collect();
        let mut rng = ScriptedRandom::new(draws.clone());
        let grid = generate_asymmetric(&mut rng);
        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(grid.get(r, c), Cell::from_draw(draws[r * 8 + c]));
            }
        }
        assert_eq!(rng.requests().len(), 64);
    }

    #[test]
    fn test_asymmetric_keeps_accidental_palindromes() {
        // Every row is the palindrome "*OO**OO*": no resampling happens.
        let draws: Vec<i32> = (0..8).flat_map(|_| [1, 0, 0, 1, 1, 0, 0, 1]).collect();
        let mut rng = ScriptedRandom::new(draws);
        let grid = generate_asymmetric(&mut rng);
        assert!(grid.is_mirror_symmetric());
        assert_eq!(rng.requests().len(), 64);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_generate_location() {
        let mut rng = ScriptedRandom::new([0, 15, 9]);
        assert_eq!(generate_location(&mut rng).index(), 0);
        assert_eq!(generate_location(&mut rng).index(), 15);
        assert_eq!(generate_location(&mut rng).index(), 9);
        assert_eq!(rng.requests(), &[(0, 15), (0, 15), (0, 15)]);
    }

    #[test]
    fn test_stimulus_label_follows_coin() {
        let mut rng = ScriptedRandom::new([1]);
        let stim = generate_stimulus(&mut rng);
        assert!(stim.symmetric);
        assert_eq!(rng.requests().len(), 1 + 32);

        let mut rng = ScriptedRandom::new([0]);
        let stim = generate_stimulus(&mut rng);
        assert!(!stim.symmetric);
        assert_eq!(rng.requests().len(), 1 + 64);
    }
}
