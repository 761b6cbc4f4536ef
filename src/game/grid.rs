use rand::Rng;

use crate::{
    game::decoder,
    models::{Board, BoardError},
    utils::letters::get_cumulative_distribution,
};

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a random `size` x `size` board with weighted letter distribution
    pub fn generate(size: usize) -> Result<Board, BoardError> {
        Self::generate_with(size, &mut rand::rng())
    }

    pub fn generate_with(size: usize, rng: &mut impl Rng) -> Result<Board, BoardError> {
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, cumulative)| *cumulative);

        let mut rows = Vec::with_capacity(size);
        for _ in 0..size {
            let mut row = Vec::with_capacity(size);
            for _ in 0..size {
                row.push(Self::random_symbol(&cumulative_dist, total, rng));
            }
            rows.push(row);
        }

        Board::from_rows(rows)
    }

    fn random_symbol(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let letter = Self::random_letter(cumulative_dist, total, rng);

        // A lone Q is nearly unplayable, so it always comes as the QU tile
        if letter == 'Q' {
            return decoder::encode("QU").unwrap_or(letter);
        }
        letter
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_grid_generation() {
        let board = GridGenerator::generate(5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.positions().count(), 25);
    }

    #[test]
    fn test_generated_board_reparses() {
        let board = GridGenerator::generate(4).unwrap();
        let reparsed = Board::parse(&board.to_string(), 4).unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_never_places_a_lone_q() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = GridGenerator::generate_with(6, &mut rng).unwrap();
            assert!(board
                .positions()
                .all(|pos| board.get(pos) != Some('Q')));
        }
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let first = GridGenerator::generate_with(5, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = GridGenerator::generate_with(5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
        assert!(first.get(Position::new(4, 4)).is_some());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(GridGenerator::generate(0), Err(BoardError::Empty));
    }
}
