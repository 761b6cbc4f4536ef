use once_cell::sync::Lazy;

/// Letter frequency distribution for English (approximate)
/// Used for weighted random generation
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('E', 12.70),
        ('T', 9.05),
        ('A', 8.16),
        ('O', 7.50),
        ('I', 6.96),
        ('N', 6.74),
        ('S', 6.32),
        ('H', 6.09),
        ('R', 5.98),
        ('D', 4.25),
        ('L', 4.02),
        ('C', 2.78),
        ('U', 2.75),
        ('M', 2.40),
        ('W', 2.36),
        ('F', 2.22),
        ('G', 2.01),
        ('Y', 1.97),
        ('P', 1.92),
        ('B', 1.49),
        ('V', 0.97),
        ('K', 0.77),
        ('J', 0.15),
        ('X', 0.15),
        ('Q', 0.09),
        ('Z', 0.07),
    ]
});

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}
