use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Tiles that stand for two letters, keyed by the digit stored on the board
pub static DIGRAPH_TILES: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('1', "AN"),
        ('2', "ER"),
        ('3', "HE"),
        ('4', "IN"),
        ('5', "QU"),
        ('6', "TH"),
    ])
});

/// Check if a board symbol is a two-letter tile
pub fn is_encoded(symbol: char) -> bool {
    DIGRAPH_TILES.contains_key(&symbol)
}

/// Find the board symbol for a two-letter tile, e.g. "QU" -> '5'
pub fn encode(letters: &str) -> Option<char> {
    DIGRAPH_TILES
        .iter()
        .find(|(_, text)| **text == letters)
        .map(|(&symbol, _)| symbol)
}

/// Append the letters a symbol stands for to `out`
pub fn push_decoded(out: &mut String, symbol: char) {
    match DIGRAPH_TILES.get(&symbol) {
        Some(letters) => out.push_str(letters),
        None => out.push(symbol),
    }
}

/// Decode a sequence of board symbols into the word they spell
pub fn decode_word<I: IntoIterator<Item = char>>(symbols: I) -> String {
    let mut word = String::new();
    for symbol in symbols {
        push_decoded(&mut word, symbol);
    }
    word
}
