//! Option lettering.

/// Letter label for the option at `index` (0-based).
///
/// Indices 0 to 25 map to `a` through `z`. Past that, labels continue in
/// bijective base 26 the way spreadsheet columns do: `aa`, `ab`, ... `zz`,
/// `aaa`. Lettering never runs into non-letter characters.
pub fn option_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}
