/// Diacritic rows for the six pinyin vowels. Column `n` holds the
/// tone-`n+1` form of the row's bare vowel.
pub(crate) const TONE_ROWS: &[(char, [char; 4])] = &[
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

/// Vowel scan order when deciding which letter carries the tone mark:
/// a > e > o > i/u. `v` is the ASCII stand-in for `ü`.
pub(crate) const MARK_PRIORITY: &[char] = &['a', 'e', 'o', 'i', 'u', 'v'];
