//! Rendaku: sequential voicing of the first mora of a non-initial compound element.
//!
//! 川 (かわ) in 小川 is read おがわ; 口 (くち) in 出口 is read でぐち.

/// Unvoiced → voiced pairs for the か, さ, た and は rows.
static VOICING: &[(char, char)] = &[
    ('か', 'が'),
    ('き', 'ぎ'),
    ('く', 'ぐ'),
    ('け', 'げ'),
    ('こ', 'ご'),
    ('さ', 'ざ'),
    ('し', 'じ'),
    ('す', 'ず'),
    ('せ', 'ぜ'),
    ('そ', 'ぞ'),
    ('た', 'だ'),
    ('ち', 'ぢ'),
    ('つ', 'づ'),
    ('て', 'で'),
    ('と', 'ど'),
    ('は', 'ば'),
    ('ひ', 'び'),
    ('ふ', 'ぶ'),
    ('へ', 'べ'),
    ('ほ', 'ぼ'),
];

fn voiced(c: char) -> Option<char> {
    VOICING
        .iter()
        .find(|&&(plain, _)| plain == c)
        .map(|&(_, v)| v)
}

/// Whether `c` has a voiced counterpart in the rendaku table.
pub fn can_voice(c: char) -> bool {
    voiced(c).is_some()
}

/// Voice the first character of a hiragana reading.
///
/// Readings whose first character is not voiceable (vowels, な/ま/や/ら/わ rows,
/// already-voiced kana, katakana) come back unchanged.
pub fn rendaku(reading: &str) -> String {
    let mut chars = reading.chars();
    match chars.next().and_then(voiced) {
        Some(v) => {
            let mut out = String::with_capacity(reading.len());
            out.push(v);
            out.push_str(chars.as_str());
            out
        }
        None => reading.to_string(),
    }
}
