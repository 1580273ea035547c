pub mod char_literals {
    pub const BACKSPACE: char = '\u{0008}';
    pub const CHARACTER_TABULATION: char = '\u{0009}';
    pub const LINE_FEED: char = '\u{000A}';
    pub const LINE_TABULATION: char = '\u{000B}';
    pub const FORM_FEED: char = '\u{000C}';
    pub const CARRIAGE_RETURN: char = '\u{000D}';
    pub const SPACE: char = '\u{0020}';
    pub const NON_BREAKING_SPACE: char = '\u{00A0}';
    pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
    pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
    pub const LINE_SEPARATOR: char = '\u{2028}';
    pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';
    pub const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';
}

use self::char_literals::*;

/// `LineTerminator` of ECMA-262.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        LINE_FEED | CARRIAGE_RETURN | LINE_SEPARATOR | PARAGRAPH_SEPARATOR
    )
}

/// Unicode `Zs` category, excluding the ASCII space.
#[inline]
pub fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        NON_BREAKING_SPACE
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// `WhiteSpace` of ECMA-262.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        CHARACTER_TABULATION | LINE_TABULATION | FORM_FEED | SPACE | ZERO_WIDTH_NO_BREAK_SPACE
    ) || is_space_separator(c)
}
