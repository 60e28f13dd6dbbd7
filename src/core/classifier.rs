use crate::core::tables::{DANDA, DOUBLE_DANDA, SCRIPT_BLOCK, SCRIPT_DIGITS};
use crate::core::types::{CharClass, Token};

/// Classifies one code point. Order matters: danda and the native digits sit
/// inside the script block and must be caught before the block check.
pub fn classify(c: char) -> CharClass {
    if c == DANDA || c == DOUBLE_DANDA {
        CharClass::ScriptPunctuation
    } else if SCRIPT_DIGITS.contains(&c) {
        CharClass::ScriptDigit
    } else if SCRIPT_BLOCK.contains(&c) {
        CharClass::ScriptLetter
    } else if c.is_alphabetic() {
        CharClass::LatinLetter
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else if matches!(c, '.' | ',' | ';' | ':' | '?' | '!' | '\'' | '"') {
        CharClass::Punctuation
    } else if matches!(c, '(' | ')' | '-') {
        CharClass::Bracket
    } else {
        CharClass::Other
    }
}

/// Splits text into maximal same-class runs. Lossless: the token texts
/// concatenate back to `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for c in text.chars() {
        let class = classify(c);
        match tokens.last_mut() {
            Some(last) if last.class == class => last.text.push(c),
            _ => tokens.push(Token::new(c.to_string(), class)),
        }
    }

    tokens
}

/// True if any code point lies in the Devanagari block.
pub fn contains_script(text: &str) -> bool {
    text.chars().any(|c| SCRIPT_BLOCK.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_precedence() {
        assert_eq!(classify('।'), CharClass::ScriptPunctuation);
        assert_eq!(classify('॥'), CharClass::ScriptPunctuation);
        assert_eq!(classify('५'), CharClass::ScriptDigit);
        assert_eq!(classify('क'), CharClass::ScriptLetter);
        assert_eq!(classify('्'), CharClass::ScriptLetter);
        assert_eq!(classify('é'), CharClass::LatinLetter);
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('?'), CharClass::Punctuation);
        assert_eq!(classify('('), CharClass::Bracket);
        assert_eq!(classify('@'), CharClass::Other);
    }

    #[test]
    fn groups_runs_by_class() {
        let tokens = tokenize("Hello हिंदी, १२3");
        let got: Vec<(&str, CharClass)> =
            tokens.iter().map(|t| (t.text.as_str(), t.class)).collect();
        assert_eq!(
            got,
            vec![
                ("Hello", CharClass::LatinLetter),
                (" ", CharClass::Whitespace),
                ("हिंदी", CharClass::ScriptLetter),
                (",", CharClass::Punctuation),
                (" ", CharClass::Whitespace),
                ("१२", CharClass::ScriptDigit),
                ("3", CharClass::Digit),
            ]
        );
    }

    #[test]
    fn punctuation_and_brackets_split() {
        let tokens = tokenize(".(");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn detects_script() {
        assert!(contains_script("abc क"));
        assert!(!contains_script("abc"));
    }
}
