use crate::iter_util::CommonIter;
use crate::lexer::error::LexError;
use crate::lexer::span::TokenSpan;
use crate::lexer::tokens::TOKEN;

pub struct CharIterator {
    inner: Vec<(usize, char)>,
    index: Option<usize>,
    len: usize
}

impl CharIterator {
    pub fn wrap_string(str: &str) -> CharIterator {
        CharIterator {
            index: None,
            inner: str.char_indices().collect(),
            len: str.len()
        }
    }

    pub fn next(&mut self) -> Option<char> {
        self.index = Some(self.index.map_or(0, |x| x + 1));
        self.current()
    }

    fn current(&self) -> Option<char> {
        self.inner.get(self.index?).map(|(_, c)| *c)
    }

    pub fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    // peek_nth(1) is the char right after the current one
    fn peek_nth(&self, n: usize) -> Option<char> {
        let index = self.index.map_or(n - 1, |x| x + n);
        self.inner.get(index).map(|(_, c)| *c)
    }

    // byte offset of the char we are currently on
    pub fn current_offset(&self) -> usize {
        self.index.and_then(|i| self.inner.get(i)).map_or(self.len, |(offset, _)| *offset)
    }

    // byte offset right behind the current char
    pub fn offset_after(&self) -> usize {
        self.index.and_then(|i| self.inner.get(i)).map_or(self.len, |(offset, c)| offset + c.len_utf8())
    }

    // assumption: the iterator is ON the opening quote
    pub fn eat_string_literal(&mut self, until: char) -> Result<String, LexError> {
        let start = self.current_offset();
        let unterminated = || LexError::UNTERMINATED_STRING(TOKEN::STRING_LITERAL(String::new()).into_span(start, start + 1), until);
        let mut str = String::new();
        while let Some(char) = self.next() {
            if char == until {
                return Ok(str)
            }
            if char == '\n' {
                return Err(unterminated())
            }
            if char == '\\' {
                let escape_start = self.current_offset();
                let escaped = self.next().ok_or_else(unterminated)?;
                let unescaped = match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'v' => '\u{b}',
                    '0' => '\0',
                    'x' => self.eat_hex_digits(2).and_then(char::from_u32)
                        .ok_or_else(|| LexError::INVALID_ESCAPE(escape_start, self.offset_after()))?,
                    'u' => self.eat_unicode_escape()
                        .ok_or_else(|| LexError::INVALID_ESCAPE(escape_start, self.offset_after()))?,
                    '\n' => continue, //line continuation
                    other => other
                };
                str.push(unescaped);
                continue
            }
            str.push(char);
        }
        Err(unterminated())
    }

    fn eat_hex_digits(&mut self, count: usize) -> Option<u32> {
        let mut code = 0;
        for _ in 0..count {
            let digit = self.peek_next()?.to_digit(16)?;
            self.next();
            code = code * 16 + digit;
        }
        Some(code)
    }

    // assumption: the iterator is ON the u of \uXXXX or \u{X...}
    fn eat_unicode_escape(&mut self) -> Option<char> {
        let mut code = if self.peek_next() == Some('{') {
            self.next();
            let mut code: u32 = 0;
            let mut digits = 0;
            loop {
                let char = self.peek_next()?;
                self.next();
                if char == '}' {break}
                code = code.checked_mul(16)?.checked_add(char.to_digit(16)?)?;
                digits += 1;
            }
            if digits == 0 {
                return None
            }
            code
        } else {
            self.eat_hex_digits(4)?
        };
        // a high surrogate only makes a char together with the low half that follows it
        if (0xD800..0xDC00).contains(&code) {
            if self.peek_nth(1) != Some('\\') || self.peek_nth(2) != Some('u') {
                return None
            }
            self.next();
            self.next();
            let low = self.eat_hex_digits(4)?;
            if !(0xDC00..0xE000).contains(&low) {
                return None
            }
            code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
        }
        char::from_u32(code)
    }

    pub fn eat_until_newline(&mut self) -> String {
        let mut str = String::new();
        while let Some(char) = self.peek_next() {
            if char == '\n' {break}
            self.next();
            str.push(char);
        }
        str
    }

    // assumption: the iterator is ON the * of the opening /*
    pub fn eat_block_comment(&mut self) -> Option<String> {
        let mut str = String::new();
        while let Some(char) = self.next() {
            if char == '*' && self.peek_next() == Some('/') {
                self.next(); //drop the trailing /
                return Some(str)
            }
            str.push(char);
        }
        None
    }

    // starts with the current char, stops before the first char `pred` rejects
    pub fn eat_while<F>(&mut self, pred: F) -> String
        where F: Fn(char) -> bool
    {
        let mut str = String::new();
        if let Some(char) = self.current() {
            str.push(char);
        }
        while let Some(char) = self.peek_next() {
            if !pred(char) {break}
            self.next();
            str.push(char);
        }
        str
    }
}

pub struct TokenIter {
    tokens: Vec<TokenSpan>,
    index: Option<usize>
}

impl CommonIter for TokenIter {
    fn next(&mut self) -> Option<TokenSpan> {
        self.index = Some(self.index.map_or(0, |x| x + 1));
        self.tokens.get(self.index?).cloned()
    }

    fn peek(&self) -> Option<TokenSpan> {
        self.peek_n(1)
    }
}

impl TokenIter {
    pub fn wrap(tokens: Vec<TokenSpan>) -> TokenIter {
        TokenIter {
            tokens,
            index: None
        }
    }

    pub fn peek_n(&self, n: usize) -> Option<TokenSpan> {
        let next = self.index.map_or(n.checked_sub(1)?, |x| x + n);
        self.tokens.get(next).cloned()
    }

    pub fn seek(&mut self, n: isize) {
        self.index = Some(((self.index.unwrap_or(0) as isize) + n) as usize)
    }
}
