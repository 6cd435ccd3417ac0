use crate::iter_util::CommonIter;
use crate::lexer::{TOKEN, TokenSpan};
use crate::parser::errors::ParseError;

#[derive(Clone, Debug)]
pub struct TokenParserIter {
    inner: Vec<TokenSpan>,
    index: Option<usize>
}

impl CommonIter for TokenParserIter {
    fn next(&mut self) -> Option<TokenSpan> {
        let i = self.index.map_or(0, |x| x + 1);
        self.index = Some(i);
        self.inner.get(i).cloned()
    }
    fn peek(&self) -> Option<TokenSpan> {
        self.peek_i_n(1)
    }
}

impl TokenParserIter {
    pub fn wrap(stream: Vec<TokenSpan>) -> TokenParserIter {
        TokenParserIter {
            inner: stream,
            index: None
        }
    }

    pub fn next_skip_whitespace(&mut self) -> Option<TokenSpan> {
        self.skip_trivia();
        self.next()
    }

    // same as next_skip_whitespace but running out of tokens is a parse error
    pub fn next_significant(&mut self) -> Result<TokenSpan, ParseError> {
        match self.next_skip_whitespace() {
            Some(span) => Ok(span),
            None => Err(ParseError::UNEXPECTED_EOF(self.last_span()))
        }
    }

    pub fn expect(&mut self, token: TOKEN) -> Result<TokenSpan, ParseError> {
        let span = self.next_significant()?;
        if span.token != token {
            return Err(ParseError::EXPECTED_ONEOF(span, vec![token]))
        }
        Ok(span)
    }

    fn peek_i_n(&self, n: isize) -> Option<TokenSpan> {
        let index = self.index.map_or(n - 1, |x| x as isize + n);
        if index < 0 {
            return None
        }
        self.inner.get(index as usize).cloned()
    }

    pub fn peek_skip_whitespace(&self) -> Option<TokenSpan> {
        let mut n = 1;
        while let Some(span) = self.peek_i_n(n) {
            if !span.token.is_trivia() {
                return Some(span)
            }
            n += 1;
        }
        None
    }

    // true when a line break sits between the current token and the next significant one
    pub fn line_break_ahead(&self) -> bool {
        let mut n = 1;
        while let Some(span) = self.peek_i_n(n) {
            match span.token {
                TOKEN::NEWLINE => return true,
                TOKEN::COMMENT_MLINE(_) if self.spans_lines(&span) => return true,
                ref t if t.is_trivia() => n += 1,
                _ => return false
            }
        }
        false
    }

    fn spans_lines(&self, span: &TokenSpan) -> bool {
        let end_line = self.inner.iter()
            .find(|x| x.start >= span.end)
            .and_then(|x| x.line_num)
            .map(|(line, _)| line);
        end_line.map_or(false, |line| line > span.line())
    }

    // end offset of the token the iterator is on
    pub fn current_end(&self) -> usize {
        self.index.and_then(|i| self.inner.get(i)).map_or(0, |x| x.end)
    }

    fn last_span(&self) -> TokenSpan {
        self.inner.last().cloned().unwrap_or_else(|| TOKEN::EOF.into_span(0, 0))
    }
}
