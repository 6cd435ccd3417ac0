use crate::lexer::TokenSpan;

pub trait CommonIter {
    fn next(&mut self) -> Option<TokenSpan>;
    fn peek(&self) -> Option<TokenSpan>;

    // whitespace, line breaks and comments carry no meaning past the lexer
    fn skip_trivia(&mut self) {
        while let Some(peeked) = self.peek() {
            if !peeked.token.is_trivia() {
                return
            }
            self.next();
        }
    }
}
