// Stage 1: splits the input into single char tokens, words (identifiers and keywords), string literals, comments and individual digits
// Stage 2: combines digit runs into numeric literals, `...` into the spread operator, `=` into assignment and collapses whitespace runs

use crate::iter_util::CommonIter;
use crate::lexer::error::LexError;
use crate::lexer::iter::{CharIterator, TokenIter};
use crate::lexer::span::{fill_line_nums, TokenSpan};
use crate::lexer::tokens::TOKEN;

fn is_ident_start(char: char) -> bool {
    char.is_alphabetic() || char == '_' || char == '$'
}

fn is_ident_part(char: char) -> bool {
    is_ident_start(char) || char.is_ascii_digit()
}

pub fn tokenize(input: String) -> Result<Vec<TokenSpan>, LexError> {
    let len = input.len();
    let mut iter = CharIterator::wrap_string(&input);
    let mut token_stream = vec![];
    while let Some(char) = iter.next() {
        let start = iter.current_offset();
        let next = iter.peek_next();
        if char == '"' || char == '\'' {
            let literal = iter.eat_string_literal(char)?;
            token_stream.push(TOKEN::STRING_LITERAL(literal).into_span(start, iter.offset_after()));
            continue
        }
        if char == '/' && next == Some('/') {
            iter.next(); //drop next /
            let comment = iter.eat_until_newline();
            token_stream.push(TOKEN::COMMENT(comment.trim().to_string()).into_span(start, iter.offset_after()));
            continue
        }
        if char == '/' && next == Some('*') {
            iter.next(); //drop the *
            let eaten = iter.eat_block_comment().ok_or_else(|| {
                LexError::UNTERMINATED_COMMENT(TOKEN::COMMENT_MLINE(vec![]).into_span(start, start + 2))
            })?;
            let collected = eaten.split('\n').map(|x| x.trim().to_string()).filter(|x| !x.is_empty()).collect();
            token_stream.push(TOKEN::COMMENT_MLINE(collected).into_span(start, iter.offset_after()));
            continue
        }
        if let Some(digit) = char.to_digit(10) {
            token_stream.push(TOKEN::NUMBER(digit as u8).into_span(start, iter.offset_after()));
            continue
        }
        if is_ident_start(char) {
            let word = iter.eat_while(is_ident_part);
            let token = TOKEN::keyword(&word).unwrap_or(TOKEN::IDENTIFIER(word));
            token_stream.push(token.into_span(start, iter.offset_after()));
            continue
        }

        let matched_single = match char {
            '(' => Some(TOKEN::LEFT_PAREN),
            ')' => Some(TOKEN::RIGHT_PAREN),
            '[' => Some(TOKEN::LEFT_BRACKET),
            ']' => Some(TOKEN::RIGHT_BRACKET),
            '.' => Some(TOKEN::PERIOD),
            ';' => Some(TOKEN::SEMI_COLON),
            '-' => Some(TOKEN::SUBTRACT),
            '=' => Some(TOKEN::EQ),
            ',' => Some(TOKEN::COMMA),
            '\n' => Some(TOKEN::NEWLINE),
            c if c.is_whitespace() => Some(TOKEN::WHITESPACE),
            _ => None,
        };
        match matched_single {
            Some(token) => token_stream.push(token.into_span(start, iter.offset_after())),
            None => return Err(LexError::UNEXPECTED_CHAR(start, char))
        }
    }
    token_stream.push(TOKEN::EOF.into_span(len, len));
    let stage_2 = tokenize_stage_2(token_stream)?;
    Ok(fill_line_nums(stage_2, &input))
}

fn tokenize_stage_2(stream: Vec<TokenSpan>) -> Result<Vec<TokenSpan>, LexError> {
    let mut iter = TokenIter::wrap(stream);
    let mut tokens = vec![];
    while let Some(span) = iter.next() {
        if let TOKEN::NUMBER(num) = span.token {
            let mut literal = num.to_string();
            let mut end = span.end;
            let mut is_float = false;
            while let Some(next) = iter.peek() {
                match next.token {
                    TOKEN::NUMBER(digit) => literal.push_str(&digit.to_string()),
                    // only a period followed by a digit continues the literal, `1.` alone is left to the parser
                    TOKEN::PERIOD if !is_float && iter.peek_n(2).map_or(false, |x| x.token.is_num()) => {
                        is_float = true;
                        literal.push('.');
                    }
                    _ => break
                }
                end = next.end;
                iter.next();
            }
            let parsed = literal.parse::<f64>()
                .map_err(|_| LexError::MALFORMED_NUMBER(span.clone(), literal.clone()))?;
            tokens.push(TOKEN::S2_NUM_LITERAL(parsed).into_span(span.start, end));
            continue
        }

        if span.token == TOKEN::WHITESPACE { //elide whitespaces
            let mut end = span.end;
            while let Some(next) = iter.peek() {
                if next.token != TOKEN::WHITESPACE {
                    break
                }
                end = next.end;
                iter.next();
            }
            tokens.push(TOKEN::WHITESPACE.into_span(span.start, end));
            continue
        }

        if span.token == TOKEN::EQ {
            tokens.push(TOKEN::S2_ASSIGN.into_span(span.start, span.end));
            continue
        }

        if span.token == TOKEN::PERIOD {
            let next = iter.peek_n(1);
            let next_2 = iter.peek_n(2);
            let is_period = |x: &Option<TokenSpan>| x.as_ref().map_or(false, |x| x.token == TOKEN::PERIOD);
            if is_period(&next) && is_period(&next_2) {
                iter.seek(2); //drop both
                let end = next_2.map_or(span.end, |x| x.end);
                tokens.push(TOKEN::S2_SPREAD_OP.into_span(span.start, end));
                continue
            }
        }

        tokens.push(span)
    }
    Ok(tokens)
}
