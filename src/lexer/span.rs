use crate::helpers::find_line_number_and_char_position;
use crate::lexer::tokens::TOKEN;

// start and end are byte offsets, end is exclusive
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub token: TOKEN,
    pub line_num: Option<(usize, usize)>
}

impl TOKEN {
    pub fn into_span(self, start: usize, end: usize) -> TokenSpan {
        TokenSpan {
            token: self,
            start,
            end,
            line_num: None
        }
    }
}

impl TokenSpan {
    pub fn line(&self) -> usize {
        self.line_num.map_or(0, |(line, _)| line)
    }
}

pub fn fill_line_nums(arr: Vec<TokenSpan>, buf: &String) -> Vec<TokenSpan> {
    arr.into_iter().map(|span| TokenSpan {
        line_num: Some(find_line_number_and_char_position(buf, span.start)),
        ..span
    }).collect::<Vec<TokenSpan>>()
}
