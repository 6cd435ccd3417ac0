#[derive(Debug, PartialEq, Clone)]
#[allow(non_camel_case_types)]
pub enum TOKEN {
    DECL_LET,
    DECL_CONST,
    DECL_VAR,
    TRUE,
    FALSE,
    KEYWORD_NULL,
    KEYWORD_UNDEFINED,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_PAREN,
    RIGHT_PAREN,
    EQ,
    SEMI_COLON,
    PERIOD,
    SUBTRACT,
    COMMA,
    NUMBER(u8),
    IDENTIFIER(String),
    STRING_LITERAL(String),
    COMMENT(String),
    COMMENT_MLINE(Vec<String>),
    WHITESPACE,
    NEWLINE,
    EOF,

    S2_NUM_LITERAL(f64), //S2_ prefix stands for stage 2 lexing
    S2_ASSIGN,
    S2_SPREAD_OP,
}

impl TOKEN {
    pub fn is_declaration(&self) -> bool {
        match self {
            TOKEN::DECL_LET | TOKEN::DECL_CONST | TOKEN::DECL_VAR => true,
            _ => false
        }
    }

    pub fn is_trivia(&self) -> bool {
        match self {
            TOKEN::WHITESPACE | TOKEN::NEWLINE | TOKEN::COMMENT(_) | TOKEN::COMMENT_MLINE(_) => true,
            _ => false
        }
    }

    pub fn is_static_value(&self) -> bool {
        match self {
            TOKEN::STRING_LITERAL(_) | TOKEN::S2_NUM_LITERAL(_) | TOKEN::TRUE | TOKEN::FALSE | TOKEN::KEYWORD_NULL | TOKEN::KEYWORD_UNDEFINED => true,
            _ => false
        }
    }

    pub fn get_ident_name(&self) -> Option<String> {
        match self {
            TOKEN::IDENTIFIER(name) => Some(name.clone()),
            _ => None
        }
    }

    pub fn is_num(&self) -> bool {
        match self {
            TOKEN::NUMBER(_) => true,
            _ => false
        }
    }

    pub fn keyword(word: &str) -> Option<TOKEN> {
        let tok = match word {
            "let" => TOKEN::DECL_LET,
            "const" => TOKEN::DECL_CONST,
            "var" => TOKEN::DECL_VAR,
            "true" => TOKEN::TRUE,
            "false" => TOKEN::FALSE,
            "null" => TOKEN::KEYWORD_NULL,
            "undefined" => TOKEN::KEYWORD_UNDEFINED,
            _ => return None
        };
        Some(tok)
    }

    // how the token reads in a diagnostic
    pub fn describe(&self) -> String {
        match self {
            TOKEN::DECL_LET => "`let`".into(),
            TOKEN::DECL_CONST => "`const`".into(),
            TOKEN::DECL_VAR => "`var`".into(),
            TOKEN::TRUE => "`true`".into(),
            TOKEN::FALSE => "`false`".into(),
            TOKEN::KEYWORD_NULL => "`null`".into(),
            TOKEN::KEYWORD_UNDEFINED => "`undefined`".into(),
            TOKEN::LEFT_BRACKET => "`[`".into(),
            TOKEN::RIGHT_BRACKET => "`]`".into(),
            TOKEN::LEFT_PAREN => "`(`".into(),
            TOKEN::RIGHT_PAREN => "`)`".into(),
            TOKEN::EQ | TOKEN::S2_ASSIGN => "`=`".into(),
            TOKEN::SEMI_COLON => "`;`".into(),
            TOKEN::PERIOD => "`.`".into(),
            TOKEN::SUBTRACT => "`-`".into(),
            TOKEN::COMMA => "`,`".into(),
            TOKEN::S2_SPREAD_OP => "`...`".into(),
            TOKEN::NUMBER(n) => format!("`{}`", n),
            TOKEN::S2_NUM_LITERAL(n) => format!("number `{}`", n),
            TOKEN::IDENTIFIER(name) => format!("identifier `{}`", name),
            TOKEN::STRING_LITERAL(s) => format!("string '{}'", s),
            TOKEN::COMMENT(_) | TOKEN::COMMENT_MLINE(_) => "comment".into(),
            TOKEN::WHITESPACE => "whitespace".into(),
            TOKEN::NEWLINE => "line break".into(),
            TOKEN::EOF => "end of file".into(),
        }
    }
}
