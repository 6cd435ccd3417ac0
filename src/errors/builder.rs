#[derive(Debug, Clone, PartialEq)]
pub enum ErrorLevel {
    WARN,
    ERROR,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    LEXER,
    PARSER,
    RUNTIME,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub char: usize,
    pub end_char: Option<usize>,
    pub(crate) message: String,
    pub(crate) fixes: Vec<String>,
    pub(crate) level: ErrorLevel,
    pub(crate) cause: Option<String>,
    pub(crate) component: Component,
    // (line, column, optional (end line, end column)), filled in by the reporter
    pub(crate) location: (usize, usize, Option<(usize, usize)>),
}

impl Diagnostic {
    fn at(index: usize, component: Component) -> Diagnostic {
        Diagnostic {
            char: index,
            message: String::from("No error message provided."),
            fixes: vec![],
            level: ErrorLevel::ERROR,
            location: (0, 0, None),
            end_char: None,
            cause: None,
            component,
        }
    }

    pub fn lex(index: usize) -> Diagnostic {
        Diagnostic::at(index, Component::LEXER)
    }

    pub fn ast(index: usize) -> Diagnostic {
        Diagnostic::at(index, Component::PARSER)
    }

    pub fn runtime(index: usize) -> Diagnostic {
        Diagnostic::at(index, Component::RUNTIME)
    }

    pub fn cause<T: Into<String>>(&mut self, msg: T) -> &mut Self {
        self.cause = Some(msg.into());
        self
    }

    pub fn message<T: Into<String>>(&mut self, msg: T) -> &mut Self {
        self.message = msg.into();
        self
    }

    pub fn pot_fix<T: Into<String>>(&mut self, fix: T) -> &mut Self {
        self.fixes.push(fix.into());
        self
    }

    pub fn level(&mut self, lvl: ErrorLevel) -> &mut Self {
        self.level = lvl;
        self
    }

    pub fn _set_loc(&mut self, line: usize, pos: usize) -> &mut Self {
        self.location = (line, pos, None);
        self
    }

    pub fn _set_loc_ranged(
        &mut self,
        from_line: usize,
        from_pos: usize,
        to_line: usize,
        to_pos: usize,
    ) -> &mut Self {
        self.location = (from_line, from_pos, Some((to_line, to_pos)));
        self
    }

    pub fn set_end_char(&mut self, end: usize) -> &mut Self {
        self.end_char = Some(end);
        self
    }

    pub fn ok(&self) -> Self {
        self.clone()
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.level == ErrorLevel::ERROR
    }
}
