use crate::errors::Diagnostic;
use crate::helpers::find_line_number_and_char_position;

#[derive(Debug)]
pub struct ErrorReporter<'a> {
    pub(crate) file: &'a String,
    pub(crate) file_name: String,
    pub(crate) errors: Vec<Diagnostic>,
}

impl ErrorReporter<'_> {
    pub fn add<T: Into<Diagnostic>>(&mut self, error: T) {
        let mut error = error.into();
        let (line_pos, char_pos) = find_line_number_and_char_position(self.file, error.char);
        match error.end_char {
            Some(end) => {
                let (end_l_pos, end_c_pos) = find_line_number_and_char_position(self.file, end);
                error._set_loc_ranged(line_pos, char_pos, end_l_pos, end_c_pos);
            }
            None => {
                error._set_loc(line_pos, char_pos);
            }
        }
        self.errors.push(error);
    }

    pub fn for_file(file_name: String, content: &String) -> ErrorReporter {
        ErrorReporter {
            file_name,
            file: content,
            errors: vec![],
        }
    }

    // warnings alone do not fail a run
    pub fn is_ok(&self) -> bool {
        !self.errors.iter().any(|x| x.is_error())
    }
}
