// 1-based (line, column) of a byte offset. (0, 0) when the offset is past the end or not on a char boundary
pub fn find_line_number_and_char_position(file: &str, byte_index: usize) -> (usize, usize) {
    if byte_index > file.len() {
        return (0, 0);
    }

    let mut line_number = 1;
    let mut char_position = 1;

    for (current_index, c) in file.char_indices() {
        if current_index == byte_index {
            return (line_number, char_position);
        }
        if current_index > byte_index {
            return (0, 0);
        }
        if c == '\n' {
            line_number += 1;
            char_position = 0;
        }
        char_position += 1;
    }

    // offset right behind the last char
    (line_number, char_position)
}

pub fn lineify(file: &str) -> Vec<String> {
    file.split('\n').map(|line| line.trim_end_matches('\r').to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_position_on_later_line() {
        let file = "ab\ncd";
        assert_eq!(find_line_number_and_char_position(file, 0), (1, 1));
        assert_eq!(find_line_number_and_char_position(file, 4), (2, 2));
        assert_eq!(find_line_number_and_char_position(file, 5), (2, 3));
        assert_eq!(find_line_number_and_char_position(file, 6), (0, 0));
    }

    #[test]
    fn should_count_columns_in_chars() {
        let file = "é=1";
        assert_eq!(find_line_number_and_char_position(file, 2), (1, 2));
        assert_eq!(find_line_number_and_char_position(file, 1), (0, 0));
    }

    #[test]
    fn should_split_lines() {
        assert_eq!(lineify("a\r\nb\n"), vec!["a".to_string(), "b".to_string(), "".to_string()]);
    }
}
