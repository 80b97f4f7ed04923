use std::io::{BufRead, Write};

/// Read one line and return its first character, lowercased.
///
/// Returns `None` when the line is empty or the input stream is closed.
/// Read errors are folded into `None` as well; a bootstrap prompt has no
/// sensible recovery from a broken stdin.
pub fn read_first_char(reader: &mut impl BufRead) -> Option<char> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => line.trim().to_lowercase().chars().next(),
    }
}

/// Show a yes/no prompt and gate on the answer.
///
/// Only a leading 'y' (any case) is affirmative; anything else, including
/// closed input, is a decline. There is no retry loop.
pub fn confirm(prompt: &str, reader: &mut impl BufRead, writer: &mut impl Write) -> bool {
    let _ = write!(writer, "{prompt} ");
    let _ = writer.flush();
    read_first_char(reader) == Some('y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn first_char_is_lowercased() {
        let mut input = Cursor::new("Yes please\n");
        assert_eq!(read_first_char(&mut input), Some('y'));
    }

    #[test]
    fn empty_line_yields_none() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_first_char(&mut input), None);
    }

    #[test]
    fn closed_input_yields_none() {
        let mut input = Cursor::new("");
        assert_eq!(read_first_char(&mut input), None);
    }

    #[test]
    fn confirm_accepts_only_leading_y() {
        for (answer, expected) in [("y\n", true), ("Y\n", true), ("yes\n", true), ("n\n", false), ("sure\n", false), ("", false)] {
            let mut input = Cursor::new(answer);
            let mut output = Vec::new();
            assert_eq!(confirm("Continue (Y/n)?", &mut input, &mut output), expected, "answer {answer:?}");
        }
    }

    #[test]
    fn confirm_writes_the_prompt() {
        let mut input = Cursor::new("n\n");
        let mut output = Vec::new();
        confirm("Continue (Y/n)?", &mut input, &mut output);
        assert_eq!(String::from_utf8(output).expect("utf-8"), "Continue (Y/n)? ");
    }
}
