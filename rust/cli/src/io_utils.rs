use std::io::{self, BufRead};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, `Ok(None)` on EOF, or the read error. A line
/// that is not valid UTF-8 is consumed and reported as
/// [`io::ErrorKind::InvalidData`], so the caller can skip it and keep going.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use highcard_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Ok(Some(line)) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if stdin.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8(buf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Some(line.trim().to_string()))
}
