// src/sexp.rs
//! Minimal s-expression emission. Only what the binaries print: quoted
//! strings, space-separated lists of them, and dotted pairs.

use std::io::{self, Write};

/// Writes `s` double-quoted. `\` and `"` are escaped so the reader on the
/// other side gets the string back verbatim.
pub fn write_quoted(out: &mut impl Write, s: &str) -> io::Result<()> {
    out.write_all(b"\"")?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_all(b"\\\"")?,
            '\\' => out.write_all(b"\\\\")?,
            _ => write!(out, "{ch}")?,
        }
    }
    out.write_all(b"\"")
}

/// Writes the quoted items separated by single spaces, no delimiters around
/// the group. Callers supply the surrounding parens.
pub fn write_quoted_seq<'a>(
    out: &mut impl Write,
    items: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    let mut first = true;
    for item in items {
        if !first {
            out.write_all(b" ")?;
        }
        first = false;
        write_quoted(out, item)?;
    }
    Ok(())
}

/// Writes `("car" . "cdr")`.
pub fn write_pair(out: &mut impl Write, car: &str, cdr: &str) -> io::Result<()> {
    out.write_all(b"(")?;
    write_quoted(out, car)?;
    out.write_all(b" . ")?;
    write_quoted(out, cdr)?;
    out.write_all(b")")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(s: &str) -> String {
        let mut buf = Vec::new();
        write_quoted(&mut buf, s).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn quotes_plain_string() {
        assert_eq!(quoted("/tmp/a.txt"), "\"/tmp/a.txt\"");
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(quoted("a\"b"), "\"a\\\"b\"");
        assert_eq!(quoted("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn seq_is_space_separated() {
        let mut buf = Vec::new();
        write_quoted_seq(&mut buf, ["a", "b c"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a\" \"b c\"");
    }

    #[test]
    fn empty_seq_writes_nothing() {
        let mut buf = Vec::new();
        write_quoted_seq(&mut buf, std::iter::empty::<&str>()).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn pair_is_dotted() {
        let mut buf = Vec::new();
        write_pair(&mut buf, "M", "file1.txt").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "(\"M\" . \"file1.txt\")");
    }
}
