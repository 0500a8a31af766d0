use crate::error::{PwgenError, Result};
use crate::generator::Password;
use std::io::Write;

/// How generated passwords are laid out on the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    OneLine,
    Columns { pw_length: usize, screen_width: usize },
}

impl Layout {
    pub fn new(one_line: bool, pw_length: usize, screen_width: usize) -> Self {
        if one_line {
            Self::OneLine
        } else {
            Self::Columns {
                pw_length,
                screen_width,
            }
        }
    }

    fn per_row(&self) -> Option<usize> {
        match *self {
            Self::OneLine => None,
            Self::Columns {
                pw_length,
                screen_width,
            } => Some((screen_width / pw_length.max(1)).max(1)),
        }
    }
}

/// Writes every password followed by a space, or by a newline when it closes
/// a row, and makes sure the output ends with a newline. Stops at the first
/// generation or write error.
pub fn render<I, W>(passwords: I, layout: Layout, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = Result<Password>>,
    W: Write,
{
    let per_row = layout.per_row();
    let mut ended = true;

    for (i, password) in passwords.into_iter().enumerate() {
        let password = password?;
        out.write_all(password.as_bytes()).map_err(PwgenError::Write)?;

        ended = per_row.is_some_and(|w| (i + 1) % w == 0);
        let separator: &[u8] = if ended { b"\n" } else { b" " };
        out.write_all(separator).map_err(PwgenError::Write)?;
    }

    if !ended {
        out.write_all(b"\n").map_err(PwgenError::Write)?;
    }
    out.flush().map_err(PwgenError::Write)
}
