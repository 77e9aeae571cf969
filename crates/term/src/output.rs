//! Frame text output.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::QueueableCommand;

/// Queue `label: value` with the value in bold, followed by a newline.
///
/// Nothing is flushed; the loop driver flushes the sink once per frame.
pub fn status_line<W, V>(out: &mut W, label: &str, value: V) -> io::Result<()>
where
    W: Write + ?Sized,
    V: Display,
{
    out.queue(Print(label))?;
    out.queue(Print(": "))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(value))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\n"))?;
    Ok(())
}
