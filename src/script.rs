use std::io::{self, Write};

use crate::matcher::AddressMapping;
use crate::terraform::StateMove;

/// Bumped whenever the layout of the generated scripts changes.
pub const OUTPUT_FORMAT_VERSION: u32 = 2;

/// Writes a shell script that moves every `old -> new` pair in `matches`
/// within the state file at `state_path`.
///
/// Entries are emitted sorted by old address so that identical input always
/// yields an identical script.
pub fn write_script<W: Write>(
    matches: &AddressMapping,
    state_path: &str,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "#! /usr/bin/sh")?;
    writeln!(out, "# DO NOT EDIT. Generated by terravalet.")?;
    writeln!(out, "# terravalet_output_format={}", OUTPUT_FORMAT_VERSION)?;
    writeln!(out, "#")?;
    writeln!(out, "# This script will move {} items.", matches.len())?;
    writeln!(out)?;
    writeln!(out, "set -e")?;
    writeln!(out)?;

    let mv = StateMove::new(state_path);
    for (old, new) in matches {
        writeln!(out, "{}", mv.render(old, new))?;
    }

    out.flush()
}

/// Renders the script into a string.
pub fn render_script(matches: &AddressMapping, state_path: &str) -> String {
    let mut buf = Vec::new();
    write_script(matches, state_path, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}
