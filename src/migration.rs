use std::io::{BufRead, Write};

use crate::error::{Direction, TerravaletError};
use crate::matcher::{Matches, match_addresses};
use crate::script::write_script;
use crate::terraform::parse;

/// Default state file for both source and destination of the moves.
pub const DEFAULT_LOCAL_STATE: &str = "local.tfstate";

/// Parses `plan`, matches old and new addresses and writes the up and down
/// scripts. The up script is written completely before the down one.
pub fn generate<R, U, D>(
    plan: R,
    state_path: &str,
    up: &mut U,
    down: &mut D,
) -> Result<Matches, TerravaletError>
where
    R: BufRead,
    U: Write,
    D: Write,
{
    let changes = parse(plan)?;
    let matches = match_addresses(&changes.create, &changes.destroy);

    tracing::info!(
        moves = matches.len(),
        unmatched_destroy = matches.unmatched_destroy.len(),
        unmatched_create = matches.unmatched_create.len(),
        "addresses matched"
    );

    write_script(&matches.up, state_path, up).map_err(|source| TerravaletError::Output {
        direction: Direction::Up,
        source,
    })?;
    write_script(&matches.down, state_path, down).map_err(|source| {
        TerravaletError::Output {
            direction: Direction::Down,
            source,
        }
    })?;

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    const PLAN: &str = "\
Terraform will perform the following actions:

  # module.ci.aws_instance.docker will be destroyed
  - resource \"aws_instance\" \"docker\" {
    }

  # aws_instance.docker will be created
  + resource \"aws_instance\" \"docker\" {
    }

  # data.aws_ami.ubuntu will be read during apply

Plan: 1 to add, 0 to change, 1 to destroy.
";

    #[test]
    fn test_generate_writes_up_and_down() {
        let mut up = Vec::new();
        let mut down = Vec::new();
        let matches = generate(Cursor::new(PLAN), "local.tfstate", &mut up, &mut down).unwrap();

        assert_eq!(matches.len(), 1);
        let up = String::from_utf8(up).unwrap();
        let down = String::from_utf8(down).unwrap();
        assert!(up.contains("    'module.ci.aws_instance.docker' \\\n    'aws_instance.docker'\n"));
        assert!(down.contains("    'aws_instance.docker' \\\n    'module.ci.aws_instance.docker'\n"));
    }

    #[test]
    fn test_generate_parse_error_writes_nothing() {
        let mut up = Vec::new();
        let mut down = Vec::new();
        let result = generate(
            Cursor::new("# x will be frobnicated\n"),
            "local.tfstate",
            &mut up,
            &mut down,
        );
        assert!(matches!(result, Err(TerravaletError::Parse { .. })));
        assert!(up.is_empty());
        assert!(down.is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_generate_up_failure_skips_down() {
        let mut down = Vec::new();
        let result = generate(Cursor::new(PLAN), "local.tfstate", &mut BrokenSink, &mut down);
        match result {
            Err(TerravaletError::Output { direction, .. }) => assert_eq!(direction, Direction::Up),
            other => panic!("expected Output error, got {:?}", other),
        }
        assert!(down.is_empty());
    }

    #[test]
    fn test_generate_down_failure_reported_as_down() {
        let mut up = Vec::new();
        let result = generate(Cursor::new(PLAN), "local.tfstate", &mut up, &mut BrokenSink);
        match result {
            Err(TerravaletError::Output { direction, .. }) => {
                assert_eq!(direction, Direction::Down)
            }
            other => panic!("expected Output error, got {:?}", other),
        }
        assert!(!up.is_empty());
    }
}
