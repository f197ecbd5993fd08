//! Parser for the human-readable output of `terraform plan`.
//!
//! Only the annotation lines are of interest, for example:
//!
//! ```text
//!   # module.ci.aws_instance.docker will be destroyed
//!   # aws_instance.docker will be created
//!   # module.ci.module.workers["windows-vs2019"].aws_autoscaling_schedule.night_mode will be destroyed
//!   # module.workers["windows-vs2019"].aws_autoscaling_schedule.night_mode will be created
//! ```
//!
//! Everything else in the plan is skipped.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TerravaletError;
use crate::resource::{Action, ActionRecord};

static ANNOTATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"# (.+) will be (.+)").unwrap());

/// Addresses announced by a plan, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanChanges {
    pub create: Vec<String>,
    pub destroy: Vec<String>,
}

/// Interprets a single plan line.
///
/// Returns `Ok(None)` for lines that are not annotations.
pub fn parse_line(line: &str) -> Result<Option<ActionRecord>, TerravaletError> {
    let Some(caps) = ANNOTATION_PATTERN.captures(line) else {
        return Ok(None);
    };

    let address = &caps[1];
    let phrase = &caps[2];
    let action = Action::from_phrase(phrase).ok_or_else(|| TerravaletError::Parse {
        line: line.to_string(),
        action: phrase.to_string(),
    })?;

    Ok(Some(ActionRecord {
        address: address.to_string(),
        action,
    }))
}

/// Scans `reader` and collects the addresses to be created and destroyed.
///
/// Stops at the first read failure or unknown action.
pub fn parse<R: BufRead>(reader: R) -> Result<PlanChanges, TerravaletError> {
    let mut changes = PlanChanges::default();

    for line in reader.lines() {
        let line = line.map_err(TerravaletError::Input)?;
        let Some(record) = parse_line(&line)? else {
            continue;
        };

        match record.action {
            Action::Create => changes.create.push(record.address),
            Action::Destroy => changes.destroy.push(record.address),
            Action::Ignored => {
                tracing::debug!(address = %record.address, "skipping read during apply");
            }
        }
    }

    tracing::debug!(
        create = changes.create.len(),
        destroy = changes.destroy.len(),
        "plan parsed"
    );

    Ok(changes)
}
