/// `terraform state mv` invocation against an explicit local state file.
///
/// `-lock=false` is only safe together with `-state=FILE`, which keeps the
/// operation away from the configured backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMove {
    state_path: String,
}

impl StateMove {
    pub fn new(state_path: impl Into<String>) -> Self {
        Self {
            state_path: state_path.into(),
        }
    }

    /// The command prefix shared by every move in a script.
    pub fn command(&self) -> String {
        format!("terraform state mv -lock=false -state={}", self.state_path)
    }

    /// Renders one move, addresses single-quoted verbatim.
    pub fn render(&self, src: &str, dst: &str) -> String {
        format!("{} \\\n    '{}' \\\n    '{}'\n", self.command(), src, dst)
    }
}
