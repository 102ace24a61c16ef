//! Command-line token builder for planner CLI subcommands.

/// Ordered token list for one planner CLI call, starting with the subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    tokens: Vec<String>,
}

impl CliArgs {
    /// Start a command line with one or more subcommand words (`["user", "search"]`).
    pub fn command<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a bare positional value.
    pub fn positional(mut self, value: &str) -> Self {
        self.tokens.push(value.to_string());
        self
    }

    /// Append `--name value`.
    pub fn flag(mut self, name: &str, value: &str) -> Self {
        self.tokens.push(format!("--{name}"));
        self.tokens.push(value.to_string());
        self
    }

    /// Append `--name value` when `value` is present and non-empty.
    pub fn opt_flag(self, name: &str, value: Option<&String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.flag(name, v),
            _ => self,
        }
    }

    /// Append `--name value` whenever `value` is present, including `""`.
    pub fn opt_flag_keep_empty(self, name: &str, value: Option<&String>) -> Self {
        match value {
            Some(v) => self.flag(name, v),
            None => self,
        }
    }

    /// Append a bare `--name` when `on` is true.
    pub fn switch(mut self, name: &str, on: bool) -> Self {
        if on {
            self.tokens.push(format!("--{name}"));
        }
        self
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_ordering() {
        let plan = Some("P1".to_string());
        let empty = Some(String::new());
        let tokens = CliArgs::command(["user", "lookup"])
            .positional("alice@example.com")
            .flag("task", "T1")
            .opt_flag("plan", plan.as_ref())
            .opt_flag("bucket", None)
            .opt_flag("desc", empty.as_ref())
            .opt_flag_keep_empty("labels", empty.as_ref())
            .switch("no-search", true)
            .switch("incomplete", false)
            .into_vec();

        assert_eq!(
            tokens,
            vec![
                "user",
                "lookup",
                "alice@example.com",
                "--task",
                "T1",
                "--plan",
                "P1",
                "--labels",
                "",
                "--no-search"
            ]
        );
    }
}
