use super::trial::Trial;

pub trait Stringify {
    fn str_trial(&mut self, trial: &Trial) -> String {
        trial.to_string()
    }

    fn str_trials<'a, I>(&mut self, trials: I) -> String
    where
        I: IntoIterator<Item = &'a Trial>,
    {
        trials
            .into_iter()
            .map(|t| self.str_trial(t))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One line per trial.
#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<'a, I>(&mut self, trials: I) -> String
    where
        I: IntoIterator<Item = &'a Trial>,
    {
        Stringify::str_trials(self, trials)
    }
}

impl Stringify for SimpleStringifier {}

/// Wraps the trial lines in a fenced code block for chat clients.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<'a, I>(&mut self, trials: I) -> String
    where
        I: IntoIterator<Item = &'a Trial>,
    {
        Stringify::str_trials(self, trials)
    }
}

impl Stringify for MarkdownStringifier {
    fn str_trials<'a, I>(&mut self, trials: I) -> String
    where
        I: IntoIterator<Item = &'a Trial>,
    {
        let lines = trials
            .into_iter()
            .map(|t| self.str_trial(t))
            .collect::<Vec<_>>()
            .join("\n");
        format!("```\n{}\n```", lines)
    }
}
