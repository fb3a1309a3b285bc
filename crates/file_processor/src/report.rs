use cmdparser::Matches;

#[derive(Debug, serde::Serialize)]
pub struct Report<'a> {
    pub verbose: bool,
    pub output: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub positionals: &'a [&'a str],
}

impl<'a> From<&'a Matches<'a>> for Report<'a> {
    fn from(matches: &'a Matches<'a>) -> Self {
        Self {
            verbose: matches.flag("verbose"),
            output: matches.value("output"),
            sort: matches.value("i"),
            positionals: matches.positionals(),
        }
    }
}

impl<'a> std::fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Verbose mode: {}", if self.verbose { "ON" } else { "OFF" })?;
        if let Some(output) = self.output {
            writeln!(f, "Output file: {}", output)?;
        }
        if let Some(sort) = self.sort {
            writeln!(f, "Sort option: {}", sort)?;
        }

        writeln!(f, "Positional arguments:")?;
        for (i, arg) in self.positionals.iter().enumerate() {
            writeln!(f, "  {}: {}", i + 1, arg)?;
        }
        Ok(())
    }
}
