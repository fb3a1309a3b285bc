use std::fmt::{Display, Formatter, Result};

use crate::{OptionDescriptor, OptionTable};

const PLACEHOLDER: &str = "<VALUE>";
const INDENT: &str = "  ";
const GAP: &str = "  ";

/// Formats the usage summary followed by one line per option, in declaration order
pub fn render_help(table: &OptionTable) -> String {
    table.to_string()
}

impl Display for OptionTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.description() {
            "" => writeln!(f, "{}", self.program())?,
            desc => writeln!(f, "{} - {}", self.program(), desc)?,
        }

        write!(f, "\nUsage: {} [OPTIONS]", self.program())?;
        match self.usage() {
            "" => writeln!(f)?,
            usage => writeln!(f, " {}", usage)?,
        }

        if self.is_empty() {
            return Ok(());
        }

        let forms = self.options().iter().map(forms).collect::<Vec<_>>();
        let width = forms
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or_default();

        f.write_str("\nOptions:\n")?;
        for (option, form) in self.options().iter().zip(&forms) {
            let default = option
                .default()
                .map(|value| format!(" (default: {})", value))
                .unwrap_or_default();
            let line = format!(
                "{}{:<width$}{}{}{}",
                INDENT,
                form,
                GAP,
                option.description(),
                default,
                width = width
            );
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

fn forms(option: &OptionDescriptor) -> String {
    let mut out = match (option.short_name(), option.long_name()) {
        (Some(short), Some(long)) => format!("-{}, --{}", short, long),
        (Some(short), None) => format!("-{}", short),
        // line up with the long names of options that have both
        (None, Some(long)) => format!("    --{}", long),
        (None, None) => String::new(),
    };

    if option.takes_argument() {
        out.push(' ');
        out.push_str(PLACEHOLDER);
    }
    out
}
