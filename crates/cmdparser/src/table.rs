use std::collections::HashSet;

use crate::Error;

/// The name of an option as it appears on the command line
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionName {
    Short(char),
    Long(Box<str>),
}

impl std::fmt::Display for OptionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short(ch) => write!(f, "-{}", ch),
            Self::Long(name) => write!(f, "--{}", name),
        }
    }
}

/// A single recognized option
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDescriptor {
    description: Box<str>,
    long: Option<Box<str>>,
    short: Option<char>,
    takes_argument: bool,
    default: Option<Box<str>>,
}

impl OptionDescriptor {
    /// An option that is either present or not
    pub fn flag(description: impl Into<Box<str>>) -> Self {
        Self::new(description, false)
    }

    /// An option that consumes exactly one value
    pub fn value(description: impl Into<Box<str>>) -> Self {
        Self::new(description, true)
    }

    fn new(description: impl Into<Box<str>>, takes_argument: bool) -> Self {
        Self {
            description: description.into(),
            long: None,
            short: None,
            takes_argument,
            default: None,
        }
    }

    pub fn long(mut self, name: impl Into<Box<str>>) -> Self {
        self.long.replace(name.into());
        self
    }

    pub fn short(mut self, ch: char) -> Self {
        self.short.replace(ch);
        self
    }

    /// Used when a value option is never supplied. Flags ignore this.
    pub fn default_value(mut self, value: impl Into<Box<str>>) -> Self {
        self.default.replace(value.into());
        self
    }

    pub fn description(&self) -> &str {
        &*self.description
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub const fn short_name(&self) -> Option<char> {
        self.short
    }

    pub const fn takes_argument(&self) -> bool {
        self.takes_argument
    }

    pub fn default(&self) -> Option<&str> {
        if !self.takes_argument {
            return None;
        }
        self.default.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = OptionName> + '_ {
        self.short
            .map(OptionName::Short)
            .into_iter()
            .chain(self.long.iter().cloned().map(OptionName::Long))
    }

    fn validate(&self) -> Result<(), Error> {
        if self.short.is_none() && self.long.is_none() {
            return Err(Error::Unnamed(self.description.to_string()));
        }

        if let Some(ch) = self.short {
            if matches!(ch, '-' | '=') || ch.is_whitespace() {
                return Err(Error::InvalidName(ch.to_string()));
            }
        }

        if let Some(long) = self.long_name() {
            if long.is_empty()
                || long.starts_with('-')
                || long.contains(|c: char| c == '=' || c.is_whitespace())
            {
                return Err(Error::InvalidName(long.to_string()));
            }
        }

        Ok(())
    }
}

/// An ordered set of options plus the program metadata used for help output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionTable {
    program: Box<str>,
    description: Box<str>,
    usage: Box<str>,
    options: Box<[OptionDescriptor]>,
}

impl OptionTable {
    pub fn builder(
        program: impl Into<Box<str>>,
        description: impl Into<Box<str>>,
        usage: impl Into<Box<str>>,
    ) -> Builder {
        Builder {
            program: program.into(),
            description: description.into(),
            usage: usage.into(),
            options: vec![],
        }
    }

    pub fn program(&self) -> &str {
        &*self.program
    }

    pub fn description(&self) -> &str {
        &*self.description
    }

    pub fn usage(&self) -> &str {
        &*self.usage
    }

    pub fn options(&self) -> &[OptionDescriptor] {
        &*self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn find_long(&self, name: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|opt| opt.long_name() == Some(name))
    }

    pub fn find_short(&self, ch: char) -> Option<usize> {
        self.options
            .iter()
            .position(|opt| opt.short_name() == Some(ch))
    }

    /// Looks up an option by its long name, or by a one-character short name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.find_long(name).or_else(|| {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => self.find_short(ch),
                _ => None,
            }
        })
    }
}

pub struct Builder {
    program: Box<str>,
    description: Box<str>,
    usage: Box<str>,
    options: Vec<OptionDescriptor>,
}

impl Builder {
    pub fn option(mut self, option: OptionDescriptor) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> Result<OptionTable, Error> {
        let mut seen = HashSet::new();
        for option in &self.options {
            option.validate()?;
            for name in option.names() {
                if !seen.insert(name.clone()) {
                    return Err(Error::DuplicateDescriptor(name));
                }
            }
        }

        Ok(OptionTable {
            program: self.program,
            description: self.description,
            usage: self.usage,
            options: self.options.into_boxed_slice(),
        })
    }
}
