use crate::OptionName;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    NoProgramName,
    UnknownOption(String),
    MissingArgument(OptionName),
    UnexpectedValue(OptionName),
    DuplicateDescriptor(OptionName),
    Unnamed(String),
    InvalidName(String),
}

impl Error {
    /// Configuration errors come from building a table, not from parsing arguments
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateDescriptor(..) | Self::Unnamed(..) | Self::InvalidName(..)
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoProgramName => {
                f.write_str("the argument list must start with the program name")
            }
            Self::UnknownOption(token) => write!(f, "unknown option: {}", token),
            Self::MissingArgument(name) => write!(f, "option {} requires an argument", name),
            Self::UnexpectedValue(name) => write!(f, "option {} does not take an argument", name),
            Self::DuplicateDescriptor(name) => {
                write!(f, "option {} is declared more than once", name)
            }
            Self::Unnamed(desc) => {
                write!(f, "option '{}' has neither a short nor a long name", desc)
            }
            Self::InvalidName(name) => write!(f, "invalid option name: '{}'", name),
        }
    }
}

impl std::error::Error for Error {}
