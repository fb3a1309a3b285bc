use crate::{Error, OptionName, OptionTable};

/// Parses `args` against `table`.
///
/// `args` must start with the program name, which is never interpreted.
/// Scanning stops at the first positional argument, a lone `-`, or the `--`
/// terminator (which is consumed).
pub fn parse<'a, S>(args: &'a [S], table: &'a OptionTable) -> Result<Matches<'a>, Error>
where
    S: AsRef<str>,
{
    let program = args.first().ok_or(Error::NoProgramName)?.as_ref();
    Parser {
        args,
        table,
        cursor: 1,
        slots: vec![Slot::Unset; table.len()],
        counts: vec![0; table.len()],
    }
    .run(program)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Slot<'a> {
    Unset,
    Flag,
    Value(&'a str),
    Default(&'a str),
}

/// The result of a successful parse
#[derive(Clone, Debug)]
pub struct Matches<'a> {
    table: &'a OptionTable,
    program: &'a str,
    slots: Box<[Slot<'a>]>,
    counts: Box<[usize]>,
    positional_index: usize,
    positionals: Box<[&'a str]>,
}

impl<'a> Matches<'a> {
    pub const fn table(&self) -> &'a OptionTable {
        self.table
    }

    /// The program name, `args[0]`
    pub const fn program(&self) -> &'a str {
        self.program
    }

    /// Index into the original argument list of the first positional argument
    ///
    /// This is the length of the argument list when there are none.
    pub const fn positional_index(&self) -> usize {
        self.positional_index
    }

    pub fn positionals(&self) -> &[&'a str] {
        &*self.positionals
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.slot(name), Some(Slot::Flag))
    }

    pub fn value(&self, name: &str) -> Option<&'a str> {
        match self.slot(name)? {
            Slot::Value(value) | Slot::Default(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the value came from the option's default rather than the command line
    pub fn is_defaulted(&self, name: &str) -> bool {
        matches!(self.slot(name), Some(Slot::Default(..)))
    }

    pub fn occurrences(&self, name: &str) -> usize {
        self.table
            .find(name)
            .map(|index| self.counts[index])
            .unwrap_or_default()
    }

    fn slot(&self, name: &str) -> Option<Slot<'a>> {
        self.table.find(name).map(|index| self.slots[index])
    }
}

enum Token<'a> {
    Terminator,
    Positional,
    Long(&'a str, Option<&'a str>),
    ShortCluster(&'a str),
}

impl<'a> Token<'a> {
    fn classify(token: &'a str) -> Self {
        match token {
            "--" => Self::Terminator,
            "-" => Self::Positional,
            _ if token.starts_with("--") => match token[2..].split_once('=') {
                Some((name, value)) => Self::Long(name, Some(value)),
                None => Self::Long(&token[2..], None),
            },
            _ if token.starts_with('-') => Self::ShortCluster(&token[1..]),
            _ => Self::Positional,
        }
    }
}

enum State<'a> {
    ScanningToken,
    ConsumingShortCluster(&'a str),
    AwaitingValue(usize, OptionName),
}

struct Parser<'a, S> {
    args: &'a [S],
    table: &'a OptionTable,
    cursor: usize,
    slots: Vec<Slot<'a>>,
    counts: Vec<usize>,
}

impl<'a, S> Parser<'a, S>
where
    S: AsRef<str>,
{
    fn run(mut self, program: &'a str) -> Result<Matches<'a>, Error> {
        let mut state = State::ScanningToken;

        let positional_index = loop {
            state = match state {
                State::ScanningToken => {
                    let token = match self.peek() {
                        Some(token) => token,
                        None => break self.cursor,
                    };

                    match Token::classify(token) {
                        Token::Positional => break self.cursor,
                        Token::Terminator => {
                            log::trace!("terminator at {}", self.cursor);
                            break self.cursor + 1;
                        }
                        Token::Long(name, value) => {
                            log::trace!("long option '{}' at {}", name, self.cursor);
                            self.cursor += 1;
                            self.long(token, name, value)?
                        }
                        Token::ShortCluster(cluster) => {
                            log::trace!("short options '{}' at {}", cluster, self.cursor);
                            self.cursor += 1;
                            State::ConsumingShortCluster(cluster)
                        }
                    }
                }

                State::ConsumingShortCluster(cluster) => self.short(cluster)?,

                State::AwaitingValue(index, name) => {
                    let value = self.peek().ok_or(Error::MissingArgument(name))?;
                    self.cursor += 1;
                    self.store(index, value);
                    State::ScanningToken
                }
            }
        };

        self.apply_defaults();

        log::debug!("positional arguments start at {}", positional_index);
        let positionals: Box<[&'a str]> = self
            .args
            .get(positional_index..)
            .unwrap_or_default()
            .iter()
            .map(|arg| arg.as_ref())
            .collect();

        Ok(Matches {
            table: self.table,
            program,
            slots: self.slots.into_boxed_slice(),
            counts: self.counts.into_boxed_slice(),
            positional_index,
            positionals,
        })
    }

    fn peek(&self) -> Option<&'a str> {
        self.args.get(self.cursor).map(AsRef::as_ref)
    }

    fn long(
        &mut self,
        token: &str,
        name: &'a str,
        value: Option<&'a str>,
    ) -> Result<State<'a>, Error> {
        let index = self
            .table
            .find_long(name)
            .ok_or_else(|| Error::UnknownOption(token.to_string()))?;

        let option = OptionName::Long(name.into());
        match (self.table.options()[index].takes_argument(), value) {
            (false, Some(..)) => Err(Error::UnexpectedValue(option)),
            (false, None) => {
                self.set_flag(index);
                Ok(State::ScanningToken)
            }
            (true, Some(value)) => {
                self.store(index, value);
                Ok(State::ScanningToken)
            }
            (true, None) => Ok(State::AwaitingValue(index, option)),
        }
    }

    fn short(&mut self, cluster: &'a str) -> Result<State<'a>, Error> {
        let mut chars = cluster.chars();
        let ch = match chars.next() {
            Some(ch) => ch,
            None => return Ok(State::ScanningToken),
        };
        let rest = chars.as_str();

        let index = self
            .table
            .find_short(ch)
            .ok_or_else(|| Error::UnknownOption(format!("-{}", ch)))?;

        if !self.table.options()[index].takes_argument() {
            self.set_flag(index);
            return Ok(State::ConsumingShortCluster(rest));
        }

        // a value option ends the cluster, anything after it is the value
        if rest.is_empty() {
            return Ok(State::AwaitingValue(index, OptionName::Short(ch)));
        }
        self.store(index, rest);
        Ok(State::ScanningToken)
    }

    fn set_flag(&mut self, index: usize) {
        self.slots[index] = Slot::Flag;
        self.counts[index] += 1;
    }

    fn store(&mut self, index: usize, value: &'a str) {
        self.slots[index] = Slot::Value(value);
        self.counts[index] += 1;
    }

    fn apply_defaults(&mut self) {
        let table = self.table;
        for (slot, option) in self.slots.iter_mut().zip(table.options()) {
            if let (Slot::Unset, Some(default)) = (*slot, option.default()) {
                log::debug!("using default '{}' for '{}'", default, option.description());
                *slot = Slot::Default(default);
            }
        }
    }
}
