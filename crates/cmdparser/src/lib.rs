//! Command-line option parsing against a declared table of options.
//!
//! ```
//! use cmdparser::{OptionDescriptor, OptionTable};
//!
//! let table = OptionTable::builder("prog", "does things", "[FILE...]")
//!     .option(OptionDescriptor::flag("Verbose flag").long("verbose").short('v'))
//!     .option(OptionDescriptor::value("Output file").long("output").short('o'))
//!     .build()
//!     .unwrap();
//!
//! let args = ["prog", "-v", "--output=out.txt", "a", "b"];
//! let matches = cmdparser::parse(&args, &table).unwrap();
//! assert!(matches.flag("verbose"));
//! assert_eq!(matches.value("o"), Some("out.txt"));
//! assert_eq!(matches.positionals(), &["a", "b"]);
//! ```

mod table;
pub use table::{Builder, OptionDescriptor, OptionName, OptionTable};

mod parse;
pub use parse::{parse, Matches};

mod help;
pub use help::render_help;

mod error;
pub use error::Error;
