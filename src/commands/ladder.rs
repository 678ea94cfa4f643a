//! Ladder command: fewest single-letter changes between two words
use crate::cli::{Cli, LadderArgs};
use crate::commands::render::{output_path, PathView};
use crate::commands::RunContext;
use waypath_core::error::Result;
use waypath_core::ladder::{changed_position, Alphabet, Dictionary, WordSubstitution};

/// Execute the ladder command
pub fn execute(cli: &Cli, ctx: &RunContext, args: &LadderArgs) -> Result<()> {
    let alphabet = match &args.alphabet {
        Some(letters) => Alphabet::new(letters)?,
        None => ctx.config.alphabet()?,
    };

    // A word list file may hold words of any length; explicit words may not
    let dictionary = match &args.dictionary {
        Some(path) => Dictionary::load_of_length(path, args.start.chars().count())?,
        None => Dictionary::from_words(args.word.iter().cloned())?,
    };
    tracing::debug!(words = dictionary.len(), "load_dictionary");

    let ladder = WordSubstitution::new(dictionary, alphabet);
    let report = ladder.find_ladder(&args.start, &args.target, &ctx.opts)?;

    let view = PathView {
        mode: "ladder",
        from: args.start.clone(),
        to: args.target.clone(),
        report: &report,
    };
    output_path(cli, &view, |a: &String, b: &String| {
        let position = changed_position(a, b)?;
        let before = a.chars().nth(position)?;
        let after = b.chars().nth(position)?;
        Some(format!("position {}: '{}' -> '{}'", position, before, after))
    })
}
