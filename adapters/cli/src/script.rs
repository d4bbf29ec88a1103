//! Parsing of scripted player intents supplied on the command line.

use iveria_core::Direction;
use iveria_system_controls::ControlInput;
use thiserror::Error;

/// Errors raised while parsing an intent script.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ScriptError {
    /// The script contained a symbol that maps to no intent.
    #[error("unknown intent '{symbol}' at position {position}")]
    UnknownIntent {
        /// Offending character.
        symbol: char,
        /// Zero-based character offset within the script.
        position: usize,
    },
}

/// Parses a compact intent script into one input frame per symbol.
///
/// `U`/`N`, `D`/`S`, `L`/`W` and `R`/`E` step in the matching direction and
/// `G` requests a fresh map. Letters are case-insensitive; whitespace and
/// commas are ignored.
pub(crate) fn parse(script: &str) -> Result<Vec<ControlInput>, ScriptError> {
    let mut inputs = Vec::with_capacity(script.len());
    for (position, symbol) in script.chars().enumerate() {
        if symbol.is_whitespace() || symbol == ',' {
            continue;
        }

        let input = match symbol.to_ascii_uppercase() {
            'U' | 'N' => ControlInput::step(Direction::North),
            'D' | 'S' => ControlInput::step(Direction::South),
            'L' | 'W' => ControlInput::step(Direction::West),
            'R' | 'E' => ControlInput::step(Direction::East),
            'G' => ControlInput::regenerate(),
            _ => return Err(ScriptError::UnknownIntent { symbol, position }),
        };
        inputs.push(input);
    }
    Ok(inputs)
}
