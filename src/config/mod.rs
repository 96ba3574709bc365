/*!
Configuration of a context.

All configuration for a context is contained within the context.
The configuration is read when lexing, rendering, and sweeping assignments, and may be revised between operations.
*/

/// A selectable spelling scheme for symbols, orthogonal to semantics.
///
/// The notation in use decides which spelling of a symbol is produced when rendering, and has no influence on which spellings are accepted when lexing --- every registered spelling of a symbol is always accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Notation {
    /// Unicode logical symbols, e.g. the and operator is `∧`.
    #[default]
    Symbolic,

    /// LaTeX commands, e.g. the and operator is `\land`.
    Latex,

    /// Characters available on a standard keyboard, e.g. the and operator is `^`.
    Typable,

    /// English words, e.g. the and operator is `AND`.
    Words,
}

impl Notation {
    /// The index of the notation in a spelling list.
    pub(crate) const fn spelling_index(self) -> usize {
        match self {
            Self::Symbolic => 0,
            Self::Latex => 1,
            Self::Typable => 2,
            Self::Words => 3,
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The notation used when rendering propositions and truth tables.
    pub notation: Notation,

    /// The maximum number of distinct atoms an exhaustive sweep will enumerate.
    ///
    /// A sweep over *k* atoms visits 2^*k* assignments, counted in a [u64].
    /// The ceiling may never usefully exceed 63, and a context intended for interactive use may prefer something far smaller.
    pub atom_ceiling: u32,
}

impl Default for Config {
    /// A default configuration renders symbolically and permits any sweep the counting type can represent.
    fn default() -> Self {
        Config {
            notation: Notation::Symbolic,
            atom_ceiling: 63,
        }
    }
}
