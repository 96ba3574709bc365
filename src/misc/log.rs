/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [lexical analysis](crate::builder::lex).
    pub const LEX: &str = "lex";

    /// Logs related to [infix to postfix restructuring](crate::builder::shunt).
    pub const SHUNT: &str = "shunt";

    /// Logs related to [building proposition trees](crate::builder).
    pub const BUILD: &str = "build";

    /// Logs related to [the brute-force reasoner](crate::procedures).
    pub const REASONER: &str = "reasoner";

    /// Logs related to [the context](crate::context).
    pub const CONTEXT: &str = "context";
}
