/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at the debug and trace levels.

Note, no log implementation is provided by the library.
The `pvo` binary installs one when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [resolution](crate::dictionary) of names to vectors.
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [composition](crate::procedures::compose).
    pub const COMPOSITION: &str = "composition";

    /// Logs related to [evaluation](crate::procedures::evaluate).
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to the [codec](crate::codec).
    pub const CODEC: &str = "codec";

    /// Logs related to [requests](crate::request) and the [session](crate::repl).
    pub const REQUEST: &str = "request";
}
