/// Centralized error mapping for commands.
///
/// Single upgrade path if the frontend ever needs structured error
/// codes instead of display strings.
pub fn map_err(err: anyhow::Error) -> String {
    err.to_string()
}
