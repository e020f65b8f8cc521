/// Truncated address label (`ABCDEF...WXYZ`) for anywhere a full 58-char
/// address is too wide. Inputs short enough to show whole pass through
/// unchanged.
pub fn format_address(address: &str) -> String {
    const PREFIX: usize = 6;
    const SUFFIX: usize = 4;

    if address.len() <= PREFIX + SUFFIX {
        return address.to_string();
    }
    match (
        address.get(..PREFIX),
        address.get(address.len() - SUFFIX..),
    ) {
        (Some(head), Some(tail)) => format!("{head}...{tail}"),
        // Multi-byte characters on the cut points; addresses are ASCII so
        // this only happens for arbitrary display strings
        _ => address.to_string(),
    }
}
