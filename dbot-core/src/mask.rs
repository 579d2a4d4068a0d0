//! Token masking for log lines.

const VISIBLE: usize = 5;

/// Masks a bot token for logging: first 5 + "..." + last 5 chars.
/// Tokens of 10 chars or fewer are fully masked as "***".
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= VISIBLE * 2 {
        return "***".to_string();
    }
    let head: String = chars[..VISIBLE].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE..].iter().collect();
    format!("{}...{}", head, tail)
}
