/// Display helpers for result cards

/// Format a duration in seconds as `M:SS` or `H:MM:SS`
///
/// Missing, zero, negative or non-finite durations render as `N/A`.
/// Fractional seconds are floored.
///
/// Examples:
/// - 65 → 1:05
/// - 3725 → 1:02:05
/// - 59.9 → 0:59
pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s.is_finite() && s > 0.0 => clock(s.floor() as u64),
        _ => "N/A".to_string(),
    }
}

/// Format a segment offset; zero is a valid timestamp here
pub fn format_timestamp(seconds: f64) -> String {
    if seconds.is_finite() && seconds > 0.0 {
        clock(seconds.floor() as u64)
    } else {
        clock(0)
    }
}

fn clock(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Human-readable name for a transcription language code
pub fn language_name(code: &str) -> String {
    match code {
        "en" => "Inglês".to_string(),
        "pt" => "Português".to_string(),
        "es" => "Espanhol".to_string(),
        "fr" => "Francês".to_string(),
        "de" => "Alemão".to_string(),
        "it" => "Italiano".to_string(),
        "error" => "Erro".to_string(),
        other => other.to_uppercase(),
    }
}
