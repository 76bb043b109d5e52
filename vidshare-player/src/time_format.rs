/// Formats a playback time as `MM:SS`.
///
/// Fractions are floored and there is no hours field, so anything from one hour on wraps
/// around. Negative or non-finite times (e.g. the duration before metadata arrived) show as
/// `00:00`.
pub fn format_time(seconds: f64) -> String {
	if !seconds.is_finite() || seconds < 0.0 {
		return "00:00".to_string();
	}

	#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
	let whole_seconds = seconds.floor() as u64;
	let minutes = (whole_seconds / 60) % 60;
	let seconds = whole_seconds % 60;
	format!("{minutes:02}:{seconds:02}")
}
