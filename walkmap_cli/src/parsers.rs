use jiff::{SignedDuration, SpanRelativeTo};

fn non_negative(duration: SignedDuration, input: &str) -> Result<SignedDuration, String> {
    if duration.is_negative() {
        return Err(format!("Duration must not be negative: {input}"));
    }

    Ok(duration)
}

pub fn parse_duration(input: &str) -> Result<SignedDuration, String> {
    if let Ok(duration) = input.parse::<SignedDuration>() {
        return non_negative(duration, input);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return non_negative(duration, input);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return non_negative(SignedDuration::from_secs(seconds), input);
    }

    Err(format!("Invalid duration: {input}"))
}

pub fn parse_delimiter(input: &str) -> Result<u8, String> {
    match input {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match input.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("Delimiter must be a single ASCII character: {input}")),
        },
    }
}

/// A walk needs at least one point.
pub fn parse_min_points(input: &str) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(0) => Err(String::from("Minimum number of points must be at least 1")),
        Ok(min_points) => Ok(min_points),
        Err(error) => Err(format!("Invalid number of points {input}: {error}")),
    }
}
