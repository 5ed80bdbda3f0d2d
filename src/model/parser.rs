// File: src/model/parser.rs
//
// Tolerant parsing helpers for the pipe-delimited record format and the
// 12-hour <-> military time conversions. Nothing in here ever fails: a
// segment that cannot be understood produces `None` (or 0 for times) and the
// caller keeps its default value.

/// Delimiter separating serialized appointment fields.
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a serialized appointment line.
pub const FIELD_COUNT: usize = 6;

/// Splits a raw line into exactly [`FIELD_COUNT`] trimmed segments using the
/// first `FIELD_COUNT - 1` delimiter occurrences. Missing trailing segments
/// are empty strings.
pub fn split_fields(line: &str) -> [String; FIELD_COUNT] {
    let mut fields: [String; FIELD_COUNT] = Default::default();
    for (i, segment) in line.splitn(FIELD_COUNT, FIELD_DELIMITER).enumerate() {
        fields[i] = segment.trim().to_string();
    }
    fields
}

/// True if the segment contains at least one ASCII digit anywhere.
///
/// This is the gate for attempting numeric extraction at all: `"3x"` and
/// `"ab3"` both qualify, `"abc"` does not.
pub fn contains_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// Extracts an integer from the leading numeral prefix of a trimmed segment
/// (optional sign, then digits). `"3x"` -> 3, `"-5 min"` -> -5, `"ab3"` has
/// no numeral prefix and yields `None`.
pub fn parse_loose_int(s: &str) -> Option<i32> {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i32>().ok().map(|n| sign * n)
}

/// Converts a military time integer (`hour*100 + minute`) to 12-hour text:
/// no leading zero on the hour, two digits on the minute, uppercase meridiem
/// appended (`12:05AM`, `1:30PM`).
pub fn military_to_standard(time: i32) -> String {
    let minute = time % 100;
    let mut hour = (time - minute) / 100;
    let meridiem = if time >= 1200 { "PM" } else { "AM" };

    if hour >= 13 {
        hour -= 12;
    } else if hour == 0 {
        // Midnight hour displays as 12
        hour = 12;
    }

    format!("{}:{:02}{}", hour, minute, meridiem)
}

/// Converts 12-hour text (`"2:30pm"`, `"12:15 AM"`) to a military time
/// integer. Hour text is everything before the first colon; minute text is
/// the two characters after it; the meridiem is read from the first
/// occurrence of `a`/`A`/`p`/`P` anywhere in the string.
///
/// Conversion only succeeds when hour and minute text each carry a digit and
/// a meridiem marker is present; anything else yields 0 (midnight). A marker
/// whose two characters do not spell `AM`/`PM` (e.g. a bare trailing `a`)
/// still counts as present but applies no wraparound adjustment.
pub fn standard_to_military(time: &str) -> i32 {
    let Some(colon) = time.find(':') else {
        return 0;
    };
    let hour_text = &time[..colon];
    let minute_text: String = time[colon + 1..].chars().take(2).collect();

    let meridiem = time
        .char_indices()
        .find(|(_, c)| matches!(c, 'a' | 'A' | 'p' | 'P'))
        .map(|(idx, _)| {
            time[idx..]
                .chars()
                .take(2)
                .collect::<String>()
                .to_uppercase()
        });

    let Some(meridiem) = meridiem else {
        return 0;
    };
    if !contains_digit(hour_text) || !contains_digit(&minute_text) {
        return 0;
    }

    let mut hour = parse_loose_int(hour_text).unwrap_or(0);
    let minute = parse_loose_int(&minute_text).unwrap_or(0);

    if meridiem == "PM" && hour < 12 {
        hour += 12;
    } else if meridiem == "AM" && hour == 12 {
        hour = 0;
    }

    hour * 100 + minute
}
