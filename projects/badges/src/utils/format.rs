use chrono::NaiveDate;

/// `1234567` -> `1,234,567`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Date range label; an end date of `today` reads as "Present".
pub fn format_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> String {
    if end == today {
        format!("{} - Present", format_date(start))
    } else if start == end {
        format_date(start)
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}
