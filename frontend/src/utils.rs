use chrono::{Datelike, NaiveDate};

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// "2026-11-12" -> "November 12, 2026". Unparseable input is returned as-is.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{} {}, {}", month_name(d.month()), d.day(), d.year()),
        Err(_) => date.to_string(),
    }
}

/// Collapses same-month ranges: "November 12-14, 2026".
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    let Some(end) = end else {
        return format_date(start);
    };
    match (
        NaiveDate::parse_from_str(start, "%Y-%m-%d"),
        NaiveDate::parse_from_str(end, "%Y-%m-%d"),
    ) {
        (Ok(s), Ok(e)) if s.month() == e.month() && s.year() == e.year() => {
            format!("{} {}-{}, {}", month_name(s.month()), s.day(), e.day(), s.year())
        }
        (Ok(_), Ok(_)) => format!("{} - {}", format_date(start), format_date(end)),
        _ => format_date(start),
    }
}

pub fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }
    slug
}

pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{}...", cut.trim_end())
}

/// "Dr. Elena Voss" -> "DE". Matches the avatar badge rendering.
pub fn get_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Client-side mirror of the signup endpoint's check: something before an
/// `@`, a dot in the domain, no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Staggered animation delay for the nth item of a grid.
pub fn stagger_delay(index: usize, base_delay: f32) -> String {
    format!("{:.2}s", index as f32 * base_delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_a_single_date() {
        assert_eq!(format_date("2026-11-12"), "November 12, 2026");
    }

    #[test]
    fn passes_through_unparseable_dates() {
        assert_eq!(format_date("TBA"), "TBA");
    }

    #[test]
    fn collapses_a_same_month_range() {
        assert_eq!(
            format_date_range("2026-11-12", Some("2026-11-14")),
            "November 12-14, 2026"
        );
    }

    #[test]
    fn spells_out_a_cross_month_range() {
        assert_eq!(
            format_date_range("2026-11-30", Some("2026-12-02")),
            "November 30, 2026 - December 2, 2026"
        );
    }

    #[test]
    fn range_without_an_end_is_a_single_date() {
        assert_eq!(format_date_range("2026-09-22", None), "September 22, 2026");
    }

    #[test]
    fn slugify_normalizes_punctuation_and_case() {
        assert_eq!(slugify("Healthspan Summit 2026"), "healthspan-summit-2026");
        assert_eq!(slugify("  Founders' Dinner!  "), "founders-dinner");
        assert_eq!(slugify("snake_case_title"), "snake-case-title");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_trims_and_appends_ellipsis() {
        assert_eq!(truncate("a long description here", 7), "a long...");
    }

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(get_initials("Dr. Elena Voss"), "DE");
        assert_eq!(get_initials("Priya"), "P");
    }

    #[test]
    fn email_check_matches_the_signup_baseline() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("jane+events@longevity.example"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b@c.com"));
        assert!(!validate_email("a@nodot"));
        assert!(!validate_email("@b.com"));
    }

    #[test]
    fn stagger_delay_scales_with_index() {
        assert_eq!(stagger_delay(0, 0.1), "0.00s");
        assert_eq!(stagger_delay(3, 0.1), "0.30s");
    }
}
