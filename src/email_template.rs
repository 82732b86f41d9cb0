//! HTML body of the lead notification email.
//!
//! The footer carries the submission date in the Solar Hijri calendar with
//! Persian digits, the way `fa-IR` short dates are written (`۱۴۰۳/۱/۱`).

use crate::models::LeadSubmission;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

/// Iran Standard Time, UTC+03:30 (no daylight saving since 1401).
const TEHRAN_OFFSET_SECS: i32 = 3 * 3600 + 30 * 60;

/// Cumulative day count before each Gregorian month in a common year.
const GREGORIAN_DAYS_BEFORE_MONTH: [i32; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Converts a Gregorian date to the Solar Hijri calendar.
///
/// Returns `(year, month, day)` with months numbered from 1 (Farvardin).
pub fn to_jalali(date: NaiveDate) -> (i32, u32, u32) {
    let gy = date.year();
    let gm = date.month() as usize;
    let gd = date.day() as i32;

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd
        + GREGORIAN_DAYS_BEFORE_MONTH[gm - 1];

    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy, jm as u32, jd as u32)
}

/// Replaces ASCII digits with Extended Arabic-Indic (Persian) digits.
pub fn persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32('۰' as u32 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Formats a date as a Persian short date, e.g. `۱۴۰۳/۱/۱`.
pub fn format_persian_date(date: NaiveDate) -> String {
    let (y, m, d) = to_jalali(date);
    persian_digits(&format!("{}/{}/{}", y, m, d))
}

/// Calendar date in Tehran at the given instant.
pub fn tehran_date(now: DateTime<Utc>) -> NaiveDate {
    FixedOffset::east_opt(TEHRAN_OFFSET_SECS)
        .map(|tz| now.with_timezone(&tz).date_naive())
        .unwrap_or_else(|| now.date_naive())
}

/// Escapes text for safe embedding in HTML content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the RTL notification card for a lead.
pub fn render_lead_html(lead: &LeadSubmission, date: NaiveDate) -> String {
    let name = escape_html(&lead.name);
    let email = escape_html(&lead.email);
    let phone = escape_html(&lead.phone);
    let sent_on = format_persian_date(date);

    format!(
        r#"<div dir="rtl" style="font-family: Tahoma, Arial; padding: 20px; background: linear-gradient(135deg, #0a0a0a 0%, #1a1a2e 100%); border-radius: 16px; max-width: 500px;">
  <div style="text-align: center; margin-bottom: 20px;">
    <h1 style="color: #00d4ff; margin: 0; font-size: 24px;">🎙️ دستیار صوتی فارسی</h1>
    <p style="color: #888; margin: 5px 0;">درخواست دمو جدید</p>
  </div>
  <div style="background: rgba(255,255,255,0.05); padding: 24px; border-radius: 12px; border: 1px solid rgba(0,212,255,0.2);">
    <div style="margin-bottom: 16px; padding-bottom: 16px; border-bottom: 1px solid rgba(255,255,255,0.1);">
      <span style="color: #888; font-size: 12px;">👤 نام</span>
      <p style="color: #fff; margin: 4px 0 0 0; font-size: 16px; font-weight: bold;">{name}</p>
    </div>
    <div style="margin-bottom: 16px; padding-bottom: 16px; border-bottom: 1px solid rgba(255,255,255,0.1);">
      <span style="color: #888; font-size: 12px;">📧 ایمیل</span>
      <p style="color: #00d4ff; margin: 4px 0 0 0; font-size: 16px;">
        <a href="mailto:{email}" style="color: #00d4ff; text-decoration: none;">{email}</a>
      </p>
    </div>
    <div>
      <span style="color: #888; font-size: 12px;">📱 شماره تماس</span>
      <p style="color: #fff; margin: 4px 0 0 0; font-size: 16px; font-weight: bold; direction: ltr; text-align: right;">
        <a href="tel:{phone}" style="color: #fff; text-decoration: none;">{phone}</a>
      </p>
    </div>
  </div>
  <p style="color: #666; font-size: 11px; margin-top: 20px; text-align: center;">
    ارسال خودکار از وبسایت دستیار صوتی فارسی • {sent_on}
  </p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nowruz_dates() {
        assert_eq!(to_jalali(date(2024, 3, 20)), (1403, 1, 1));
        assert_eq!(to_jalali(date(2023, 3, 21)), (1402, 1, 1));
        assert_eq!(to_jalali(date(2024, 3, 19)), (1402, 12, 29));
    }

    #[test]
    fn test_second_half_of_year() {
        // 1 Mehr 1403
        assert_eq!(to_jalali(date(2024, 9, 22)), (1403, 7, 1));
        // 31 Shahrivar closes the 31-day months
        assert_eq!(to_jalali(date(2024, 9, 21)), (1403, 6, 31));
        assert_eq!(to_jalali(date(2025, 1, 1)), (1403, 10, 12));
    }

    #[test]
    fn test_persian_digits() {
        assert_eq!(persian_digits("1403/1/1"), "۱۴۰۳/۱/۱");
        assert_eq!(persian_digits("09123456789"), "۰۹۱۲۳۴۵۶۷۸۹");
        assert_eq!(persian_digits("abc"), "abc");
    }

    #[test]
    fn test_format_persian_date() {
        assert_eq!(format_persian_date(date(2024, 3, 20)), "۱۴۰۳/۱/۱");
    }

    #[test]
    fn test_tehran_date_rolls_over_before_utc_midnight() {
        let late_utc = Utc.with_ymd_and_hms(2024, 3, 19, 21, 0, 0).unwrap();
        assert_eq!(tehran_date(late_utc), date(2024, 3, 20));

        let early_utc = Utc.with_ymd_and_hms(2024, 3, 19, 20, 0, 0).unwrap();
        assert_eq!(tehran_date(early_utc), date(2024, 3, 19));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("علی"), "علی");
    }

    #[test]
    fn test_render_embeds_all_fields() {
        let lead = LeadSubmission {
            name: "علی".to_string(),
            email: "ali@example.com".to_string(),
            phone: "09123456789".to_string(),
        };
        let html = render_lead_html(&lead, date(2024, 3, 20));

        assert!(html.contains(r#"dir="rtl""#));
        assert!(html.contains(">علی</p>"));
        assert!(html.contains("mailto:ali@example.com"));
        assert!(html.contains("tel:09123456789"));
        assert!(html.contains("۱۴۰۳/۱/۱"));
    }

    #[test]
    fn test_render_escapes_markup_in_fields() {
        let lead = LeadSubmission {
            name: "<script>alert(1)</script>".to_string(),
            email: "x@y.z".to_string(),
            phone: "1".to_string(),
        };
        let html = render_lead_html(&lead, date(2024, 3, 20));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
