use chrono::{DateTime, Utc};

/// Year span as shown on a show card: `2010`, `2010-2015`, or `N/A`
pub fn card_year_label(first: Option<i32>, last: Option<i32>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("{}-{}", first, last),
        (Some(first), None) => first.to_string(),
        (None, _) => "N/A".to_string(),
    }
}

/// Year span as shown on the details header: `2010` or `2010 - 2015`
pub fn details_year_label(first: Option<i32>, last: Option<i32>) -> Option<String> {
    let first = first?;
    Some(match last {
        Some(last) => format!("{} - {}", first, last),
        None => first.to_string(),
    })
}

pub fn rating_label(rating: Option<u32>) -> Option<String> {
    rating.filter(|r| *r > 0).map(|r| format!("{}/100", r))
}

/// Upper-cased languages joined with commas, or "None"
pub fn language_summary<'a, I>(languages: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let languages: Vec<String> = languages.into_iter().map(str::to_uppercase).collect();
    if languages.is_empty() {
        "None".to_string()
    } else {
        languages.join(", ")
    }
}

pub fn expiry_label(expires_on: Option<DateTime<Utc>>) -> Option<String> {
    expires_on.map(|date| format!("Leaving {}", date.format("%b %-d, %Y")))
}

/// Link to a show's page for one country; both parts are percent-encoded
pub fn show_href(id: &str, country: &str) -> String {
    format!(
        "/show/{}?country={}",
        urlencoding::encode(id),
        urlencoding::encode(country)
    )
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_card_year_label() {
        assert_eq!(card_year_label(Some(2010), None), "2010");
        assert_eq!(card_year_label(Some(2008), Some(2013)), "2008-2013");
        assert_eq!(card_year_label(None, Some(2013)), "N/A");
    }

    #[test]
    fn test_details_year_label() {
        assert_eq!(details_year_label(Some(2008), Some(2013)), Some("2008 - 2013".to_string()));
        assert_eq!(details_year_label(None, None), None);
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(Some(87)), Some("87/100".to_string()));
        assert_eq!(rating_label(Some(0)), None);
        assert_eq!(rating_label(None), None);
    }

    #[test]
    fn test_language_summary() {
        assert_eq!(language_summary(["en", "jpn"]), "EN, JPN");
        assert_eq!(language_summary(Vec::<&str>::new()), "None");
    }

    #[test]
    fn test_expiry_label() {
        let date = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(expiry_label(Some(date)), Some("Leaving Jan 1, 2026".to_string()));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "result", "results"), "1 result");
        assert_eq!(pluralize(3, "result", "results"), "3 results");
    }

    #[test]
    fn test_show_href_encodes_id_and_country() {
        assert_eq!(show_href("82", "us"), "/show/82?country=us");
        assert_eq!(
            show_href("a/b?c", "us&admin=1"),
            "/show/a%2Fb%3Fc?country=us%26admin%3D1"
        );
    }
}
