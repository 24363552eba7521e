// CSV rendering for the analytics summary export
use crate::domain::analytics::AnalyticsData;

/// Render the scalar analytics summary as a two-column CSV document.
/// Unset favorites become empty cells rather than a literal "null".
pub fn summary_csv(analytics: &AnalyticsData) -> String {
    let profile = &analytics.taste_profile;
    let rows = [
        ("Total Records", analytics.total_records.to_string()),
        ("Average Rating", format!("{:.1}", analytics.average_rating)),
        ("Favorite Shop", analytics.favorite_shop.clone().unwrap_or_default()),
        (
            "Most Common Origin",
            analytics.most_common_origin.clone().unwrap_or_default(),
        ),
        (
            "Most Common Brew Method",
            analytics.most_common_brew_method.clone().unwrap_or_default(),
        ),
        ("Acidity", format!("{:.1}", profile.acidity)),
        ("Flavor", format!("{:.1}", profile.flavor)),
        ("Body", format!("{:.1}", profile.body)),
        ("Balance", format!("{:.1}", profile.balance)),
        ("Overall", format!("{:.1}", profile.overall)),
        ("Aroma", format!("{:.1}", profile.aroma)),
        ("Aftertaste", format!("{:.1}", profile.aftertaste)),
    ];

    let mut output = String::from("Metric,Value\n");
    for (metric, value) in rows {
        output.push_str(&format!("{},{}\n", metric, escape(&value)));
    }
    output
}

/// Quote a field when it contains a delimiter, doubling inner quotes.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
