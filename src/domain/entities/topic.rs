/// The info-card categories, each with its own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Rights,
    Welfare,
    Nursing,
    Housing,
    Health,
    HomeAdjustments,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Rights,
        Topic::Welfare,
        Topic::Nursing,
        Topic::Housing,
        Topic::Health,
        Topic::HomeAdjustments,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Topic::Rights => "rights",
            Topic::Welfare => "welfare",
            Topic::Nursing => "nursing",
            Topic::Housing => "housing",
            Topic::Health => "health",
            Topic::HomeAdjustments => "home-adjustments",
        }
    }

    /// Prefix of the sheet's card serials, e.g. `siud` in `InfoCard_siud_21`.
    /// Older sheet tabs named columns differently from the page URLs.
    pub fn serial_prefix(self) -> &'static str {
        match self {
            Topic::Rights => "rights",
            Topic::Welfare => "wellbeing",
            Topic::Nursing => "siud",
            Topic::Housing => "Living_solutions",
            Topic::Health => "health",
            Topic::HomeAdjustments => "home-adjustments",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Topic::Rights => "זכויות",
            Topic::Welfare => "רווחה",
            Topic::Nursing => "סיעוד",
            Topic::Housing => "דיור",
            Topic::Health => "בריאות",
            Topic::HomeAdjustments => "התאמות לבית",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Topic> {
        let slug = slug.trim();
        Topic::ALL.into_iter().find(|topic| topic.slug() == slug)
    }

    pub fn from_serial_prefix(prefix: &str) -> Option<Topic> {
        let prefix = prefix.trim();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.serial_prefix() == prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_and_unknown_is_none() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_slug(topic.slug()), Some(topic));
        }
        assert_eq!(Topic::from_slug("medical"), None);
    }

    #[test]
    fn serial_prefixes_differ_from_slugs_for_legacy_columns() {
        assert_eq!(Topic::from_serial_prefix("siud"), Some(Topic::Nursing));
        assert_eq!(Topic::from_serial_prefix("wellbeing"), Some(Topic::Welfare));
        assert_eq!(
            Topic::from_serial_prefix("Living_solutions"),
            Some(Topic::Housing)
        );
        assert_eq!(Topic::from_serial_prefix("nursing"), None);
        assert_eq!(Topic::from_serial_prefix("living_solutions"), None);
    }
}
