use std::collections::HashMap;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::warn;

use crate::domain::entities::card::{
    container_id_for_serial, topic_for_serial, CardLink, CardSection, InfoCard,
};
use crate::infra::sheets::csv_row::clean_field;

pub const BUNDLED_CARDS_CSV: &str = include_str!("../../../assets/cards.csv");

const SERIAL_COLUMN: &str = "serial number";

/// Column-name prefixes of the expandable sections, in display order.
const SECTION_PREFIXES: [&str; 5] = ["Seconed", "Third", "Four", "Fifth", "Six"];

struct Columns {
    by_name: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        let by_name = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (clean_field(name), idx))
            .collect();
        Self { by_name }
    }

    fn get(&self, record: &StringRecord, name: &str) -> Option<String> {
        self.by_name
            .get(name)
            .and_then(|idx| record.get(*idx))
            .map(clean_field)
            .filter(|value| !value.is_empty())
    }

    fn link(&self, record: &StringRecord, href_col: &str, label_col: &str) -> Option<CardLink> {
        let href = self.get(record, href_col)?;
        let label = self
            .get(record, label_col)
            .unwrap_or_else(|| href.clone());
        Some(CardLink { href, label })
    }

    fn section(&self, record: &StringRecord, prefix: &str) -> CardSection {
        let links = [
            (format!("{prefix} button"), format!("{prefix} button - Text")),
            (format!("{prefix} button 2"), format!("{prefix} button 2 - Text")),
        ]
        .iter()
        .filter_map(|(href_col, label_col)| self.link(record, href_col, label_col))
        .collect();

        CardSection {
            subtitle: self.get(record, &format!("{prefix} subtitle")),
            explain: self.get(record, &format!("{prefix} explain")),
            picture: self.get(record, &format!("{prefix} picture")),
            links,
        }
    }
}

pub fn load_bundled_cards() -> Result<Vec<InfoCard>> {
    parse_card_contents(BUNDLED_CARDS_CSV).context("failed to parse bundled cards.csv")
}

/// Parses the card-content sheet. Rows shorter than the header row, rows
/// without a serial number, and serials with no known topic are skipped.
pub fn parse_card_contents(text: &str) -> Result<Vec<InfoCard>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes());
    let headers = reader
        .headers()
        .context("failed to read card csv headers")?
        .clone();
    let columns = Columns::new(&headers);
    if !columns.by_name.contains_key(SERIAL_COLUMN) {
        anyhow::bail!("card csv is missing the `{SERIAL_COLUMN}` column")
    }

    let mut cards = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to parse card row {row_idx}"))?;
        if record.len() < headers.len() {
            continue;
        }
        let Some(serial) = columns.get(&record, SERIAL_COLUMN) else {
            continue;
        };
        let Some(topic) = topic_for_serial(&serial) else {
            warn!(serial = %serial, "card serial has no known topic");
            continue;
        };

        let sections = SECTION_PREFIXES
            .iter()
            .map(|prefix| columns.section(&record, prefix))
            .filter(|section| !section.is_empty())
            .collect();

        cards.push(InfoCard {
            container_id: container_id_for_serial(&serial),
            topic,
            title: columns.get(&record, "Title").unwrap_or_default(),
            summary: columns.get(&record, "Short explain").unwrap_or_default(),
            sections,
        });
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::topic::Topic;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "serial number,Title,Short explain,\
Seconed subtitle,Seconed explain,Seconed picture,Seconed button,Seconed button - Text,Seconed button 2,Seconed button 2 - Text,\
Third subtitle,Third explain,Third picture,Third button,Third button - Text,Third button 2,Third button 2 - Text";

    #[test]
    fn rows_become_cards_with_stacked_sections() {
        let text = format!(
            "{HEADER}\n\
home-adjustments_2,פתרון זמני,\"קצר, ותמציתי\",\
מימוש והגשה,המלצה מפיזיותרפיסט,,https://www.maccabi4u.co.il,ציוד מכבי,,,\
יד שרה,השאלת רמפה,/ImagesForInfoCards/Logo1.jpg,https://yad-sarah.net/,ציוד יד שרה,https://example.org,\n"
        );

        let cards = parse_card_contents(&text).expect("should parse");

        assert_eq!(
            cards,
            vec![InfoCard {
                container_id: "InfoCard_home-adjustments_2".to_string(),
                topic: Topic::HomeAdjustments,
                title: "פתרון זמני".to_string(),
                summary: "קצר, ותמציתי".to_string(),
                sections: vec![
                    CardSection {
                        subtitle: Some("מימוש והגשה".to_string()),
                        explain: Some("המלצה מפיזיותרפיסט".to_string()),
                        picture: None,
                        links: vec![CardLink {
                            href: "https://www.maccabi4u.co.il".to_string(),
                            label: "ציוד מכבי".to_string(),
                        }],
                    },
                    CardSection {
                        subtitle: Some("יד שרה".to_string()),
                        explain: Some("השאלת רמפה".to_string()),
                        picture: Some("/ImagesForInfoCards/Logo1.jpg".to_string()),
                        links: vec![
                            CardLink {
                                href: "https://yad-sarah.net/".to_string(),
                                label: "ציוד יד שרה".to_string(),
                            },
                            CardLink {
                                href: "https://example.org".to_string(),
                                label: "https://example.org".to_string(),
                            },
                        ],
                    },
                ],
            }]
        );
    }

    #[test]
    fn empty_section_groups_are_dropped() {
        let text = format!("{HEADER}\nsiud_21,t,s,,,,,,,,,,,,,,\n");

        let cards = parse_card_contents(&text).expect("should parse");

        assert_eq!(cards.len(), 1);
        assert!(cards[0].sections.is_empty());
        assert_eq!(cards[0].topic, Topic::Nursing);
    }

    #[test]
    fn short_rows_and_blank_serials_are_skipped() {
        let text = format!(
            "{HEADER}\nrights_2,short\n,t,s,,,,,,,,,,,,,,\nhealth_3,t,s,,,,,,,,,,,,,,\n"
        );

        let cards = parse_card_contents(&text).expect("should parse");

        let ids: Vec<&str> = cards.iter().map(|c| c.container_id.as_str()).collect();
        assert_eq!(ids, vec!["InfoCard_health_3"]);
    }

    #[test]
    fn missing_serial_column_is_an_error() {
        assert!(parse_card_contents("Title\nx\n").is_err());
    }

    #[test]
    fn bundled_catalogue_uses_published_column_ids() {
        let cards = load_bundled_cards().expect("bundled cards should parse");
        let ids: Vec<&str> = cards.iter().map(|c| c.container_id.as_str()).collect();

        for expected in [
            "InfoCard_rights_1",
            "InfoCard_wellbeing_65",
            "InfoCard_siud_21",
            "InfoCard_siud_35",
            "InfoCard_Living_solutions_39",
            "InfoCard_health_44",
            "InfoCard_health_118",
            "InfoCard_home-adjustments_2",
            "InfoCard_home-adjustments_30",
        ] {
            assert!(ids.contains(&expected), "missing {expected}");
        }
        for topic in Topic::ALL {
            assert!(
                cards.iter().any(|card| card.topic == topic),
                "no card for {}",
                topic.slug()
            );
        }
    }

    #[test]
    fn bundled_health_card_keeps_site_wording() {
        let cards = load_bundled_cards().expect("bundled cards should parse");
        let card = cards
            .iter()
            .find(|card| card.container_id == "InfoCard_health_44")
            .expect("health_44 should be bundled");

        assert_eq!(card.title, "נמצאים באותה קופת החולים");
        assert_eq!(card.sections.len(), 1);
    }
}
