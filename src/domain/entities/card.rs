use crate::domain::entities::topic::Topic;

pub const CARD_ID_PREFIX: &str = "InfoCard_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    pub label: String,
}

/// One block of the expanded card body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSection {
    pub subtitle: Option<String>,
    pub explain: Option<String>,
    pub picture: Option<String>,
    pub links: Vec<CardLink>,
}

impl CardSection {
    pub fn is_empty(&self) -> bool {
        self.subtitle.is_none()
            && self.explain.is_none()
            && self.picture.is_none()
            && self.links.is_empty()
    }
}

/// One block of advisory content, gated by the column named `container_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub container_id: String,
    pub topic: Topic,
    pub title: String,
    pub summary: String,
    pub sections: Vec<CardSection>,
}

/// Cards in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCatalog {
    cards: Vec<InfoCard>,
}

impl CardCatalog {
    pub fn new(cards: Vec<InfoCard>) -> Self {
        Self { cards }
    }

    pub fn for_topic(&self, topic: Topic) -> impl Iterator<Item = &InfoCard> {
        self.cards.iter().filter(move |card| card.topic == topic)
    }
}

/// `"siud_21"` -> `Nursing`; the topic is the serial prefix before the last
/// underscore.
pub fn topic_for_serial(serial: &str) -> Option<Topic> {
    let (prefix, number) = serial.trim().rsplit_once('_')?;
    if number.is_empty() {
        return None;
    }
    Topic::from_serial_prefix(prefix)
}

pub fn container_id_for_serial(serial: &str) -> String {
    format!("{CARD_ID_PREFIX}{}", serial.trim())
}
