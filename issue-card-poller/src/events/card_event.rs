//! Card event and its wire representation.

use serde::Serialize;

/// Where a card is created in the downstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    /// Board name.
    pub board: String,
    /// List name.
    pub list: String,
}

/// One issue, ready to become a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEvent {
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Target board and list.
    pub destination: Destination,
}

impl CardEvent {
    /// Serializes the event into the JSON body expected by the card function.
    ///
    /// ```json
    /// {"card":{"title":"...","description":"..."},"config":{"board":"...","list":"..."}}
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if encoding fails.
    pub fn to_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&CardPayload::from(self))
    }
}

/// Request body of the card function.
#[derive(Debug, Serialize)]
struct CardPayload<'a> {
    card: CardBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<PayloadConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct CardBody<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct PayloadConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list: Option<&'a str>,
}

impl<'a> From<&'a CardEvent> for CardPayload<'a> {
    fn from(event: &'a CardEvent) -> Self {
        Self {
            card: CardBody {
                title: &event.title,
                description: &event.description,
            },
            config: Some(PayloadConfig {
                board: Some(&event.destination.board),
                list: Some(&event.destination.list),
            }),
        }
    }
}
