use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an offer lets the user watch a title
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Subscription,
    Free,
    Rent,
    Buy,
    Addon,
}

impl OfferType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "subscription" => Some(OfferType::Subscription),
            "free" => Some(OfferType::Free),
            "rent" => Some(OfferType::Rent),
            "buy" => Some(OfferType::Buy),
            "addon" => Some(OfferType::Addon),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OfferType::Subscription => "subscription",
            OfferType::Free => "free",
            OfferType::Rent => "rent",
            OfferType::Buy => "buy",
            OfferType::Addon => "addon",
        }
    }
}

/// Video quality tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Sd,
    Hd,
    Qhd,
    Uhd,
}

impl Quality {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "sd" => Some(Quality::Sd),
            "hd" => Some(Quality::Hd),
            "qhd" => Some(Quality::Qhd),
            "uhd" => Some(Quality::Uhd),
            _ => None,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Quality::Sd => "SD",
            Quality::Hd => "HD",
            Quality::Qhd => "QHD",
            Quality::Uhd => "UHD",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceImages {
    pub light: Option<String>,
    pub dark: Option<String>,
}

/// A streaming service such as Netflix or Hulu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub home_url: Option<String>,
    pub image_urls: ServiceImages,
}

impl Service {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            home_url: None,
            image_urls: ServiceImages::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub amount: Option<String>,
    pub currency: Option<String>,
    /// Display string, e.g. "3.99 USD"
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioTrack {
    pub language: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtitle {
    pub language: String,
    pub region: Option<String>,
    pub closed_captions: bool,
}

impl Subtitle {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: None,
            closed_captions: false,
        }
    }
}

/// One way to watch a title in one country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamingOffer {
    pub service: Service,
    pub offer_type: OfferType,
    pub quality: Option<Quality>,
    pub link: String,
    pub video_link: Option<String>,
    pub price: Option<Price>,
    /// Intermediary service when the title is reached through an add-on bundle
    pub addon: Option<Service>,
    pub audios: Vec<AudioTrack>,
    pub subtitles: Vec<Subtitle>,
    pub expires_on: Option<DateTime<Utc>>,
}

impl StreamingOffer {
    pub fn new(service: Service, offer_type: OfferType, link: impl Into<String>) -> Self {
        Self {
            service,
            offer_type,
            quality: None,
            link: link.into(),
            video_link: None,
            price: None,
            addon: None,
            audios: Vec::new(),
            subtitles: Vec::new(),
            expires_on: None,
        }
    }

    pub fn via_addon(&self) -> bool {
        self.addon.is_some()
    }

    /// Deep link straight into playback when the provider has one
    pub fn watch_link(&self) -> &str {
        self.video_link.as_deref().unwrap_or(&self.link)
    }
}
