use serde::Serialize;

use crate::{
    models::StreamingOffer,
    services::normalizer::{self, NormalizedOffer, OfferPolicy},
};

use super::utils::{expiry_label, language_summary};

pub const EMPTY_MESSAGE: &str = "Not currently available to stream in this country.";
pub const EMPTY_HINT: &str = "Try selecting a different country.";

/// One card in the "Where to Watch" grid
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StreamingOptionCardView {
    /// Unique per card: service, add-on, quality and link
    pub key: String,
    pub service_id: String,
    pub service_name: String,
    pub service_logo: Option<String>,
    pub offer_type: &'static str,
    pub via_addon: Option<String>,
    pub quality: Option<&'static str>,
    pub price: Option<String>,
    pub has_english_subtitles: bool,
    pub has_japanese_subtitles: bool,
    pub watch_link: String,
    pub audio_summary: String,
    pub subtitle_summary: String,
    pub expires: Option<String>,
}

impl From<&NormalizedOffer> for StreamingOptionCardView {
    fn from(normalized: &NormalizedOffer) -> Self {
        let offer = &normalized.offer;
        Self {
            key: card_key(offer),
            service_id: offer.service.id.clone(),
            service_name: offer.service.name.clone(),
            service_logo: offer
                .service
                .image_urls
                .dark
                .clone()
                .or_else(|| offer.service.image_urls.light.clone()),
            offer_type: offer.offer_type.as_str(),
            via_addon: offer.addon.as_ref().map(|addon| format!("via {}", addon.name)),
            quality: offer.quality.map(|q| q.badge()),
            price: offer.price.as_ref().map(|p| p.formatted.clone()),
            has_english_subtitles: normalized.has_english_subtitles,
            has_japanese_subtitles: normalized.has_japanese_subtitles,
            watch_link: offer.watch_link().to_string(),
            audio_summary: language_summary(offer.audios.iter().map(|a| a.language.as_str())),
            subtitle_summary: language_summary(
                offer.subtitles.iter().map(|s| s.language.as_str()),
            ),
            expires: expiry_label(offer.expires_on),
        }
    }
}

fn card_key(offer: &StreamingOffer) -> String {
    format!(
        "{}-{}-{}-{}",
        offer.service.id,
        offer.addon.as_ref().map(|a| a.id.as_str()).unwrap_or("no-addon"),
        offer.quality.map(|q| q.badge()).unwrap_or("default"),
        offer.link
    )
}

/// The normalized streaming options for one country, or an empty state
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StreamingOptionsView {
    pub options: Vec<StreamingOptionCardView>,
    pub empty_message: Option<&'static str>,
    pub empty_hint: Option<&'static str>,
}

impl StreamingOptionsView {
    pub fn from_offers(offers: &[StreamingOffer], policy: OfferPolicy) -> Self {
        let options: Vec<StreamingOptionCardView> = normalizer::normalize(offers, policy)
            .iter()
            .map(StreamingOptionCardView::from)
            .collect();

        let empty = options.is_empty();
        Self {
            options,
            empty_message: empty.then_some(EMPTY_MESSAGE),
            empty_hint: empty.then_some(EMPTY_HINT),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AudioTrack, OfferType, Price, Quality, Service, Subtitle};

    fn netflix() -> StreamingOffer {
        let mut service = Service::new("netflix", "Netflix");
        service.image_urls.dark = Some("netflix-dark.svg".to_string());
        StreamingOffer::new(service, OfferType::Subscription, "https://netflix.com/title/1")
    }

    #[test]
    fn test_card_fields() {
        let mut offer = netflix();
        offer.quality = Some(Quality::Hd);
        offer.video_link = Some("https://netflix.com/watch/1".to_string());
        offer.audios = vec![
            AudioTrack {
                language: "eng".to_string(),
                region: None,
            },
            AudioTrack {
                language: "jpn".to_string(),
                region: None,
            },
        ];
        offer.subtitles = vec![Subtitle::new("eng")];

        let view = StreamingOptionsView::from_offers(&[offer], OfferPolicy::streaming_only());
        let card = &view.options[0];

        assert_eq!(card.service_name, "Netflix");
        assert_eq!(card.service_logo.as_deref(), Some("netflix-dark.svg"));
        assert_eq!(card.offer_type, "subscription");
        assert_eq!(card.quality, Some("HD"));
        assert_eq!(card.watch_link, "https://netflix.com/watch/1");
        assert_eq!(card.audio_summary, "ENG, JPN");
        assert_eq!(card.subtitle_summary, "ENG");
        assert!(card.has_english_subtitles);
        assert!(!card.has_japanese_subtitles);
        assert_eq!(card.via_addon, None);
        assert_eq!(card.key, "netflix-no-addon-HD-https://netflix.com/title/1");
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn test_addon_and_price_labels() {
        let mut offer = StreamingOffer::new(
            Service::new("starz", "Starz"),
            OfferType::Addon,
            "https://amazon.com/starz/1",
        );
        offer.addon = Some(Service::new("prime", "Prime Video"));
        offer.price = Some(Price {
            amount: Some("8.99".to_string()),
            currency: Some("USD".to_string()),
            formatted: "8.99 USD".to_string(),
        });

        let view = StreamingOptionsView::from_offers(&[offer], OfferPolicy::streaming_only());
        let card = &view.options[0];

        assert_eq!(card.via_addon.as_deref(), Some("via Prime Video"));
        assert_eq!(card.price.as_deref(), Some("8.99 USD"));
        assert_eq!(card.subtitle_summary, "None");
    }

    #[test]
    fn test_empty_state() {
        let rent = StreamingOffer::new(
            Service::new("apple", "Apple TV"),
            OfferType::Rent,
            "https://tv.apple.com/1",
        );

        let view = StreamingOptionsView::from_offers(&[rent], OfferPolicy::streaming_only());

        assert!(view.is_empty());
        assert_eq!(view.empty_message, Some(EMPTY_MESSAGE));
        assert_eq!(view.empty_hint, Some(EMPTY_HINT));
    }
}
